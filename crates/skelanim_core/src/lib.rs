//! Public library API for recovering animation metadata from binary skeleton files.

/// Safe cursor, structural skipping, scanners, predefined fallback, and the extraction cascade.
pub mod skel;
