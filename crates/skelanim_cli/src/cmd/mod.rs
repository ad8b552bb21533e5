/// Skeleton file discovery under a root directory.
pub mod discover;
/// Batch extraction command.
pub mod extract;
/// Single-file inspection command.
pub mod inspect;
/// Lua config rendering.
pub mod lua;
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;
