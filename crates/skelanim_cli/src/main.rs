#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "skelanim", about = "Recover animation names and durations from binary skeleton files")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Extract(cmd::extract::Args),
	Inspect(cmd::inspect::Args),
}

impl Commands {
	fn debug(&self) -> bool {
		match self {
			Self::Extract(args) => args.policy.debug,
			Self::Inspect(args) => args.policy.debug,
		}
	}
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> skelanim::skel::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.command.debug());

	match cli.command {
		Commands::Extract(args) => cmd::extract::run(args),
		Commands::Inspect(args) => cmd::inspect::run(args),
	}
}

fn init_tracing(debug: bool) {
	let fallback = if debug { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
