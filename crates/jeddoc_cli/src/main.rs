#![allow(missing_docs)]

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(name = "jeddoc", about = "Decompile GAL16V8 JEDEC fuse maps into logic equations")]
struct Cli {
	#[command(flatten)]
	args: cmd::decompile::Args,
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> jeddoc::jedec::Result<()> {
	let cli = Cli::parse();
	cmd::decompile::run(cli.args)
}
