mod assemble;
mod io;
mod overlap;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "shotgun";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Reconstruct a sequence from overlapping nucleotide fragments by greedy merging.")
        .subcommand_required(true)
        .subcommand(assemble::cli::create_assemble_cli())
        .subcommand(overlap::cli::create_overlap_cli())
}

fn main() -> Result<()> {
    env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ASSEMBLE
        //
        Some((assemble::cli::ASSEMBLE_CMD, matches)) => {
            assemble::handlers::run_assemble(matches)?;
        }

        //
        // OVERLAP
        //
        Some((overlap::cli::OVERLAP_CMD, matches)) => {
            overlap::handlers::run_overlap(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
