use clap::{Arg, Command};

pub const OVERLAP_CMD: &str = "overlap";

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .about("Report the overlap between two sequences in both directions and their merge")
        .arg_required_else_help(true)
        .arg(Arg::new("left").required(true).help("Sequence placed on the left"))
        .arg(Arg::new("right").required(true).help("Sequence placed on the right"))
}
