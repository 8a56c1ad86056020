use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const ASSEMBLE_CMD: &str = "assemble";
pub const DEFAULT_FORMAT: &str = "text";

pub fn create_assemble_cli() -> Command {
    Command::new(ASSEMBLE_CMD)
        .about("Greedily merge a set of fragments into as few sequences as possible")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .required(true)
                .help("Fragment file: one sequence per line or FASTA, optionally gzipped. Use - for stdin"),
        )
        .arg(arg!(-c --config <config> "A .toml file with assembler settings"))
        .arg(
            Arg::new("min-overlap")
                .long("min-overlap")
                .value_parser(value_parser!(usize))
                .help("Smallest overlap a merge may use (overrides the config file)"),
        )
        .arg(arg!(-m --method <method> "Overlap method: naive or prefix_function (overrides the config file)"))
        .arg(
            arg!(--parallel "Evaluate the pairwise overlap scan on all cores")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--once "Perform a single merge instead of a full assembly")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-f --format <format> "Output format: text or json")
                .value_parser(["text", "json"])
                .default_value(DEFAULT_FORMAT),
        )
        .arg(arg!(--progress "Show a progress bar while assembling").action(ArgAction::SetTrue))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_all_flags() {
        let matches = create_assemble_cli()
            .try_get_matches_from([
                ASSEMBLE_CMD,
                "reads.txt",
                "--min-overlap",
                "3",
                "--method",
                "naive",
                "--parallel",
                "--format",
                "json",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<String>("input").unwrap(), "reads.txt");
        assert_eq!(matches.get_one::<usize>("min-overlap"), Some(&3));
        assert_eq!(matches.get_one::<String>("method").unwrap(), "naive");
        assert!(matches.get_flag("parallel"));
        assert!(!matches.get_flag("once"));
        assert_eq!(matches.get_one::<String>("format").unwrap(), "json");
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result =
            create_assemble_cli().try_get_matches_from([ASSEMBLE_CMD, "reads.txt", "-f", "xml"]);
        assert!(result.is_err());
    }
}
