use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::Serialize;

use shotgun_assembler::{Assembler, AssemblerConfig, OverlapMethod};
use shotgun_core::Fragment;

use super::cli::DEFAULT_FORMAT;
use crate::io::read_fragments_from;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options are 'text' or 'json'", s),
        }
    }
}

#[derive(Serialize)]
struct AssemblyOutput<'a> {
    fragments: &'a [Fragment],
    merges: usize,
}

pub fn run_assemble(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| anyhow::anyhow!("A path to a fragment file is required."))?;

    let config = build_config(matches)?;

    let default_format = DEFAULT_FORMAT.to_string();
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .unwrap_or(&default_format)
        .parse()?;

    let fragments = read_fragments_from(input)?;
    info!("Read {} fragments from {}", fragments.len(), input);

    let mut assembler = Assembler::with_config(&fragments, config);

    let merges = if matches.get_flag("once") {
        usize::from(assembler.assemble_once())
    } else if matches.get_flag("progress") {
        assemble_with_progress(&mut assembler)?
    } else {
        assembler.assemble_all()
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_assembly(&mut writer, assembler.fragments(), merges, format)?;
    writer.flush()?;

    Ok(())
}

///
/// Build the assembler config: defaults, then the config file, then CLI overrides.
///
fn build_config(matches: &ArgMatches) -> Result<AssemblerConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => AssemblerConfig::try_from(Path::new(path))?,
        None => AssemblerConfig::default(),
    };

    if let Some(min_overlap) = matches.get_one::<usize>("min-overlap") {
        config.min_overlap = *min_overlap;
    }

    if let Some(method) = matches.get_one::<String>("method") {
        config.overlap_method = OverlapMethod::from_str(method).map_err(anyhow::Error::msg)?;
    }

    if matches.get_flag("parallel") {
        config.parallel = true;
    }

    Ok(config)
}

fn assemble_with_progress(assembler: &mut Assembler) -> Result<usize> {
    // a full assembly can do at most n - 1 merges
    let max_merges = assembler.len().saturating_sub(1) as u64;

    let progress_bar = ProgressBar::new(max_merges);
    progress_bar.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} merges")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    let merges = assembler.assemble_all_with(|_| progress_bar.inc(1));
    progress_bar.finish_and_clear();

    Ok(merges)
}

fn write_assembly<W: Write>(
    writer: &mut W,
    fragments: &[Fragment],
    merges: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for fragment in fragments {
                writeln!(writer, "{}", fragment)?;
            }
        }
        OutputFormat::Json => {
            let output = AssemblyOutput { fragments, merges };
            serde_json::to_writer(&mut *writer, &output)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    use crate::assemble::cli::{ASSEMBLE_CMD, create_assemble_cli};

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec![ASSEMBLE_CMD, "reads.txt"];
        argv.extend_from_slice(args);
        create_assemble_cli().try_get_matches_from(argv).unwrap()
    }

    fn fragments(sequences: &[&str]) -> Vec<Fragment> {
        sequences.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[rstest]
    fn test_build_config_defaults() {
        let config = build_config(&matches(&[])).unwrap();
        assert_eq!(config, AssemblerConfig::default());
    }

    #[rstest]
    fn test_build_config_cli_overrides_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "min_overlap = 2\noverlap_method = \"naive\"").expect("Failed to write");
        let path = file.path().to_str().unwrap();

        let from_file = build_config(&matches(&["-c", path])).unwrap();
        assert_eq!(from_file, AssemblerConfig::new(2, OverlapMethod::Naive, false));

        let overridden = build_config(&matches(&[
            "-c",
            path,
            "--min-overlap",
            "4",
            "--method",
            "prefix_function",
            "--parallel",
        ]))
        .unwrap();
        assert_eq!(
            overridden,
            AssemblerConfig::new(4, OverlapMethod::PrefixFunction, true)
        );
    }

    #[rstest]
    fn test_build_config_rejects_unknown_method() {
        assert!(build_config(&matches(&["--method", "suffix_tree"])).is_err());
    }

    #[rstest]
    fn test_write_text() {
        let mut out = Vec::new();
        let frags = fragments(&["GGGAAACGGG", "CCCGTTTAGCCC"]);
        write_assembly(&mut out, &frags, 2, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "GGGAAACGGG\nCCCGTTTAGCCC\n");
    }

    #[rstest]
    fn test_write_json() {
        let mut out = Vec::new();
        let frags = fragments(&["CCCGTTTAGCCC"]);
        write_assembly(&mut out, &frags, 1, OutputFormat::Json).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"fragments\":[\"CCCGTTTAGCCC\"],\"merges\":1}\n"
        );
    }

    #[rstest]
    fn test_progress_assembly_matches_plain() {
        let frags = fragments(&["GGGAAAC", "AAACGGG", "CCCGTTTA", "TTTAGCCC"]);
        let mut plain = Assembler::new(&frags);
        let mut with_progress = Assembler::new(&frags);

        assert_eq!(
            assemble_with_progress(&mut with_progress).unwrap(),
            plain.assemble_all()
        );
        assert_eq!(with_progress.fragments(), plain.fragments());
    }

    #[rstest]
    #[case("text", OutputFormat::Text)]
    #[case("json", OutputFormat::Json)]
    fn test_output_format(#[case] input: &str, #[case] expected: OutputFormat) {
        assert_eq!(input.parse::<OutputFormat>().unwrap(), expected);
    }
}
