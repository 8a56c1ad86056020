use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use shotgun_core::Fragment;

pub fn run_overlap(matches: &ArgMatches) -> Result<()> {
    let left = parse_fragment(matches, "left")?;
    let right = parse_fragment(matches, "right")?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_overlap_report(&mut writer, &left, &right)?;
    writer.flush()?;

    Ok(())
}

fn parse_fragment(matches: &ArgMatches, name: &str) -> Result<Fragment> {
    let sequence = matches
        .get_one::<String>(name)
        .ok_or_else(|| anyhow::anyhow!("A {} sequence is required.", name))?;

    Fragment::new(sequence).with_context(|| format!("Invalid {} sequence", name))
}

fn write_overlap_report<W: Write>(writer: &mut W, left: &Fragment, right: &Fragment) -> Result<()> {
    writeln!(writer, "left->right\t{}", left.calculate_overlap(right))?;
    writeln!(writer, "right->left\t{}", right.calculate_overlap(left))?;
    writeln!(writer, "merged\t{}", left.merged_with(right))?;

    Ok(())
}
