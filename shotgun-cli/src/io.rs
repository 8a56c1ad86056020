use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use shotgun_core::Fragment;

///
/// Get a reader for either a gzip'd or non-gzip'd file
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Same as [`get_dynamic_reader`], reading stdin when the path is `-`.
///
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Read fragments from a reader.
///
/// Two layouts are understood. If the first non-blank line starts with `>`, the
/// input is FASTA and the (possibly wrapped) lines of each record are joined
/// into one fragment. Otherwise every non-blank line that does not start with
/// `#` is a fragment of its own. Surrounding whitespace is trimmed; everything
/// else is passed to [`Fragment::new`] untouched.
///
/// # Errors
/// I/O failures, and any sequence containing a symbol outside `{G, C, A, T}`
/// (reported with its line number or record name).
pub fn read_fragments<R: BufRead>(reader: R) -> Result<Vec<Fragment>> {
    let mut fragments = Vec::new();
    let mut fasta: Option<bool> = None;

    let mut record_name: Option<String> = None;
    let mut record_sequence = String::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_number = index + 1;

        if line.is_empty() {
            continue;
        }

        let is_fasta = *fasta.get_or_insert_with(|| line.starts_with('>'));

        if !is_fasta {
            if line.starts_with('#') {
                continue;
            }
            let fragment = Fragment::new(line)
                .with_context(|| format!("Invalid fragment on line {}", line_number))?;
            fragments.push(fragment);
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(name) = record_name.take() {
                fragments.push(finish_record(&name, &record_sequence)?);
            }
            record_name = Some(header.trim().to_string());
            record_sequence.clear();
        } else {
            record_sequence.push_str(line);
        }
    }

    if let Some(name) = record_name {
        fragments.push(finish_record(&name, &record_sequence)?);
    }

    Ok(fragments)
}

fn finish_record(name: &str, sequence: &str) -> Result<Fragment> {
    Fragment::new(sequence).with_context(|| format!("Invalid fragment in FASTA record '{}'", name))
}

/// Read fragments from a path (`-` for stdin, `.gz` decompressed on the fly).
pub fn read_fragments_from(file_path_str: &str) -> Result<Vec<Fragment>> {
    let reader = get_dynamic_reader_w_stdin(file_path_str)?;
    read_fragments(reader)
        .with_context(|| format!("Failed to read fragments from {}", file_path_str))
}
