use rayon::prelude::*;
use shotgun_core::{Fragment, OverlapMethod};

use crate::config::AssemblerConfig;

/// A mergeable ordered pair found while scanning the working collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the fragment placed on the left of the merge.
    pub model: usize,
    /// Position of the fragment placed on the right of the merge.
    pub compare: usize,
    pub overlap: usize,
    /// Length of the fragment the merge would produce.
    pub merged_len: usize,
}

impl Candidate {
    /// Returns true if `self`, found later in scan order, displaces `incumbent`:
    /// a strictly larger overlap, or an equal overlap with a strictly shorter merge.
    pub fn replaces(&self, incumbent: &Candidate) -> bool {
        self.overlap > incumbent.overlap
            || (self.overlap == incumbent.overlap && self.merged_len < incumbent.merged_len)
    }
}

fn keep_best(best: Option<Candidate>, next: Candidate) -> Option<Candidate> {
    match best {
        Some(incumbent) if !next.replaces(&incumbent) => Some(incumbent),
        _ => Some(next),
    }
}

///
/// Best candidate with `fragments[model]` on the left, scanning `compare` in order.
///
fn best_in_row(
    fragments: &[Fragment],
    model: usize,
    min_overlap: usize,
    method: OverlapMethod,
) -> Option<Candidate> {
    let left = &fragments[model];

    fragments
        .iter()
        .enumerate()
        .filter(|(compare, _)| *compare != model)
        .filter_map(|(compare, right)| {
            let overlap = left.calculate_overlap_with(right, method);
            (overlap >= min_overlap).then(|| Candidate {
                model,
                compare,
                overlap,
                merged_len: left.len() + right.len() - overlap,
            })
        })
        .fold(None, keep_best)
}

///
/// Find the pair the greedy assembler should merge next.
///
/// Pairs are visited in row-major `(model, compare)` order. With
/// `config.parallel` set, rows are evaluated on the rayon pool and their
/// winners folded back in row order, which selects the same pair as the
/// sequential scan.
///
/// # Returns
/// `None` when fewer than two fragments exist or no pair reaches the minimum overlap.
pub fn find_best_candidate(fragments: &[Fragment], config: &AssemblerConfig) -> Option<Candidate> {
    if fragments.len() < 2 {
        return None;
    }

    let min_overlap = config.effective_min_overlap();
    let method = config.overlap_method;

    if config.parallel {
        let row_winners: Vec<Option<Candidate>> = (0..fragments.len())
            .into_par_iter()
            .map(|model| best_in_row(fragments, model, min_overlap, method))
            .collect();

        row_winners.into_iter().flatten().fold(None, keep_best)
    } else {
        (0..fragments.len())
            .filter_map(|model| best_in_row(fragments, model, min_overlap, method))
            .fold(None, keep_best)
    }
}
