use log::{debug, info};
use shotgun_core::Fragment;

use crate::config::AssemblerConfig;
use crate::scan::find_best_candidate;

/// One merge performed by an [`Assembler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord {
    /// The fragment placed on the left of the merge.
    pub left: Fragment,
    /// The fragment placed on the right of the merge.
    pub right: Fragment,
    pub overlap: usize,
    pub merged: Fragment,
}

///
/// Greedy assembler over an owned working collection of fragments.
///
/// The assembler copies the fragments it is given, so merging never affects
/// the caller's collection. Each successful merge removes two fragments and
/// appends the merged one, shrinking the collection by exactly one.
///
/// # Examples
///
/// See the [crate-level documentation](crate) for usage examples.
#[derive(Debug, Clone)]
pub struct Assembler {
    fragments: Vec<Fragment>,
    config: AssemblerConfig,
    history: Vec<MergeRecord>,
}

impl Assembler {
    /// Create an assembler with the default config.
    pub fn new(fragments: &[Fragment]) -> Self {
        Self::with_config(fragments, AssemblerConfig::default())
    }

    pub fn with_config(fragments: &[Fragment], config: AssemblerConfig) -> Self {
        Assembler {
            fragments: fragments.to_vec(),
            config,
            history: Vec::new(),
        }
    }

    /// The current working collection.
    ///
    /// Order reflects merge history only: merged fragments are appended at the end.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Every merge performed so far, oldest first.
    pub fn history(&self) -> &[MergeRecord] {
        &self.history
    }

    ///
    /// Perform the single best merge, if any.
    ///
    /// Merges the two fragments with the largest overlap, breaking ties by the
    /// shorter merged fragment. Merges need an overlap of at least
    /// [`AssemblerConfig::min_overlap`] (never less than 1).
    ///
    /// # Returns
    /// true iff a merge was performed. When false, the collection is unchanged.
    pub fn assemble_once(&mut self) -> bool {
        self.assemble_once_detailed().is_some()
    }

    /// Same as [`Assembler::assemble_once`], returning the merge that was performed.
    pub fn assemble_once_detailed(&mut self) -> Option<MergeRecord> {
        let candidate = find_best_candidate(&self.fragments, &self.config)?;

        // remove the higher position first so the lower one stays put
        let high = candidate.model.max(candidate.compare);
        let low = candidate.model.min(candidate.compare);
        let high_fragment = self.fragments.remove(high);
        let low_fragment = self.fragments.remove(low);

        let (left, right) = if candidate.model < candidate.compare {
            (low_fragment, high_fragment)
        } else {
            (high_fragment, low_fragment)
        };

        let merged = left.merged_with_overlap(&right, candidate.overlap);
        debug!(
            "Merged fragments {} and {} (overlap {}, merged length {})",
            candidate.model,
            candidate.compare,
            candidate.overlap,
            merged.len()
        );

        self.fragments.push(merged.clone());

        let record = MergeRecord {
            left,
            right,
            overlap: candidate.overlap,
            merged,
        };
        self.history.push(record.clone());

        Some(record)
    }

    ///
    /// Merge repeatedly until one fragment remains or no pair overlaps.
    ///
    /// Stops as soon as a merge step makes no progress, so a collection that is
    /// not fully overlap-connected is reduced to its irreducible remainder.
    ///
    /// # Returns
    /// The number of merges performed.
    pub fn assemble_all(&mut self) -> usize {
        self.assemble_all_with(|_| {})
    }

    /// Same as [`Assembler::assemble_all`], calling `on_merge` after every merge.
    pub fn assemble_all_with<F>(&mut self, mut on_merge: F) -> usize
    where
        F: FnMut(&MergeRecord),
    {
        let starting_len = self.fragments.len();
        let mut merges = 0;

        while self.fragments.len() > 1 {
            match self.assemble_once_detailed() {
                Some(record) => {
                    merges += 1;
                    on_merge(&record);
                }
                None => break,
            }
        }

        info!(
            "Assembled {} fragments into {} with {} merges",
            starting_len,
            self.fragments.len(),
            merges
        );

        merges
    }
}

impl From<Vec<Fragment>> for Assembler {
    fn from(fragments: Vec<Fragment>) -> Self {
        Assembler {
            fragments,
            config: AssemblerConfig::default(),
            history: Vec::new(),
        }
    }
}
