use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alphabet::find_invalid_symbol;
use crate::errors::FragmentError;
use crate::overlap::{OverlapMethod, is_suffix_prefix_match};

///
/// An immutable sequence of nucleotides drawn from `{G, C, A, T}`.
///
/// The sequence is validated once, when the fragment is built, and never
/// changes afterwards. Clones share the underlying storage, so copying a
/// collection of fragments only copies handles.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Fragment {
    sequence: Arc<str>,
}

impl Fragment {
    ///
    /// Create a new fragment from a sequence of nucleotides.
    ///
    /// The sequence is stored exactly as given; lowercase bases are rejected.
    ///
    /// # Arguments
    /// - sequence: text containing only the uppercase characters G, C, A and T
    ///
    /// # Errors
    /// [`FragmentError::InvalidSequence`] naming the first symbol outside the alphabet.
    pub fn new(sequence: &str) -> Result<Self, FragmentError> {
        if let Some((position, symbol)) = find_invalid_symbol(sequence) {
            return Err(FragmentError::InvalidSequence { symbol, position });
        }

        Ok(Fragment {
            sequence: Arc::from(sequence),
        })
    }

    /// Number of nucleotides in this fragment.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The sequence exactly as it was passed in.
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.sequence.as_bytes()
    }

    ///
    /// Number of nucleotides of overlap between the end of this fragment and
    /// the start of `other`.
    ///
    /// The largest overlap is reported: `CAA` and `AAG` overlap by 2, not 1.
    /// Two equal fragments always overlap by their full length.
    ///
    pub fn calculate_overlap(&self, other: &Fragment) -> usize {
        self.calculate_overlap_with(other, OverlapMethod::default())
    }

    /// Same as [`Fragment::calculate_overlap`], computed with an explicit method.
    pub fn calculate_overlap_with(&self, other: &Fragment, method: OverlapMethod) -> usize {
        if self == other {
            return self.len();
        }

        method.suffix_prefix_overlap(self.as_bytes(), other.as_bytes())
    }

    /// Returns true if the last `len` nucleotides of this fragment equal the
    /// first `len` nucleotides of `other`.
    pub fn has_overlap(&self, other: &Fragment, len: usize) -> bool {
        is_suffix_prefix_match(self.as_bytes(), other.as_bytes(), len)
    }

    ///
    /// Merge this fragment with `other` into a new fragment.
    ///
    /// This fragment is placed on the left and `other` on the right, overlapped
    /// as much as possible. With no overlap the result is a plain concatenation.
    /// Neither input is modified.
    ///
    pub fn merged_with(&self, other: &Fragment) -> Fragment {
        let overlap = self.calculate_overlap(other);
        self.merged_with_overlap(other, overlap)
    }

    ///
    /// Merge with `other` using an overlap that has already been computed.
    ///
    /// `overlap` must come from [`Fragment::calculate_overlap`] (or one of its
    /// variants) for the same pair; it is clamped to the length of `other`.
    ///
    pub fn merged_with_overlap(&self, other: &Fragment, overlap: usize) -> Fragment {
        let overlap = overlap.min(other.len());
        let right_side = &other.as_str()[overlap..];

        let mut sequence = String::with_capacity(self.len() + right_side.len());
        sequence.push_str(self.as_str());
        sequence.push_str(right_side);

        // both halves are already validated
        Fragment {
            sequence: Arc::from(sequence),
        }
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Fragment {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fragment::new(s)
    }
}

impl TryFrom<&str> for Fragment {
    type Error = FragmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Fragment::new(value)
    }
}

impl TryFrom<String> for Fragment {
    type Error = FragmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Fragment::new(&value)
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.as_str().to_string()
    }
}
