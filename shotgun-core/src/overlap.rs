use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The algorithm used to compute a suffix/prefix overlap.
///
/// Both methods return the same value for every pair of inputs; they differ
/// only in cost.
///
/// # Variants
///
/// * `Naive` - Try every candidate length from the longest possible down to 1 and
///   stop at the first match. Quadratic in the worst case.
/// * `PrefixFunction` - Build the prefix function of the right-hand prefix and run it
///   as an automaton over the left-hand tail. Linear time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverlapMethod {
    Naive,
    #[default]
    PrefixFunction,
}

impl Display for OverlapMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapMethod::Naive => write!(f, "naive"),
            OverlapMethod::PrefixFunction => write!(f, "prefix_function"),
        }
    }
}

impl FromStr for OverlapMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(OverlapMethod::Naive),
            "prefix_function" | "kmp" => Ok(OverlapMethod::PrefixFunction),
            _ => Err(format!(
                "Invalid overlap method: {}. Valid options are 'naive' or 'prefix_function'",
                s
            )),
        }
    }
}

impl OverlapMethod {
    /// Length of the longest suffix of `left` that equals a prefix of `right`.
    pub fn suffix_prefix_overlap(&self, left: &[u8], right: &[u8]) -> usize {
        match self {
            OverlapMethod::Naive => naive_overlap(left, right),
            OverlapMethod::PrefixFunction => prefix_function_overlap(left, right),
        }
    }
}

/// Returns true if the last `len` symbols of `left` equal the first `len` symbols of `right`.
#[inline]
pub fn is_suffix_prefix_match(left: &[u8], right: &[u8], len: usize) -> bool {
    if len > left.len() || len > right.len() {
        return false;
    }
    left.ends_with(&right[..len])
}

fn naive_overlap(left: &[u8], right: &[u8]) -> usize {
    let shortest = left.len().min(right.len());
    (1..=shortest)
        .rev()
        .find(|&len| is_suffix_prefix_match(left, right, len))
        .unwrap_or(0)
}

///
/// Compute the prefix function of `pattern`: entry `i` holds the length of the
/// longest proper prefix of `pattern[..=i]` that is also a suffix of it.
///
fn prefix_function(pattern: &[u8]) -> Vec<usize> {
    let mut pi = vec![0usize; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = pi[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}

fn prefix_function_overlap(left: &[u8], right: &[u8]) -> usize {
    let shortest = left.len().min(right.len());
    if shortest == 0 {
        return 0;
    }

    // only the tail of `left` can take part in an overlap
    let pattern = &right[..shortest];
    let text = &left[left.len() - shortest..];
    let pi = prefix_function(pattern);

    let mut matched = 0;
    for &symbol in text {
        while matched > 0 && (matched == shortest || pattern[matched] != symbol) {
            matched = pi[matched - 1];
        }
        if pattern[matched] == symbol {
            matched += 1;
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("GGGAAAC", "AAACGGG", 4)]
    #[case("AAACGGG", "GGGAAAC", 3)]
    #[case("CAA", "AAG", 2)]
    #[case("CCCGTTTA", "TTTAGCCC", 4)]
    #[case("TTTAGCCC", "CCCGTTTA", 3)]
    #[case("GGAAC", "AACGG", 3)]
    #[case("AAAA", "AAAA", 4)]
    #[case("ACAC", "CACA", 3)]
    #[case("GCAT", "TTTT", 1)]
    #[case("GCAT", "GCAT", 4)]
    #[case("GCAT", "CCCC", 0)]
    #[case("", "GCAT", 0)]
    #[case("GCAT", "", 0)]
    #[case("A", "AAAAAA", 1)]
    #[case("TTTTTTTA", "A", 1)]
    fn test_methods_agree(#[case] left: &str, #[case] right: &str, #[case] expected: usize) {
        let naive = OverlapMethod::Naive.suffix_prefix_overlap(left.as_bytes(), right.as_bytes());
        let kmp =
            OverlapMethod::PrefixFunction.suffix_prefix_overlap(left.as_bytes(), right.as_bytes());
        assert_eq!(naive, expected);
        assert_eq!(kmp, expected);
    }

    #[rstest]
    fn test_methods_agree_exhaustively() {
        // every pair of sequences up to length 4 over a two letter sub-alphabet
        let mut sequences: Vec<Vec<u8>> = vec![vec![]];
        for len in 1..=4 {
            for bits in 0..(1u32 << len) {
                let seq = (0..len)
                    .map(|i| if bits & (1 << i) == 0 { b'A' } else { b'C' })
                    .collect();
                sequences.push(seq);
            }
        }

        for left in &sequences {
            for right in &sequences {
                assert_eq!(
                    OverlapMethod::Naive.suffix_prefix_overlap(left, right),
                    OverlapMethod::PrefixFunction.suffix_prefix_overlap(left, right),
                    "methods disagree on {:?} / {:?}",
                    String::from_utf8_lossy(left),
                    String::from_utf8_lossy(right),
                );
            }
        }
    }

    #[rstest]
    fn test_prefix_function() {
        assert_eq!(prefix_function(b"AACAAAC"), vec![0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(prefix_function(b""), Vec::<usize>::new());
    }

    #[rstest]
    #[case("GGAAC", "AACGG", 1, false)]
    #[case("GGAAC", "AACGG", 3, true)]
    #[case("GGAAC", "AACGG", 0, true)]
    #[case("GGAAC", "AACGG", 6, false)]
    fn test_is_suffix_prefix_match(
        #[case] left: &str,
        #[case] right: &str,
        #[case] len: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(
            is_suffix_prefix_match(left.as_bytes(), right.as_bytes(), len),
            expected
        );
    }

    #[rstest]
    #[case("naive", OverlapMethod::Naive)]
    #[case("prefix_function", OverlapMethod::PrefixFunction)]
    #[case("KMP", OverlapMethod::PrefixFunction)]
    fn test_method_from_str(#[case] input: &str, #[case] expected: OverlapMethod) {
        assert_eq!(input.parse::<OverlapMethod>().unwrap(), expected);
    }

    #[rstest]
    fn test_method_from_str_invalid() {
        assert!("suffix_tree".parse::<OverlapMethod>().is_err());
    }
}
