//! Core types for greedy overlap assembly of nucleotide fragments.
//!
//! This crate provides the [`Fragment`](models::Fragment) value type: an immutable,
//! validated sequence over the four-letter nucleotide alphabet `{G, C, A, T}`,
//! together with the directional overlap measurement and merge operations the
//! assembler is built on.
//!
//! ## Quick Start
//!
//! ```rust
//! use shotgun_core::models::Fragment;
//!
//! let left: Fragment = "GGGAAAC".parse().unwrap();
//! let right: Fragment = "AAACGGG".parse().unwrap();
//!
//! // the last four symbols of `left` equal the first four of `right`
//! assert_eq!(left.calculate_overlap(&right), 4);
//! assert_eq!(right.calculate_overlap(&left), 3);
//!
//! let merged = left.merged_with(&right);
//! assert_eq!(merged.as_str(), "GGGAAACGGG");
//! ```
//!
//! Construction is the only fallible operation:
//!
//! ```rust
//! use shotgun_core::models::Fragment;
//! use shotgun_core::errors::FragmentError;
//!
//! let err = Fragment::new("GATTXCA").unwrap_err();
//! assert!(matches!(err, FragmentError::InvalidSequence { symbol: 'X', position: 4 }));
//! ```

/// The fixed nucleotide alphabet.
pub mod alphabet;

/// Error types for fragment construction.
pub mod errors;

/// Fragment model.
pub mod models;

/// Suffix/prefix overlap computation.
///
/// See [`OverlapMethod`](overlap::OverlapMethod) for the available algorithms.
pub mod overlap;

// re-exports
pub use self::errors::FragmentError;
pub use self::models::Fragment;
pub use self::overlap::OverlapMethod;
