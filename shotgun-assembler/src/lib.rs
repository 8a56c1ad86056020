//! Greedy overlap assembly of nucleotide fragments.
//!
//! The [`Assembler`] owns a working collection of [`Fragment`]s and repeatedly
//! merges the ordered pair with the largest suffix/prefix overlap until a single
//! fragment remains or no pair overlaps any more.
//!
//! ## Quick Start
//!
//! ```rust
//! use shotgun_assembler::Assembler;
//! use shotgun_core::Fragment;
//!
//! let fragments: Vec<Fragment> = ["CCCGTTTA", "TTTAGCCC"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let mut assembler = Assembler::new(&fragments);
//! assert!(assembler.assemble_once());
//! assert_eq!(assembler.fragments().len(), 1);
//! assert_eq!(assembler.fragments()[0].as_str(), "CCCGTTTAGCCC");
//!
//! // nothing left to merge
//! assert!(!assembler.assemble_once());
//!
//! // the caller's collection is untouched
//! assert_eq!(fragments.len(), 2);
//! ```
//!
//! ## Selection rule
//!
//! Every ordered pair `(model, compare)` of distinct positions is scanned in
//! row-major order. The pair with the strictly largest overlap wins; ties keep
//! the earlier pair unless a later one produces a strictly shorter merge. An
//! overlap below [`AssemblerConfig::min_overlap`] (at least 1) never qualifies.

pub mod assembler;
pub mod config;

/// Pairwise candidate search.
pub mod scan;

// re-exports
pub use self::assembler::{Assembler, MergeRecord};
pub use self::config::AssemblerConfig;
pub use shotgun_core::{Fragment, OverlapMethod};
