//! # shotgun
//!
//! Reconstruct a contiguous nucleotide sequence from overlapping fragments by
//! repeatedly merging the pair with the largest end-to-start overlap.
//!
//! The functionality is split across workspace crates and re-exported here
//! behind cargo features:
//!
//! - `core`: [`Fragment`](core::models::Fragment), the alphabet and overlap computation.
//! - `assembler`: the greedy [`Assembler`](assembler::Assembler).
//!
//! ```rust
//! # #[cfg(feature = "assembler")]
//! # {
//! use shotgun::assembler::Assembler;
//! use shotgun::core::models::Fragment;
//!
//! let reads: Vec<Fragment> = ["ATGGCGTACG", "CGTACGTTAGCC", "TTAGCCTAGGC", "TAGGCTAACGT"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let mut assembler = Assembler::new(&reads);
//! assembler.assemble_all();
//! assert_eq!(assembler.fragments()[0].as_str(), "ATGGCGTACGTTAGCCTAGGCTAACGT");
//! # }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use shotgun_core as core;

#[cfg(feature = "assembler")]
#[doc(inline)]
pub use shotgun_assembler as assembler;
