pub mod fragment;

// re-export for cleaner imports
pub use self::fragment::Fragment;
