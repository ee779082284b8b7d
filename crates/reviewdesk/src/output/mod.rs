//! Output formatting functions.
//!
//! `--format json` goes through [`json`], `--format pretty` through the
//! per-view functions in [`pretty`].

pub mod json;
pub mod pretty;
