//! reviewdesk_core - pure data model and storage contracts.
//!
//! Nothing in this crate performs I/O. Storage backends live in the
//! `reviewdesk` crate and implement the traits in [`storage`].

pub mod catalog;
pub mod storage;
