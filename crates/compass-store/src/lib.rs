//! # compass-store — Requirement Snapshot Loading
//!
//! Loads the compliance-requirement snapshot from its CSV source and holds
//! it for the process lifetime. The store is the only component in the
//! stack with load-time side effects; everything downstream is a pure
//! function over the slice it returns.
//!
//! ## Design
//!
//! - The store is an explicit, injectable object — callers construct it
//!   with a path and pass it (or its loaded slice) around. No hidden
//!   process globals.
//! - The load is guarded one-time initialization: concurrent first callers
//!   cannot double-read the source, and every later call returns the same
//!   cached slice without touching the filesystem.
//! - Load-time errors fail fast and whole: a missing file or a single
//!   corrupt row aborts the entire load. No partial dataset is ever
//!   returned.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::RecordStore;
