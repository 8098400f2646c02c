//! Filesystem utilities for commit-guard.
//!
//! Config files are staged into a directory that several hook runs may share,
//! so writes there go through [`atomic_write`].

pub mod atomic;

pub use atomic::atomic_write;
