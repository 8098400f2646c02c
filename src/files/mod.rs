//! Edited-file model and standard grouping.
//!
//! A parsed diff yields one [`EditedFile`] per touched path, collected in a
//! [`Files`] sequence in the order the diff lists them. [`FileManager`] then
//! distributes those files into per-standard groups that borrow from the
//! collection, so every group refers to the same instances.

mod collection;
mod edited_file;
mod manager;

#[cfg(test)]
mod tests;

pub use collection::Files;
pub use edited_file::EditedFile;
pub use manager::{FileManager, StandardGroups};
pub(crate) use manager::build_globset;
