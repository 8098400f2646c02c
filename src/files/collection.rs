//! Ordered, name-unique collection of edited files.

use super::edited_file::EditedFile;

/// Edited files in the order the diff introduced them, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Files {
    files: Vec<EditedFile>,
}

impl Files {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file. A file whose name is already present is merged into
    /// the existing entry instead of being added twice.
    pub fn push(&mut self, file: EditedFile) {
        match self.files.iter_mut().find(|f| f.name() == file.name()) {
            Some(existing) => {
                for (line_number, content) in file.edited_lines() {
                    existing.register_edited_line(*line_number, content.clone());
                }
            }
            None => self.files.push(file),
        }
    }

    /// Look up a file by exact path.
    pub fn find(&self, name: &str) -> Option<&EditedFile> {
        self.files.iter().find(|f| f.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a Files {
    type Item = &'a EditedFile;
    type IntoIter = std::slice::Iter<'a, EditedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
