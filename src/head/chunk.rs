//! Build-output chunk metadata.

use serde::{Deserialize, Serialize};

/// One build-output bundle and the file names it produced.
///
/// Read-only input to the transform; never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chunk {
    /// Chunk identifier assigned by the build.
    pub id: String,
    /// Output file names, in emission order.
    pub files: Vec<String>,
}

impl Chunk {
    pub fn new(id: impl Into<String>, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `href` points at one of this chunk's files.
    ///
    /// Suffix match, not equality: `/static/a.css` matches file `a.css`.
    /// A file name that is a suffix of an unrelated href (`app.css` vs
    /// `sub-app.css`) matches too; callers take the first chunk that
    /// matches in iteration order.
    pub fn owns_href(&self, href: &str) -> bool {
        self.files.iter().any(|file| href.ends_with(file.as_str()))
    }
}
