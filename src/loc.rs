use std::path::Path;
use std::path::PathBuf;

/// A position within some schema source file.
///
/// Locations are optional throughout the schema model: a schema assembled
/// programmatically carries none, and diagnostics that reference such
/// elements degrade to fewer (or zero) locations.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SourceLocation {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl SourceLocation {
    pub fn new<P: AsRef<Path>>(
        file: Option<P>,
        line: usize,
        col: usize,
    ) -> Self {
        Self {
            col,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file.as_ref() {
            Some(file) => write!(
                f,
                "{}:{}:{}",
                file.display(),
                self.line,
                self.col,
            ),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}
