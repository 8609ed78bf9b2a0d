use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug)]
pub enum ManifestError {
    NotFound(PathBuf),
    Io(std::io::Error),
    Parse(serde_json::Error),
    NotAnArray(PathBuf),
    InvalidSpec {
        index: usize,
        source: serde_json::Error,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::NotFound(p) => write!(f, "'{}' not found", p.display()),
            ManifestError::Io(e) => write!(f, "IO error: {}", e),
            ManifestError::Parse(e) => write!(f, "JSON parse error: {}", e),
            ManifestError::NotAnArray(p) => {
                write!(f, "'{}' must be a JSON array of page objects", p.display())
            }
            ManifestError::InvalidSpec { index, source } => {
                write!(f, "page entry {} is invalid: {}", index, source)
            }
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<serde_json::Error> for ManifestError {
    fn from(value: serde_json::Error) -> Self {
        ManifestError::Parse(value)
    }
}

/// One page of the site: where it goes, what template renders it, and
/// the variables that template sees.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PageSpec {
    pub url: String,
    pub template: String,
    pub context: Map<String, Value>,
}

/// The parsed `config.json`: an ordered list of pages to build.
#[derive(Debug)]
pub struct Manifest {
    pages: Vec<PageSpec>,
}

impl Manifest {
    /// Read and parse `<input_dir>/config.json`.
    pub fn load<P: AsRef<Path>>(input_dir: P) -> Result<Self, ManifestError> {
        let path = input_dir.as_ref().join("config.json");
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ManifestError::NotFound(path));
            }
            Err(e) => return Err(ManifestError::Io(e)),
        };

        Self::parse(&data, &path)
    }

    fn parse(data: &str, path: &Path) -> Result<Self, ManifestError> {
        let root: Value = serde_json::from_str(data)?;
        let Value::Array(entries) = root else {
            return Err(ManifestError::NotAnArray(path.to_path_buf()));
        };

        let mut pages = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            // Each entry must carry url, template and context; a missing
            // field fails the whole run rather than skipping the page.
            let spec = serde_json::from_value(entry)
                .map_err(|source| ManifestError::InvalidSpec { index, source })?;
            pages.push(spec);
        }

        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[PageSpec] {
        &self.pages
    }
}
