//! Source of the raw JSON text.
//!
//! The bundled fixture is compiled into the binary and is always present.
//! A file-backed resource is read from disk on every open, so it can
//! disappear or reappear between loads.

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

const BUNDLED_NAME: &str = "sample.json";
const BUNDLED_SAMPLE: &str = include_str!("../assets/sample.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Bundled {
        name: &'static str,
        contents: &'static str,
    },
    File(PathBuf),
}

impl Default for Resource {
    fn default() -> Self {
        Self::bundled()
    }
}

impl Resource {
    pub fn bundled() -> Self {
        Self::Bundled {
            name: BUNDLED_NAME,
            contents: BUNDLED_SAMPLE,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Picks the file override when one is given, the bundled fixture otherwise.
    pub fn resolve(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::file(path),
            None => Self::bundled(),
        }
    }

    pub fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        match self {
            Self::Bundled { contents, .. } => Ok(Box::new(Cursor::new(contents.as_bytes()))),
            Self::File(path) => Ok(Box::new(File::open(path)?)),
        }
    }

    /// Human-readable label for logs and error messages.
    pub fn origin(&self) -> String {
        match self {
            Self::Bundled { name, .. } => format!("bundled:{name}"),
            Self::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_resource_opens() {
        let mut text = String::new();
        Resource::bundled()
            .open()
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert!(text.trim_start().starts_with('['));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resource = Resource::file(dir.path().join("absent.json"));
        let err = resource.open().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn resolve_prefers_override() {
        let path = PathBuf::from("/tmp/items.json");
        assert_eq!(Resource::resolve(Some(path.as_path())), Resource::File(path));
        assert_eq!(Resource::resolve(None), Resource::bundled());
    }

    #[test]
    fn origin_labels() {
        assert_eq!(Resource::bundled().origin(), "bundled:sample.json");
        assert_eq!(Resource::file("/data/x.json").origin(), "/data/x.json");
    }
}
