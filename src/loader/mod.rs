//! Reads the resource and decodes it into items.

mod error;

pub use error::LoadError;

use std::io::Read;

use serde_json::{Map, Value};

use crate::model::Item;
use crate::resource::Resource;

/// Blocking loader for one resource. Run it off the UI thread.
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    resource: Resource,
}

impl DataLoader {
    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Open, read, and parse the resource. Order follows the source array.
    pub fn load(&self) -> Result<Vec<Item>, LoadError> {
        let origin = self.resource.origin();
        let mut text = String::new();
        self.resource
            .open()
            .and_then(|mut reader| reader.read_to_string(&mut text))
            .map_err(|source| LoadError::Io {
                origin: origin.clone(),
                source,
            })?;

        parse_items(&text).map_err(|err| err.with_origin(origin))
    }
}

/// Parse a JSON array of `{title, body}` objects.
///
/// Errors carry an empty origin; [`DataLoader::load`] fills it in.
pub fn parse_items(text: &str) -> Result<Vec<Item>, LoadError> {
    let objects: Vec<Map<String, Value>> =
        serde_json::from_str(text).map_err(|source| LoadError::Malformed {
            origin: String::new(),
            source,
        })?;

    objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| {
            serde_json::from_value(Value::Object(object)).map_err(|source| {
                LoadError::InvalidItem {
                    origin: String::new(),
                    index,
                    source,
                }
            })
        })
        .collect()
}

impl LoadError {
    fn with_origin(self, origin: String) -> Self {
        match self {
            Self::Io { source, .. } => Self::Io { origin, source },
            Self::Malformed { source, .. } => Self::Malformed { origin, source },
            Self::InvalidItem { index, source, .. } => Self::InvalidItem {
                origin,
                index,
                source,
            },
        }
    }
}
