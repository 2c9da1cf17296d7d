use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Typical attributes of a format, as known ahead of time.
#[derive(Deserialize, Serialize, Default, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogEntry {
    pub mime_type: Option<String>,
    pub quality_label: Option<String>,
    pub bitrate: Option<u64>,
    pub audio_bitrate: Option<u32>,
}

/// Read-only lookup of the reference data by format id.
pub trait FormatCatalog {
    fn lookup(&self, itag: u16) -> Option<&CatalogEntry>;
}

/// Catalog held in memory, either built in code or loaded from JSON
/// shaped like `{"18": {"mimeType": "...", "qualityLabel": "360p"}}`.
#[derive(Deserialize, Serialize, Default, PartialEq, Clone, Debug)]
#[serde(transparent)]
pub struct StaticCatalog {
    entries: HashMap<u16, CatalogEntry>,
}

impl StaticCatalog {
    pub fn new(entries: HashMap<u16, CatalogEntry>) -> Self {
        StaticCatalog { entries }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u16, CatalogEntry)> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = (u16, CatalogEntry)>>(iter: I) -> Self {
        StaticCatalog {
            entries: iter.into_iter().collect(),
        }
    }
}

impl FormatCatalog for StaticCatalog {
    fn lookup(&self, itag: u16) -> Option<&CatalogEntry> {
        self.entries.get(&itag)
    }
}

impl<C: FormatCatalog + ?Sized> FormatCatalog for &C {
    fn lookup(&self, itag: u16) -> Option<&CatalogEntry> {
        (**self).lookup(itag)
    }
}
