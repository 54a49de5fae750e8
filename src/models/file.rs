use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use log::debug;

use crate::errors::Result;

/// Creation time of an uploaded file as the backend reports it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Textual date, usually ISO-8601.
    Text(String),
}

impl Timestamp {
    pub fn is_present(&self) -> bool {
        match self {
            Timestamp::Millis(ms) => *ms != 0,
            Timestamp::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp::Millis(value.timestamp_millis())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl FileMeta {
    /// Size in bytes, or `None` when missing or zero.
    pub fn size(&self) -> Option<u64> {
        self.file_size.filter(|n| *n > 0)
    }

    pub fn timestamp(&self) -> Option<&Timestamp> {
        self.created_at.as_ref().filter(|ts| ts.is_present())
    }

    /// Metadata for a local file that is about to be uploaded.
    pub fn from_local_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        // not every filesystem records a birth time
        let created = meta.created().or_else(|e| {
            debug!("no creation time for {}: {e}, using mtime", path.display());
            meta.modified()
        });
        let created_at = created.ok().map(|t: SystemTime| Timestamp::from(DateTime::<Utc>::from(t)));

        Ok(FileMeta {
            id: None,
            file_name,
            file_size: Some(meta.len()),
            created_at,
        })
    }
}
