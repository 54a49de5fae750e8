use chrono::{Local, TimeZone};
use log::warn;
use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::errors::{GalleryError, Result};
use crate::models::FileMeta;
use crate::utils::format::{size_string_from_file, time_string_from_file_in};
use crate::utils::mime::content_type_from_file_path;

/// One image object as returned by a gallery query.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GalleryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileMeta>,
}

/// Everything the gallery view shows for one image.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryLabels {
    pub file_id: String,
    pub file_name: String,
    pub content_type: String,
    pub size: String,
    pub uploaded: String,
}

impl GalleryEntry {
    pub fn file_id(&self) -> &str {
        self.file
            .as_ref()
            .and_then(|f| f.id.as_deref())
            .unwrap_or("")
    }

    pub fn file_name(&self) -> &str {
        self.file
            .as_ref()
            .and_then(|f| f.file_name.as_deref())
            .unwrap_or("")
    }

    pub fn labels(&self) -> EntryLabels {
        self.labels_in(&Local)
    }

    pub fn labels_in<Tz>(&self, tz: &Tz) -> EntryLabels
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let file = self.file.as_ref();
        EntryLabels {
            file_id: self.file_id().to_string(),
            file_name: self.file_name().to_string(),
            content_type: content_type_from_file_path(self.file_name()).to_string(),
            size: size_string_from_file(file),
            uploaded: time_string_from_file_in(file, tz),
        }
    }
}

#[derive(Deserialize)]
struct QueryResult {
    results: Vec<GalleryEntry>,
}

/// Image rows in query order, one per file id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    pub fn new(rows: Vec<GalleryEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let file_id = row.file_id();
            if !file_id.is_empty() && !seen.insert(file_id.to_string()) {
                warn!("skipping duplicate image for file {}", file_id);
                continue;
            }
            entries.push(row);
        }
        Gallery { entries }
    }

    /// Parses either `{"results": [...]}` or a bare array of rows.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<GalleryEntry>>(json)?
        } else {
            serde_json::from_str::<QueryResult>(json)?.results
        };
        Ok(Gallery::new(rows))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Gallery::from_json_str(&json)
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, file_id: &str) -> Option<&GalleryEntry> {
        self.entries.iter().find(|e| !file_id.is_empty() && e.file_id() == file_id)
    }

    pub fn get(&self, file_id: &str) -> Result<&GalleryEntry> {
        self.find(file_id)
            .ok_or_else(|| GalleryError::NotFound(file_id.to_string()))
    }
}
