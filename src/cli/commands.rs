use super::Commands;
use anyhow::Result;
use chrono::{Local, Utc};
use log::info;
use std::io::Write;

use crate::config::DisplayZone;
use crate::models::{EntryLabels, FileMeta, Gallery, GalleryEntry};
use crate::utils::mime::content_type_from_file_path;

pub fn labels_for(entry: &GalleryEntry, zone: DisplayZone) -> EntryLabels {
    match zone {
        DisplayZone::Local => entry.labels_in(&Local),
        DisplayZone::Utc => entry.labels_in(&Utc),
        DisplayZone::Fixed(offset) => entry.labels_in(&offset),
    }
}

fn write_block(out: &mut impl Write, labels: &EntryLabels) -> Result<()> {
    if labels.file_name.is_empty() {
        writeln!(out, "(unnamed)")?;
    } else {
        writeln!(out, "{}", labels.file_name)?;
    }
    for line in [&labels.content_type, &labels.size, &labels.uploaded] {
        if !line.is_empty() {
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(())
}

pub fn handle_cli(cmd: Commands, zone: DisplayZone, out: &mut impl Write) -> Result<()> {
    match cmd {
        Commands::Mime { paths } => {
            for path in paths {
                let content_type = content_type_from_file_path(&path);
                let shown = if content_type.is_empty() { "-" } else { content_type };
                writeln!(out, "{}\t{}", path, shown)?;
            }
        }
        Commands::Describe { input, file_id, json } => {
            let gallery = Gallery::from_path(&input)?;
            info!("loaded {} images from {}", gallery.len(), input.display());

            let selected: Vec<&GalleryEntry> = match file_id {
                Some(id) => vec![gallery.get(&id)?],
                None => gallery.entries().iter().collect(),
            };
            let labels: Vec<EntryLabels> = selected.into_iter().map(|e| labels_for(e, zone)).collect();

            if json {
                serde_json::to_writer_pretty(&mut *out, &labels)?;
                writeln!(out)?;
            } else {
                for (i, l) in labels.iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    write_block(out, l)?;
                }
            }
        }
        Commands::Inspect { path } => {
            let meta = FileMeta::from_local_path(&path)?;
            let entry = GalleryEntry { id: None, file: Some(meta) };
            write_block(out, &labels_for(&entry, zone))?;
        }
    }
    Ok(())
}
