use std::env;
use chrono::FixedOffset;
use dotenv::dotenv;

use crate::errors::{GalleryError, Result};

/// Zone in which upload times are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// Accepts `local`, `utc` or an offset like `+02:00` / `-0530`.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "" | "local" => return Ok(DisplayZone::Local),
            "utc" | "z" => return Ok(DisplayZone::Utc),
            _ => {}
        }
        parse_offset(value)
            .map(DisplayZone::Fixed)
            .ok_or_else(|| GalleryError::Config(format!("unknown time zone '{}'", value)))
    }
}

fn parse_offset(value: &str) -> Option<FixedOffset> {
    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };
    if !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub display_zone: DisplayZone,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let display_zone = match env::var("GALLERY_TIME_ZONE") {
            Ok(value) => DisplayZone::parse(&value)?,
            Err(_) => DisplayZone::Local,
        };
        Ok(Self { display_zone })
    }
}
