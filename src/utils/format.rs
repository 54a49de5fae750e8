use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use log::debug;
use std::fmt::Display;

use crate::models::{FileMeta, Timestamp};

// Largest distance from the epoch a browser Date can represent.
const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn size_string_from_file(file: Option<&FileMeta>) -> String {
    match file.and_then(FileMeta::size) {
        Some(size) => format!("Size: {} bytes", size),
        None => String::new(),
    }
}

/// Upload label in the machine's local time zone.
pub fn time_string_from_file(file: Option<&FileMeta>) -> String {
    time_string_from_file_in(file, &Local)
}

/// Upload label, e.g. `Uploaded: Sat Jan 02 2021 03:04`, with the date and
/// time expressed in `tz`. Unparseable timestamps give an empty string.
pub fn time_string_from_file_in<Tz>(file: Option<&FileMeta>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(ts) = file.and_then(FileMeta::timestamp) else {
        return String::new();
    };
    let Some(date) = parse_timestamp(ts, tz) else {
        debug!("unparseable upload timestamp {:?}", ts);
        return String::new();
    };
    // the label layout has room for a four-digit year only
    if !(0..=9999).contains(&date.year()) {
        debug!("upload timestamp {:?} is outside four-digit years", ts);
        return String::new();
    }

    format!(
        "Uploaded: {} {}:{}",
        date.format("%a %b %d %Y"),
        double_digit_number(date.hour().into()),
        double_digit_number(date.minute().into()),
    )
}

pub fn double_digit_number(number: i64) -> String {
    if (0..10).contains(&number) {
        format!("0{}", number)
    } else {
        number.to_string()
    }
}

fn parse_timestamp<Tz: TimeZone>(ts: &Timestamp, tz: &Tz) -> Option<DateTime<Tz>> {
    match ts {
        Timestamp::Millis(ms) => {
            if ms.unsigned_abs() > MAX_EPOCH_MILLIS as u64 {
                return None;
            }
            DateTime::<Utc>::from_timestamp_millis(*ms).map(|dt| dt.with_timezone(tz))
        }
        Timestamp::Text(text) => parse_text(text.trim(), tz),
    }
}

fn parse_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(tz));
    }

    // without an offset the wall clock belongs to the display zone
    for fmt in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    // a bare date means midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).with_timezone(tz));
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn created(ts: Timestamp) -> FileMeta {
        FileMeta {
            created_at: Some(ts),
            ..Default::default()
        }
    }

    fn sized(n: u64) -> FileMeta {
        FileMeta {
            file_size: Some(n),
            ..Default::default()
        }
    }

    #[test]
    fn size_label() {
        assert_eq!(size_string_from_file(Some(&sized(1024))), "Size: 1024 bytes");
        assert_eq!(size_string_from_file(Some(&sized(1234567))), "Size: 1234567 bytes");
    }

    #[test]
    fn size_label_empty_without_size() {
        assert_eq!(size_string_from_file(Some(&FileMeta::default())), "");
        assert_eq!(size_string_from_file(None), "");
        assert_eq!(size_string_from_file(Some(&sized(0))), "");
    }

    #[test]
    fn time_label_from_millis() {
        let file = created(Timestamp::Millis(1_609_556_640_000));
        assert_eq!(
            time_string_from_file_in(Some(&file), &Utc),
            "Uploaded: Sat Jan 02 2021 03:04"
        );
    }

    #[test]
    fn time_label_from_iso_text() {
        let file = created(Timestamp::Text("2021-01-02T03:04:00Z".into()));
        assert_eq!(
            time_string_from_file_in(Some(&file), &Utc),
            "Uploaded: Sat Jan 02 2021 03:04"
        );

        let file = created(Timestamp::Text("2006-01-02T15:04:05.123+00:00".into()));
        assert_eq!(
            time_string_from_file_in(Some(&file), &Utc),
            "Uploaded: Mon Jan 02 2006 15:04"
        );
    }

    #[test]
    fn time_label_follows_display_zone() {
        let file = created(Timestamp::Text("2021-01-02T23:30:00Z".into()));
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            time_string_from_file_in(Some(&file), &plus_two),
            "Uploaded: Sun Jan 03 2021 01:30"
        );
    }

    #[test]
    fn naive_text_is_wall_clock_in_display_zone() {
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        for text in ["2021-01-02T03:04:05", "2021-01-02 03:04", "2021-01-02T03:04:05.250"] {
            let file = created(Timestamp::Text(text.into()));
            assert_eq!(
                time_string_from_file_in(Some(&file), &minus_five),
                "Uploaded: Sat Jan 02 2021 03:04",
                "{}",
                text
            );
        }
    }

    #[test]
    fn bare_date_is_utc_midnight() {
        let file = created(Timestamp::Text("2021-01-02".into()));
        assert_eq!(
            time_string_from_file_in(Some(&file), &Utc),
            "Uploaded: Sat Jan 02 2021 00:00"
        );
        let minus_one = FixedOffset::west_opt(3600).unwrap();
        assert_eq!(
            time_string_from_file_in(Some(&file), &minus_one),
            "Uploaded: Fri Jan 01 2021 23:00"
        );
    }

    #[test]
    fn rfc2822_text() {
        let file = created(Timestamp::Text("Sat, 02 Jan 2021 03:04:00 +0000".into()));
        assert_eq!(
            time_string_from_file_in(Some(&file), &Utc),
            "Uploaded: Sat Jan 02 2021 03:04"
        );
    }

    #[test]
    fn single_digit_day_is_padded() {
        let file = created(Timestamp::Text("2024-03-05T09:07:00Z".into()));
        assert_eq!(
            time_string_from_file_in(Some(&file), &Utc),
            "Uploaded: Tue Mar 05 2024 09:07"
        );
    }

    #[test]
    fn time_label_empty_without_timestamp() {
        assert_eq!(time_string_from_file_in(None, &Utc), "");
        assert_eq!(time_string_from_file_in(Some(&FileMeta::default()), &Utc), "");
        assert_eq!(time_string_from_file_in(Some(&created(Timestamp::Millis(0))), &Utc), "");
        assert_eq!(
            time_string_from_file_in(Some(&created(Timestamp::Text(String::new()))), &Utc),
            ""
        );
    }

    #[test]
    fn unparseable_timestamp_gives_empty_label() {
        for text in ["yesterday", "2021-13-40", "02/01/2021 03:04", "Invalid Date"] {
            let file = created(Timestamp::Text(text.into()));
            assert_eq!(time_string_from_file_in(Some(&file), &Utc), "", "{}", text);
        }
        let file = created(Timestamp::Millis(i64::MAX));
        assert_eq!(time_string_from_file_in(Some(&file), &Utc), "");
    }

    #[test]
    fn years_beyond_four_digits_give_empty_label() {
        let late = FixedOffset::east_opt(23 * 3600).unwrap();
        for ms in [568_971_820_800_000, 8_640_000_000_000_000, 253_402_300_800_000] {
            let file = created(Timestamp::Millis(ms));
            assert_eq!(time_string_from_file_in(Some(&file), &late), "", "{}", ms);
        }
        // two years before 0001-01-01
        let file = created(Timestamp::Millis(-62_200_000_000_000));
        assert_eq!(time_string_from_file_in(Some(&file), &Utc), "");

        let file = created(Timestamp::Text("9999-12-31T22:00:00Z".into()));
        assert_eq!(
            time_string_from_file_in(Some(&file), &Utc),
            "Uploaded: Fri Dec 31 9999 22:00"
        );
    }

    #[test]
    fn local_label_has_expected_shape() {
        let file = created(Timestamp::Millis(1_609_556_640_000));
        let label = time_string_from_file(Some(&file));
        assert!(label.starts_with("Uploaded: "));
        assert_eq!(label.len(), "Uploaded: Sat Jan 02 2021 03:04".len());
        assert!(label.contains(" 2021 ") || label.contains(" 2020 "));
    }

    #[test]
    fn labels_are_stable_across_calls() {
        let file = FileMeta {
            file_size: Some(77),
            created_at: Some(Timestamp::Text("2021-01-02T03:04:00Z".into())),
            ..Default::default()
        };
        assert_eq!(size_string_from_file(Some(&file)), size_string_from_file(Some(&file)));
        assert_eq!(
            time_string_from_file_in(Some(&file), &Utc),
            time_string_from_file_in(Some(&file), &Utc)
        );
    }

    #[test]
    fn double_digit() {
        assert_eq!(double_digit_number(5), "05");
        assert_eq!(double_digit_number(0), "00");
        assert_eq!(double_digit_number(9), "09");
        assert_eq!(double_digit_number(10), "10");
        assert_eq!(double_digit_number(59), "59");
    }

    #[test]
    fn double_digit_passes_other_values_through() {
        assert_eq!(double_digit_number(-3), "-3");
        assert_eq!(double_digit_number(100), "100");
        assert_eq!(double_digit_number(12345), "12345");
    }
}
