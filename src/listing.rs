//! Parsing of the `GET /files` response body.
//!
//! Servers in the wild answer with a JSON array of names, a JSON array of
//! `{name, lastModified}` records, `null` for an empty bucket, or a
//! Python-style repr of a list. All of them are accepted.

use crate::video::Video;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Entry {
    Name(String),
    Record {
        name: String,
        #[serde(rename = "lastModified", default)]
        last_modified: Option<Timestamp>,
    },
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Timestamp {
    Millis(i64),
    Fractional(f64),
    Text(String),
}

impl Timestamp {
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            Timestamp::Fractional(ms) => Utc.timestamp_millis_opt(ms.trunc() as i64).single(),
            Timestamp::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl From<Entry> for Video {
    fn from(entry: Entry) -> Video {
        match entry {
            Entry::Name(name) => Video::new(name),
            Entry::Record {
                name,
                last_modified,
            } => Video {
                name,
                last_modified: last_modified.as_ref().and_then(Timestamp::to_utc),
            },
        }
    }
}

/// Parses a listing body and keeps only the video files, in server order.
pub fn parse_listing(body: &str) -> Vec<Video> {
    filter_videos(parse_entries(body))
}

pub fn filter_videos(videos: Vec<Video>) -> Vec<Video> {
    videos.into_iter().filter(Video::is_video).collect()
}

fn parse_entries(body: &str) -> Vec<Video> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return from_json(value);
    }
    if let Ok(value) = serde_json::from_str::<Value>(&body.replace('\'', "\"")) {
        debug!("listing parsed after quote normalisation");
        return from_json(value);
    }

    debug!("listing is not JSON, splitting on commas");
    body.replace(&['[', ']', '\''][..], "")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Video::new)
        .collect()
}

fn from_json(value: Value) -> Vec<Video> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Entry>(item) {
                Ok(entry) => Some(Video::from(entry)),
                Err(err) => {
                    debug!("skipping listing entry: {}", err);
                    None
                }
            })
            .collect(),
        other => {
            warn!("unexpected listing shape: {}", other);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn json_array_of_names() {
        let videos = parse_listing(r#"["a.mp4", "notes.txt", "b.WEBM", "c.mov"]"#);
        assert_eq!(names(&videos), ["a.mp4", "b.WEBM", "c.mov"]);
        assert!(videos.iter().all(|v| v.last_modified.is_none()));
    }

    #[test]
    fn json_records_with_timestamps() {
        let body = r#"[
            {"name": "a.mp4", "lastModified": "2026-10-15T08:30:00Z"},
            {"name": "b.mp4", "lastModified": 1760000000000},
            {"name": "c.mp4"},
            {"name": "d.mp4", "lastModified": "yesterday-ish"}
        ]"#;
        let videos = parse_listing(body);
        assert_eq!(names(&videos), ["a.mp4", "b.mp4", "c.mp4", "d.mp4"]);
        assert_eq!(
            videos[0].last_modified,
            Some(Utc.with_ymd_and_hms(2026, 10, 15, 8, 30, 0).unwrap())
        );
        assert_eq!(
            videos[1].last_modified,
            Utc.timestamp_millis_opt(1_760_000_000_000).single()
        );
        assert_eq!(videos[2].last_modified, None);
        assert_eq!(videos[3].last_modified, None);
    }

    #[test]
    fn mixed_and_bad_entries_are_tolerated() {
        let videos = parse_listing(r#"["a.mp4", {"name": "b.mov"}, 42, {"size": 1}]"#);
        assert_eq!(names(&videos), ["a.mp4", "b.mov"]);
    }

    #[test]
    fn python_repr_list() {
        let videos = parse_listing("['a.mp4', 'b.mov', 'readme.md']");
        assert_eq!(names(&videos), ["a.mp4", "b.mov"]);
    }

    #[test]
    fn malformed_body_is_split_best_effort() {
        let videos = parse_listing("[a.mp4, 'b.webm',, c.mov");
        assert_eq!(names(&videos), ["a.mp4", "b.webm", "c.mov"]);
    }

    #[test]
    fn null_and_non_arrays_are_empty() {
        assert!(parse_listing("null").is_empty());
        assert!(parse_listing(r#"{"files": ["a.mp4"]}"#).is_empty());
        assert!(parse_listing("").is_empty());
    }
}
