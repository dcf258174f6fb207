use crate::video::Video;
use chrono::{DateTime, Duration, NaiveDate, TimeZone};

pub const TODAY: &str = "Today";
pub const YESTERDAY: &str = "Yesterday";
pub const UNDATED: &str = "Undated";
const DATE_FORMAT_OTHER: &str = "%A, %B %-d, %Y";

/// Videos uploaded on the same calendar day, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub label: String,
    pub videos: Vec<Video>,
}

pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        TODAY.to_string()
    } else if day == today - Duration::days(1) {
        YESTERDAY.to_string()
    } else {
        day.format(DATE_FORMAT_OTHER).to_string()
    }
}

/// Buckets `videos` by the calendar day of their timestamp, as seen in the
/// time zone of `now`.
///
/// Groups come most recent day first; each group is sorted newest first and
/// keeps the input order for equal timestamps. Videos without a timestamp end
/// up in a trailing [`UNDATED`] group in input order.
pub fn group_by_date<Tz: TimeZone>(videos: &[Video], now: &DateTime<Tz>) -> Vec<DateGroup> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut dated: Vec<_> = videos
        .iter()
        .filter_map(|v| v.last_modified.map(|ts| (ts, v)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let mut groups: Vec<(NaiveDate, DateGroup)> = Vec::new();
    for (ts, video) in dated {
        let day = ts.with_timezone(&tz).date_naive();
        match groups.last_mut() {
            Some((last_day, group)) if *last_day == day => group.videos.push(video.clone()),
            _ => groups.push((
                day,
                DateGroup {
                    label: day_label(day, today),
                    videos: vec![video.clone()],
                },
            )),
        }
    }

    let mut groups: Vec<DateGroup> = groups.into_iter().map(|(_, group)| group).collect();

    let undated: Vec<Video> = videos
        .iter()
        .filter(|v| v.last_modified.is_none())
        .cloned()
        .collect();
    if !undated.is_empty() {
        groups.push(DateGroup {
            label: UNDATED.to_string(),
            videos: undated,
        });
    }

    groups
}
