use crate::query::QueryError;
use chrono::{DateTime, NaiveDateTime};
use model::show::Scheduled;

/// 人类可读的时间格式，对应原始页面的两个模板过滤器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `EEEE MMMM, d, y 'at' h:mma`，如 `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `EE MM, dd, y h:mma`，如 `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

/// 按指定格式渲染时间戳
pub fn format_datetime(value: &NaiveDateTime, format: DateFormat) -> String {
    match format {
        DateFormat::Full => value.format("%A %B, %-d, %Y at %-I:%M%p").to_string(),
        DateFormat::Medium => value.format("%a %m, %d, %Y %-I:%M%p").to_string(),
    }
}

/// 解析原始时间戳字符串：优先 RFC 3339，其次常见的朴素格式。
/// 无法识别时返回 ParseError，绝不落回默认值。
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, QueryError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt);
        }
    }
    Err(QueryError::ParseError(format!(
        "Unrecognized datetime: {}",
        raw
    )))
}

/// 按与 `now` 的严格比较把演出分为 (past, upcoming) 两桶。
/// 开始时间恰好等于 `now` 的演出不落入任何一桶。
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: NaiveDateTime) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for show in shows {
        if show.start_time() < now {
            past.push(show);
        } else if show.start_time() > now {
            upcoming.push(show);
        }
    }
    (past, upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::show::VenueShow;

    fn venue_show(name: &str, start_time: NaiveDateTime) -> VenueShow {
        VenueShow {
            artist_id: 1,
            artist_name: name.to_string(),
            artist_image_link: "".to_string(),
            start_time,
        }
    }

    #[test]
    fn test_format_datetime_medium() {
        let dt = parse_datetime("2019-05-21T21:30:00.000Z").unwrap();
        assert_eq!(
            format_datetime(&dt, DateFormat::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn test_format_datetime_full() {
        let dt = parse_datetime("2019-05-21T21:30:00.000Z").unwrap();
        assert_eq!(
            format_datetime(&dt, DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
    }

    #[test]
    fn test_format_datetime_morning_hours() {
        let dt = parse_datetime("2035-04-01 08:05:00").unwrap();
        assert_eq!(
            format_datetime(&dt, DateFormat::Medium),
            "Sun 04, 01, 2035 8:05AM"
        );
    }

    #[test]
    fn test_parse_datetime_plain_formats() {
        assert!(parse_datetime("2019-06-15 23:00:00").is_ok());
        assert!(parse_datetime("2019-06-15T23:00:00").is_ok());
        assert!(parse_datetime("2019-06-15 23:00").is_ok());
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        let err = parse_datetime("not-a-date").unwrap_err();
        assert!(matches!(err, QueryError::ParseError(_)));
    }

    #[test]
    fn test_partition_shows_strict_boundary() {
        let now = parse_datetime("2020-01-01 12:00:00").unwrap();
        let before = parse_datetime("2020-01-01 11:59:59").unwrap();
        let after = parse_datetime("2020-01-01 12:00:01").unwrap();

        let shows = vec![
            venue_show("past", before),
            venue_show("boundary", now),
            venue_show("upcoming", after),
        ];
        let (past, upcoming) = partition_shows(shows, now);

        assert_eq!(past.len(), 1);
        assert_eq!(past[0].artist_name, "past");
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].artist_name, "upcoming");
    }

    #[test]
    fn test_partition_shows_empty_input() {
        let now = parse_datetime("2020-01-01 12:00:00").unwrap();
        let (past, upcoming) = partition_shows(Vec::<VenueShow>::new(), now);
        assert!(past.is_empty());
        assert!(upcoming.is_empty());
    }
}
