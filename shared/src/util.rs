//! Small shared helpers

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Serde format for check-in timestamps: `YYYY-MM-DD HH:MM:SS`
///
/// SQLite stores `NaiveDateTime` with sub-second precision; the API
/// contract is seconds-only, so serialization truncates.
pub mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::datetime_format")]
        at: chrono::NaiveDateTime,
    }

    #[test]
    fn datetime_format_round_trip() {
        let at = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(13, 45, 9)
            .unwrap();
        let json = serde_json::to_string(&Wrapper { at }).unwrap();
        assert_eq!(json, r#"{"at":"2024-07-01 13:45:09"}"#);
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, at);
    }

    #[test]
    fn datetime_format_truncates_subseconds() {
        let at = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_milli_opt(13, 45, 9, 250)
            .unwrap();
        let json = serde_json::to_string(&Wrapper { at }).unwrap();
        assert_eq!(json, r#"{"at":"2024-07-01 13:45:09"}"#);
    }
}
