use agroplan::error::{AgroplanError, InputError};
use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Read text from a file, or stdin when the path is `-`
pub fn read_source(path: &Path) -> Result<String, AgroplanError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).map_err(|e| {
        InputError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        }
        .into()
    })
}

/// Read a JSON array of records. The API envelope `{"data": [...]}` is
/// accepted as well.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AgroplanError> {
    let content = read_source(path)?;
    parse_records(&content).map_err(|e| {
        InputError::Parse {
            path: path.to_path_buf(),
            source: e,
        }
        .into()
    })
}

fn parse_records<T: DeserializeOwned>(content: &str) -> Result<Vec<T>, serde_json::Error> {
    #[derive(Deserialize)]
    struct Envelope<T> {
        data: Vec<T>,
    }

    // Try the bare array first, report its error if neither shape fits
    match serde_json::from_str::<Vec<T>>(content) {
        Ok(records) => Ok(records),
        Err(e) => match serde_json::from_str::<Envelope<T>>(content) {
            Ok(envelope) => Ok(envelope.data),
            Err(_) => Err(e),
        },
    }
}

pub fn parse_day_arg(value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(value.to_string()))
}

/// Parse `--now`, defaulting to the local wall clock
pub fn parse_now_arg(value: Option<&str>) -> Result<DateTime<FixedOffset>, InputError> {
    match value {
        Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .map_err(|_| InputError::InvalidTimestamp(raw.to_string())),
        None => {
            let now = Local::now();
            Ok(now.with_timezone(now.offset()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agroplan::records::Task;
    use std::io::Write;

    #[test]
    fn test_parse_bare_array() {
        let tasks: Vec<Task> = parse_records(r#"[{"status": "Stop", "date": "2025-01-01"}]"#).unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_parse_api_envelope() {
        let json = r#"{"ok": true, "data": [{"status": "Pending"}, {"status": "Proceed"}]}"#;
        let tasks: Vec<Task> = parse_records(json).unwrap();
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse_records::<Task>(r#"{"rows": []}"#).is_err());
        assert!(parse_records::<Task>("not json").is_err());
    }

    #[test]
    fn test_read_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"plot_id": 3, "task_date": "2025-02-01"}}]"#).unwrap();
        let tasks: Vec<Task> = read_records(file.path()).unwrap();
        assert_eq!(tasks[0].plot_key(), Some("3"));
    }

    #[test]
    fn test_read_records_missing_file() {
        let err = read_records::<Task>(Path::new("/nonexistent/tasks.json")).unwrap_err();
        assert!(matches!(
            err,
            AgroplanError::Input(InputError::ReadFile { .. })
        ));
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            parse_day_arg(" 2025-06-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert!(matches!(
            parse_day_arg("June 1st"),
            Err(InputError::InvalidDate(_))
        ));

        let now = parse_now_arg(Some("2025-06-01T08:00:00+10:00")).unwrap();
        assert_eq!(now.offset().local_minus_utc(), 10 * 3600);
        assert!(matches!(
            parse_now_arg(Some("yesterday")),
            Err(InputError::InvalidTimestamp(_))
        ));
        assert!(parse_now_arg(None).is_ok());
    }
}
