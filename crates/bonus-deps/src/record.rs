//! Loading problem files into [`ProblemRecord`]s.
//!
//! Parsing happens in two steps: the whole file is read and parsed as JSON
//! (a [`Error::Parse`] on failure), then the required fields are pulled out
//! of the document (a [`Error::MissingField`] or [`Error::InvalidField`] on
//! failure). Fields other than `bonuses`, `bonus` and `problem` are ignored.

use crate::domain::{BonusEntry, ProblemId, ProblemRecord};
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Read and parse the problem file at `path`.
///
/// The identifier is derived from the file name.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or lacks
/// one of the required fields.
pub fn load(path: &Path) -> Result<ProblemRecord> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let id = ProblemId::from_file_name(&file_name);

    // `1.5.problem` becomes `1`. Flag it instead of guessing intent.
    if file_name.matches('.').count() > 1 {
        warn!(
            file = %path.display(),
            id = %id,
            "File name contains more than one '.', identifier truncated to first segment"
        );
    }

    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    parse(path, id, &content)
}

/// Parse problem file content that has already been read.
///
/// `path` is only used for error reporting.
///
/// # Errors
///
/// Returns an error if `content` is not valid UTF-8 JSON or lacks one of the
/// required fields.
pub fn parse(path: &Path, id: ProblemId, content: &[u8]) -> Result<ProblemRecord> {
    let document: Value = serde_json::from_slice(content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let root = document.as_object().ok_or_else(|| Error::InvalidField {
        path: path.to_path_buf(),
        field: "<root>",
        entry: None,
        expected: "a JSON object",
    })?;

    let bonuses = root
        .get("bonuses")
        .ok_or_else(|| Error::MissingField {
            path: path.to_path_buf(),
            field: "bonuses",
            entry: None,
        })?
        .as_array()
        .ok_or_else(|| Error::InvalidField {
            path: path.to_path_buf(),
            field: "bonuses",
            entry: None,
            expected: "an array",
        })?;

    let bonuses = bonuses
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(path, index, entry))
        .collect::<Result<Vec<_>>>()?;

    debug!(file = %path.display(), id = %id, bonuses = bonuses.len(), "Parsed problem file");

    Ok(ProblemRecord { id, bonuses })
}

fn parse_entry(path: &Path, index: usize, entry: &Value) -> Result<BonusEntry> {
    let object = entry.as_object().ok_or_else(|| Error::InvalidField {
        path: path.to_path_buf(),
        field: "bonuses",
        entry: Some(index),
        expected: "an array of objects",
    })?;

    let bonus = required(path, index, object, "bonus")?.clone();
    let problem = ProblemId::from_json(required(path, index, object, "problem")?);

    Ok(BonusEntry { bonus, problem })
}

fn required<'a>(
    path: &Path,
    index: usize,
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value> {
    object.get(field).ok_or_else(|| Error::MissingField {
        path: path.to_path_buf(),
        field,
        entry: Some(index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    fn parse_str(content: &str) -> Result<ProblemRecord> {
        parse(Path::new("3.problem"), ProblemId::from("3"), content.as_bytes())
    }

    #[test]
    fn test_parse_single_bonus() {
        let record = parse_str(r#"{"bonuses": [{"bonus": "x", "problem": "7"}]}"#).unwrap();

        assert_eq!(record.id, ProblemId::from("3"));
        assert_eq!(
            record.bonuses,
            vec![BonusEntry {
                bonus: json!("x"),
                problem: ProblemId::from("7"),
            }]
        );
    }

    #[test]
    fn test_parse_numeric_target_and_extra_fields() {
        let record = parse_str(
            r#"{"title": "Warmup", "bonuses": [{"bonus": {"kind": "time"}, "problem": 12, "note": "x"}]}"#,
        )
        .unwrap();

        assert_eq!(record.bonuses.len(), 1);
        assert_eq!(record.bonuses[0].problem.as_str(), "12");
        assert_eq!(record.bonuses[0].bonus, json!({"kind": "time"}));
    }

    #[test]
    fn test_parse_empty_bonuses() {
        let record = parse_str(r#"{"bonuses": []}"#).unwrap();
        assert!(record.bonuses.is_empty());
    }

    #[test]
    fn test_parse_preserves_entry_order() {
        let record = parse_str(
            r#"{"bonuses": [
                {"bonus": "a", "problem": "9"},
                {"bonus": "b", "problem": "1"},
                {"bonus": "c", "problem": "5"}
            ]}"#,
        )
        .unwrap();

        let targets: Vec<_> = record.bonuses.iter().map(|b| b.problem.as_str()).collect();
        assert_eq!(targets, ["9", "1", "5"]);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_str(r#"{"bonuses": [}"#).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_missing_bonuses() {
        let err = parse_str(r#"{"title": "no bonuses"}"#).unwrap_err();
        assert!(
            matches!(
                err,
                Error::MissingField {
                    field: "bonuses",
                    entry: None,
                    ..
                }
            ),
            "got {err:?}"
        );
    }

    #[rstest]
    #[case(r#"{"bonuses": [{"problem": "7"}]}"#, "bonus", 0)]
    #[case(r#"{"bonuses": [{"bonus": "x", "problem": "1"}, {"bonus": "x"}]}"#, "problem", 1)]
    fn test_missing_entry_field(
        #[case] content: &str,
        #[case] expected_field: &str,
        #[case] expected_index: usize,
    ) {
        match parse_str(content).unwrap_err() {
            Error::MissingField { field, entry, .. } => {
                assert_eq!(field, expected_field);
                assert_eq!(entry, Some(expected_index));
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_null_bonus_is_present() {
        let record = parse_str(r#"{"bonuses": [{"bonus": null, "problem": "2"}]}"#).unwrap();
        assert_eq!(record.bonuses[0].bonus, Value::Null);
    }

    #[rstest]
    #[case("[]", "<root>")]
    #[case(r#"{"bonuses": {"bonus": "x"}}"#, "bonuses")]
    #[case(r#"{"bonuses": ["7"]}"#, "bonuses")]
    fn test_wrong_shape_is_invalid_field(#[case] content: &str, #[case] expected_field: &str) {
        match parse_str(content).unwrap_err() {
            Error::InvalidField { field, .. } => assert_eq!(field, expected_field),
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn test_load_derives_id_from_file_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("17.problem");
        std::fs::write(&path, r#"{"bonuses": [{"bonus": "x", "problem": "18"}]}"#).unwrap();

        let record = load(&path).unwrap();
        assert_eq!(record.id.as_str(), "17");
        assert_eq!(record.bonuses[0].problem.as_str(), "18");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let err = parse(
            Path::new("3.problem"),
            ProblemId::from("3"),
            b"{\"bonuses\": [\xff]}",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_load_invalid_utf8_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("4.problem");
        std::fs::write(&path, b"{\"bonuses\": [\xff]}").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("nope.problem")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "got {err:?}");
    }
}
