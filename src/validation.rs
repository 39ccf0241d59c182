//! Checks on values typed at the command line.
//!
//! A student id becomes the stem of a records file name under the records
//! directory, so it must not be able to name anything outside it.

use anyhow::{bail, ensure, Result};

use crate::models::StageKey;

/// Longest student id accepted; university ids are far shorter.
pub const MAX_STUDENT_ID_LENGTH: usize = 64;

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Checks that `id` can be used as a records file stem.
///
/// ```
/// use pgr_progress::validation::validate_student_id;
///
/// assert!(validate_student_id("s1234567").is_ok());
/// assert!(validate_student_id("pgr_2024-17").is_ok());
/// assert!(validate_student_id("../s1234567").is_err());
/// ```
pub fn validate_student_id(id: &str) -> Result<()> {
    ensure!(!id.is_empty(), "student id is empty");
    ensure!(
        id.len() <= MAX_STUDENT_ID_LENGTH,
        "student id is {} characters long; ids are at most {MAX_STUDENT_ID_LENGTH}",
        id.len()
    );
    if let Some(bad) = id.chars().find(|c| !is_id_char(*c)) {
        bail!(
            "student id '{id}' contains {bad:?}; records files are looked up by ids made of \
             letters, digits, '-' and '_'"
        );
    }
    Ok(())
}

/// Clap value parser for student id arguments.
pub fn clap_student_id_validator(s: &str) -> Result<String, String> {
    validate_student_id(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// Clap value parser for stage arguments.
///
/// Stage names typed on the command line are accepted in any case. Record
/// fields are matched exactly, and the CLI rejects unknown stages instead of
/// falling back to registration.
pub fn clap_stage_validator(s: &str) -> Result<StageKey, String> {
    s.to_ascii_lowercase()
        .parse::<StageKey>()
        .map_err(|_| format!("unknown stage '{s}' (expected registration, progression or final)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_university_ids() {
        for id in ["s1234567", "pgr-001", "PGR_2024", "a"] {
            assert!(validate_student_id(id).is_ok(), "{id}");
        }
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = validate_student_id("").unwrap_err();
        assert_eq!(err.to_string(), "student id is empty");
    }

    #[test]
    fn test_rejects_overlong_id() {
        let err = validate_student_id(&"s".repeat(MAX_STUDENT_ID_LENGTH + 1)).unwrap_err();
        assert!(err.to_string().contains("at most 64"));
    }

    #[test]
    fn test_rejects_ids_that_escape_the_records_dir() {
        for id in [".", "..", "../records", "s123/456", "s123.json", "s 123"] {
            assert!(validate_student_id(id).is_err(), "{id}");
        }
        let err = validate_student_id("s1/..").unwrap_err();
        assert!(err.to_string().contains("'/'"));
    }

    #[test]
    fn test_clap_student_id_validator() {
        assert_eq!(clap_student_id_validator("s100"), Ok("s100".to_string()));
        assert!(clap_student_id_validator("../s100").is_err());
    }

    #[test]
    fn test_clap_stage_validator_ignores_case() {
        assert_eq!(clap_stage_validator("final"), Ok(StageKey::Final));
        assert_eq!(clap_stage_validator("Progression"), Ok(StageKey::Progression));
        let err = clap_stage_validator("unknown").unwrap_err();
        assert!(err.contains("unknown stage 'unknown'"));
    }
}
