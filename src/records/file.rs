use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::validate_student_id;

use super::{RecordsError, RecordsSource, StudentRecords};

/// File extensions tried, in order, when looking up a student's records.
const RECORD_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordsFormat {
    Json,
    Yaml,
}

impl RecordsFormat {
    pub fn from_path(path: &Path) -> Result<Self, RecordsError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(RecordsFormat::Json),
            Some("yaml" | "yml") => Ok(RecordsFormat::Yaml),
            _ => Err(RecordsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse a single records document, picking the format from its extension.
///
/// Coerced fields are logged as warnings; they never fail the load.
pub fn load_records_file(path: &Path) -> Result<StudentRecords, RecordsError> {
    let format = RecordsFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| RecordsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: StudentRecords = match format {
        RecordsFormat::Json => {
            serde_json::from_str(&content).map_err(|source| RecordsError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        RecordsFormat::Yaml => {
            serde_yaml::from_str(&content).map_err(|source| RecordsError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    tracing::debug!(
        path = %path.display(),
        viva_teams = records.viva_teams.len(),
        submissions = records.submissions.len(),
        "loaded records"
    );
    for issue in records.issues() {
        tracing::warn!(path = %path.display(), "{issue}");
    }

    Ok(records)
}

/// Reads `<dir>/<student_id>.{json,yaml,yml}`.
#[derive(Debug, Clone)]
pub struct FileRecordsSource {
    dir: PathBuf,
}

impl FileRecordsSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the records file for `student_id`, if one exists.
    pub fn resolve(&self, student_id: &str) -> Result<PathBuf, RecordsError> {
        validate_student_id(student_id)
            .map_err(|e| RecordsError::InvalidStudentId(e.to_string()))?;

        RECORD_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{student_id}.{ext}")))
            .find(|path| path.is_file())
            .ok_or_else(|| RecordsError::NotFound {
                student_id: student_id.to_string(),
                dir: self.dir.clone(),
            })
    }
}

impl RecordsSource for FileRecordsSource {
    fn load(&self, student_id: &str) -> Result<StudentRecords, RecordsError> {
        let path = self.resolve(student_id)?;
        let mut records = load_records_file(&path)?;
        records.ensure_student(student_id)?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StageKey, StageStatus};
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            RecordsFormat::from_path(Path::new("a.json")).unwrap(),
            RecordsFormat::Json
        );
        assert_eq!(
            RecordsFormat::from_path(Path::new("a.YML")).unwrap(),
            RecordsFormat::Yaml
        );
        assert!(matches!(
            RecordsFormat::from_path(Path::new("a.csv")),
            Err(RecordsError::UnsupportedFormat { .. })
        ));
        assert!(RecordsFormat::from_path(Path::new("records")).is_err());
    }

    #[test]
    fn test_load_json_file() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "s1.json",
            r#"{
                "student_id": "s1",
                "viva_teams": [{"stage": "registration", "status": "proposed"}]
            }"#,
        );

        let records = load_records_file(&path).unwrap();
        assert_eq!(records.student_id.as_deref(), Some("s1"));
        assert_eq!(records.viva_teams.len(), 1);
        assert!(records.submissions.is_empty());
    }

    #[test]
    fn test_load_yaml_file() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "s2.yaml",
            "viva_teams:\n  - stage: progression\n    status: scheduled\n\
             submissions:\n  - submission_type: annual_report\n    status: under_review\n",
        );

        let records = load_records_file(&path).unwrap();
        assert_eq!(records.viva_teams[0].stage(), Some(StageKey::Progression));
        assert_eq!(records.submissions.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "bad.json", "{ not json");
        assert!(matches!(
            load_records_file(&path),
            Err(RecordsError::Json { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.json");
        assert!(matches!(
            load_records_file(&path),
            Err(RecordsError::Io { .. })
        ));
    }

    #[test]
    fn test_source_prefers_json_then_yaml() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "s3.yml", "viva_teams: []\n");
        let source = FileRecordsSource::new(temp.path());
        assert_eq!(source.resolve("s3").unwrap(), temp.path().join("s3.yml"));

        write(temp.path(), "s3.json", "{}");
        assert_eq!(source.resolve("s3").unwrap(), temp.path().join("s3.json"));
    }

    #[test]
    fn test_source_fills_in_student_id() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "s4.json", "{}");
        let records = FileRecordsSource::new(temp.path()).load("s4").unwrap();
        assert_eq!(records.student_id.as_deref(), Some("s4"));
        assert_eq!(
            records.progress().stage(StageKey::Registration).map(|s| s.status),
            Some(StageStatus::InProgress)
        );
    }

    #[test]
    fn test_source_rejects_mismatched_student() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "s5.json", r#"{"student_id": "s6"}"#);
        let err = FileRecordsSource::new(temp.path()).load("s5").unwrap_err();
        assert!(matches!(err, RecordsError::StudentMismatch { .. }));
        assert_eq!(err.to_string(), "records belong to student 's6', expected 's5'");
    }

    #[test]
    fn test_source_not_found() {
        let temp = TempDir::new().unwrap();
        let err = FileRecordsSource::new(temp.path()).load("nobody").unwrap_err();
        assert!(matches!(err, RecordsError::NotFound { .. }));
    }

    #[test]
    fn test_source_rejects_path_traversal() {
        let temp = TempDir::new().unwrap();
        let err = FileRecordsSource::new(temp.path())
            .load("../secrets")
            .unwrap_err();
        assert!(matches!(err, RecordsError::InvalidStudentId(_)));
    }
}
