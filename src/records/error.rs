use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("no records found for student '{student_id}' in {}", dir.display())]
    NotFound { student_id: String, dir: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported records format: {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("records belong to student '{found}', expected '{expected}'")]
    StudentMismatch { expected: String, found: String },

    #[error("invalid student id: {0}")]
    InvalidStudentId(String),
}
