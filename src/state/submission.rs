//! Export of a submitted project draft

use super::draft::FormDraft;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A submitted application, as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub metadata: FormDraft,
}

impl Submission {
    pub fn new(metadata: FormDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            metadata,
        }
    }

    /// Write the submission as `<id>.json` under `dir`
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(format!("{}.json", self.id));
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_writes_json_named_after_id() {
        let dir = tempfile::tempdir().unwrap();
        let submission = Submission::new(FormDraft {
            title: Some("Acme".to_string()),
            project_twitter: Some("acme".to_string()),
            ..Default::default()
        });

        let path = tokio_test::assert_ok!(submission.save(&dir.path().join("submissions")));

        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("{}.json", submission.id)
        );
        let parsed: Submission =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, submission);
    }

    #[test]
    fn test_serialized_field_names() {
        let submission = Submission::new(FormDraft::default());
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("submittedAt").is_some());
        assert!(json["metadata"].get("projectTwitter").is_some());
    }
}
