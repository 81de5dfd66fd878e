//! Project form draft shared across the form steps

use serde::{Deserialize, Serialize};

/// A single editable field of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Website,
    Description,
    ProjectTwitter,
    UserGithub,
    ProjectGithub,
}

impl DraftField {
    /// Field name as stored in the serialized draft
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Website => "website",
            Self::Description => "description",
            Self::ProjectTwitter => "projectTwitter",
            Self::UserGithub => "userGithub",
            Self::ProjectGithub => "projectGithub",
        }
    }

    /// Whether this field is the subject of an identity claim
    pub fn is_verification_subject(&self) -> bool {
        matches!(
            self,
            Self::ProjectTwitter | Self::UserGithub | Self::ProjectGithub
        )
    }
}

/// The project being created. Every field is optional until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    pub title: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub project_twitter: Option<String>,
    pub user_github: Option<String>,
    pub project_github: Option<String>,
}

impl FormDraft {
    /// Current value of a field, empty when unset
    pub fn get(&self, field: DraftField) -> &str {
        let value = match field {
            DraftField::Title => &self.title,
            DraftField::Website => &self.website,
            DraftField::Description => &self.description,
            DraftField::ProjectTwitter => &self.project_twitter,
            DraftField::UserGithub => &self.user_github,
            DraftField::ProjectGithub => &self.project_github,
        };
        value.as_deref().unwrap_or("")
    }

    fn slot_mut(&mut self, field: DraftField) -> &mut Option<String> {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Website => &mut self.website,
            DraftField::Description => &mut self.description,
            DraftField::ProjectTwitter => &mut self.project_twitter,
            DraftField::UserGithub => &mut self.user_github,
            DraftField::ProjectGithub => &mut self.project_github,
        }
    }

    /// Merge a patch; fields absent from the patch are left untouched
    pub fn merge(&mut self, patch: FormDraftPatch) {
        for (field, value) in patch.values {
            *self.slot_mut(field) = Some(value);
        }
    }

    /// True when none of the verification subject fields has a value
    pub fn has_no_verification_subjects(&self) -> bool {
        [
            DraftField::ProjectTwitter,
            DraftField::UserGithub,
            DraftField::ProjectGithub,
        ]
        .iter()
        .all(|f| self.get(*f).is_empty())
    }
}

/// A partial update of the draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraftPatch {
    values: Vec<(DraftField, String)>,
}

impl FormDraftPatch {
    /// Patch that sets exactly one field
    pub fn single(field: DraftField, value: impl Into<String>) -> Self {
        Self::default().with(field, value)
    }

    /// Add another field to the patch
    pub fn with(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.values.retain(|(f, _)| *f != field);
        self.values.push((field, value.into()));
        self
    }

    /// Fields this patch touches
    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.values.iter().map(|(f, _)| *f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_leaves_absent_fields_untouched() {
        let mut draft = FormDraft {
            title: Some("Acme Grants".to_string()),
            project_twitter: Some("acme".to_string()),
            ..Default::default()
        };

        draft.merge(FormDraftPatch::single(DraftField::UserGithub, "alice"));

        assert_eq!(draft.title.as_deref(), Some("Acme Grants"));
        assert_eq!(draft.project_twitter.as_deref(), Some("acme"));
        assert_eq!(draft.user_github.as_deref(), Some("alice"));
        assert!(draft.project_github.is_none());
    }

    #[test]
    fn test_merge_can_set_empty_string() {
        let mut draft = FormDraft {
            project_twitter: Some("acme".to_string()),
            ..Default::default()
        };
        draft.merge(FormDraftPatch::single(DraftField::ProjectTwitter, ""));
        assert_eq!(draft.project_twitter.as_deref(), Some(""));
        assert_eq!(draft.get(DraftField::ProjectTwitter), "");
    }

    #[test]
    fn test_patch_with_same_field_keeps_last_value() {
        let patch = FormDraftPatch::single(DraftField::Title, "a").with(DraftField::Title, "b");
        let mut draft = FormDraft::default();
        draft.merge(patch);
        assert_eq!(draft.get(DraftField::Title), "b");
    }

    #[test]
    fn test_no_verification_subjects() {
        let mut draft = FormDraft {
            title: Some("Acme".to_string()),
            project_twitter: Some(String::new()),
            ..Default::default()
        };
        assert!(draft.has_no_verification_subjects());

        draft.merge(FormDraftPatch::single(DraftField::ProjectGithub, "Acme"));
        assert!(!draft.has_no_verification_subjects());
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let draft = FormDraft {
            project_twitter: Some("acme".to_string()),
            user_github: Some("alice".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json[DraftField::ProjectTwitter.name()], "acme");
        assert_eq!(json[DraftField::UserGithub.name()], "alice");
        assert!(json["projectGithub"].is_null());
    }
}
