//! Form metadata store: the single owner of the draft

use super::draft::{FormDraft, FormDraftPatch};
use parking_lot::RwLock;
use tracing::trace;

/// Source of truth for the project draft.
///
/// Readers get a snapshot; all mutation goes through `write`, which merges
/// the patch into the existing draft. Nothing replaces the draft wholesale
/// except `reset`, which ends the draft's lifecycle.
#[cfg_attr(test, mockall::automock)]
pub trait FormMetadataStore: Send + Sync {
    /// Snapshot of the current draft
    fn read(&self) -> FormDraft;

    /// Merge `patch` into the draft
    fn write(&self, patch: FormDraftPatch);

    /// Discard the draft (form submitted or abandoned)
    fn reset(&self);
}

/// In-process store used by the TUI
#[derive(Debug, Default)]
pub struct InMemoryFormStore {
    draft: RwLock<FormDraft>,
}

impl InMemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormMetadataStore for InMemoryFormStore {
    fn read(&self) -> FormDraft {
        self.draft.read().clone()
    }

    fn write(&self, patch: FormDraftPatch) {
        let mut draft = self.draft.write();
        for field in patch.fields() {
            trace!(field = field.name(), "draft field updated");
        }
        draft.merge(patch);
    }

    fn reset(&self) {
        *self.draft.write() = FormDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DraftField;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_merges_into_existing_draft() {
        let store = InMemoryFormStore::new();
        store.write(FormDraftPatch::single(DraftField::Title, "Acme"));
        store.write(FormDraftPatch::single(DraftField::ProjectTwitter, "acme"));

        let draft = store.read();
        assert_eq!(draft.get(DraftField::Title), "Acme");
        assert_eq!(draft.get(DraftField::ProjectTwitter), "acme");
    }

    #[test]
    fn test_read_returns_snapshot() {
        let store = InMemoryFormStore::new();
        let before = store.read();
        store.write(FormDraftPatch::single(DraftField::UserGithub, "alice"));
        assert_eq!(before.get(DraftField::UserGithub), "");
        assert_eq!(store.read().get(DraftField::UserGithub), "alice");
    }

    #[test]
    fn test_reset_clears_draft() {
        let store = InMemoryFormStore::new();
        store.write(FormDraftPatch::single(DraftField::ProjectGithub, "Acme"));
        store.reset();
        assert_eq!(store.read(), FormDraft::default());
    }
}
