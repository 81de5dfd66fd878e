//! Form field descriptors
//!
//! Fields carry no value of their own: the value lives in the draft and is
//! read from the store on every render, so nothing can drift from it.

use crate::state::{DraftField, FormDraft};

/// Represents a single form field and how to present it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: DraftField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub tooltip: Option<&'static str>,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(field: DraftField, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            field,
            label,
            placeholder,
            tooltip: None,
            is_multiline: false,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(field: DraftField, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(field, label, placeholder)
        }
    }

    /// Attach help text shown while the field is active
    pub fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Current value in `draft`
    pub fn value<'a>(&self, draft: &'a FormDraft) -> &'a str {
        draft.get(self.field)
    }

    /// Value after typing `c`
    pub fn with_char(&self, draft: &FormDraft, c: char) -> String {
        let mut value = self.value(draft).to_string();
        value.push(c);
        value
    }

    /// Value after a backspace
    pub fn without_last_char(&self, draft: &FormDraft) -> String {
        let mut value = self.value(draft).to_string();
        value.pop();
        value
    }
}
