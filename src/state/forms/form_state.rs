//! Focus state for the three project form steps

use super::field::FormField;
use crate::state::DraftField;

/// Buttons shown under a step's fields, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    /// Discard the draft (metadata step)
    Discard,
    Back,
    /// Next or Skip, depending on what was entered
    Advance,
    Submit,
}

/// Fields plus a trailing buttons row; focus moves through both
#[derive(Debug, Clone)]
pub struct StepForm {
    pub title: &'static str,
    pub fields: Vec<FormField>,
    pub buttons: Vec<FormButton>,
    pub active_field_index: usize,
    pub selected_button: usize,
}

const GITHUB_TOOLTIP: &str = "To verify, you must be a public member of the GitHub organization. \
GitHub organization and user names are case sensitive.";

impl StepForm {
    fn new(title: &'static str, fields: Vec<FormField>, buttons: Vec<FormButton>) -> Self {
        // Primary action is the rightmost button
        let selected_button = buttons.len().saturating_sub(1);
        Self {
            title,
            fields,
            buttons,
            active_field_index: 0,
            selected_button,
        }
    }

    /// Project details entered before verification
    pub fn metadata() -> Self {
        Self::new(
            "Project Details",
            vec![
                FormField::text(DraftField::Title, "Project Name", "What's the project name?"),
                FormField::text(DraftField::Website, "Project Website", "https://"),
                FormField::multiline(
                    DraftField::Description,
                    "Project Description",
                    "What's the project about?",
                ),
            ],
            vec![FormButton::Discard, FormButton::Advance],
        )
    }

    /// Social identity verification step
    pub fn verification() -> Self {
        Self::new(
            "Verify Project Ownership",
            vec![
                FormField::text(
                    DraftField::ProjectTwitter,
                    "Twitter",
                    "Your project's Twitter handle",
                ),
                FormField::text(
                    DraftField::UserGithub,
                    "Your GitHub Username",
                    "GitHub username you use to contribute to the project",
                ),
                FormField::text(
                    DraftField::ProjectGithub,
                    "GitHub Organization",
                    "GitHub org name your project is part of",
                )
                .with_tooltip(GITHUB_TOOLTIP),
            ],
            vec![FormButton::Back, FormButton::Advance],
        )
    }

    /// Read-only review before submission
    pub fn preview() -> Self {
        Self::new(
            "Preview Application",
            Vec::new(),
            vec![FormButton::Back, FormButton::Submit],
        )
    }

    /// Number of focus stops: every field plus the buttons row
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// The field being edited, `None` on the buttons row
    pub fn active_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        if !self.buttons.is_empty() {
            self.selected_button = (self.selected_button + 1) % self.buttons.len();
        }
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = self.buttons.len().saturating_sub(1);
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn selected(&self) -> Option<FormButton> {
        self.buttons.get(self.selected_button).copied()
    }

    /// Put focus back on the first stop and the primary button
    pub fn reset_focus(&mut self) {
        self.active_field_index = 0;
        self.selected_button = self.buttons.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_verification_form_fields_in_order() {
        let form = StepForm::verification();
        let fields: Vec<_> = form.fields.iter().map(|f| f.field).collect();
        assert_eq!(
            fields,
            vec![
                DraftField::ProjectTwitter,
                DraftField::UserGithub,
                DraftField::ProjectGithub
            ]
        );
        assert!(form.fields[2].tooltip.is_some());
    }

    #[test]
    fn test_focus_wraps_through_buttons_row() {
        let mut form = StepForm::verification();
        assert_eq!(form.field_count(), 4);

        for _ in 0..3 {
            form.next_field();
        }
        assert!(form.is_buttons_row_active());
        assert!(form.active_field().is_none());

        form.next_field();
        assert_eq!(form.active_field_index, 0);

        form.prev_field();
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_primary_button_selected_by_default() {
        assert_eq!(StepForm::verification().selected(), Some(FormButton::Advance));
        assert_eq!(StepForm::preview().selected(), Some(FormButton::Submit));
        assert_eq!(StepForm::metadata().selected(), Some(FormButton::Advance));
    }

    #[test]
    fn test_button_selection_wraps() {
        let mut form = StepForm::verification();
        form.next_button();
        assert_eq!(form.selected(), Some(FormButton::Back));
        form.prev_button();
        assert_eq!(form.selected(), Some(FormButton::Advance));
        form.prev_button();
        assert_eq!(form.selected(), Some(FormButton::Back));
    }

    #[test]
    fn test_preview_starts_on_buttons_row() {
        let form = StepForm::preview();
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_reset_focus() {
        let mut form = StepForm::metadata();
        form.next_field();
        form.next_button();
        form.reset_focus();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected(), Some(FormButton::Advance));
    }
}
