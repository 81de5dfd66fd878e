//! Application state definitions

use super::forms::StepForm;
use std::path::PathBuf;

/// Current step of the project form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    #[default]
    Metadata,
    Verification,
    Preview,
}

impl FormStep {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Metadata => "Details",
            Self::Verification => "Verification",
            Self::Preview => "Preview",
        }
    }

    /// 1-based position shown in the header
    pub fn position(&self) -> usize {
        match self {
            Self::Metadata => 1,
            Self::Verification => 2,
            Self::Preview => 3,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub step: FormStep,
    pub metadata_form: StepForm,
    pub verification_form: StepForm,
    pub preview_form: StepForm,
    /// One-line message in the status bar, cleared on the next key press
    pub status_message: Option<String>,
    /// Where the most recent submission was written
    pub last_submission: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            step: FormStep::default(),
            metadata_form: StepForm::metadata(),
            verification_form: StepForm::verification(),
            preview_form: StepForm::preview(),
            status_message: None,
            last_submission: None,
        }
    }
}

impl AppState {
    /// Form of the current step
    pub fn current_form(&self) -> &StepForm {
        match self.step {
            FormStep::Metadata => &self.metadata_form,
            FormStep::Verification => &self.verification_form,
            FormStep::Preview => &self.preview_form,
        }
    }

    pub fn current_form_mut(&mut self) -> &mut StepForm {
        match self.step {
            FormStep::Metadata => &mut self.metadata_form,
            FormStep::Verification => &mut self.verification_form,
            FormStep::Preview => &mut self.preview_form,
        }
    }

    /// Reset focus on every step, e.g. after the draft is discarded
    pub fn reset_forms(&mut self) {
        self.metadata_form.reset_focus();
        self.verification_form.reset_focus();
        self.preview_form.reset_focus();
    }
}
