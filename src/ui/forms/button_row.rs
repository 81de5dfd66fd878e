//! Buttons row shared by every step

use crate::state::{FormButton, StepForm};
use crate::ui::components::render_action_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

const BUTTON_WIDTH: u16 = 14;

/// Draw the step's buttons right-aligned, labelled by `label`
pub fn draw_button_row(
    frame: &mut Frame,
    area: Rect,
    form: &StepForm,
    label: impl Fn(FormButton) -> &'static str,
) {
    let is_focused = form.is_buttons_row_active();

    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(form.buttons.iter().map(|_| Constraint::Length(BUTTON_WIDTH)));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, button) in form.buttons.iter().enumerate() {
        let accent = match button {
            FormButton::Advance | FormButton::Submit => Some(Color::Green),
            FormButton::Discard => Some(Color::Red),
            FormButton::Back => Some(Color::Gray),
        };
        render_action_button(
            frame,
            chunks[idx + 1],
            label(*button),
            is_focused && form.selected_button == idx,
            accent,
        );
    }
}

/// Default labels; the advance label is step-specific
pub fn default_label(button: FormButton) -> &'static str {
    match button {
        FormButton::Discard => "Discard",
        FormButton::Back => "Back",
        FormButton::Advance => "Next",
        FormButton::Submit => "Submit",
    }
}
