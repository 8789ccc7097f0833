//! Contact form screen: field entry, submission and the submitted summary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::{ContactForm, Phase};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Control, FORM_HEIGHT, FocusRing, draw_form};
use crate::tui::widgets::summary::{SUMMARY_HEIGHT, draw_summary};

/// State for the contact form screen.
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    form: ContactForm,
    focus: FocusRing,
}

impl ContactState {
    /// Creates an empty form with focus on the first name input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying form for rendering and inspection.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Returns the focused control.
    pub fn focus(&self) -> Control {
        self.focus.current()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // AltGr arrives as Ctrl+Alt on Windows and must still type.
        if key.modifiers == KeyModifiers::CONTROL {
            if let KeyCode::Char('s') = key.code {
                self.submit();
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus.focus_prev();
                Action::None
            }
            KeyCode::Enter => {
                match self.focus.current() {
                    Control::Input(_) => self.focus.focus_next(),
                    Control::Submit => self.submit(),
                }
                Action::None
            }
            KeyCode::Char(' ') if self.focus.current() == Control::Submit => {
                self.submit();
                Action::None
            }
            KeyCode::Char(ch) => {
                if let Control::Input(field) = self.focus.current() {
                    let mut value = self.form.value(field).to_string();
                    value.push(ch);
                    self.form.update(field, value);
                }
                Action::None
            }
            KeyCode::Backspace => {
                if let Control::Input(field) = self.focus.current() {
                    let mut value = self.form.value(field).to_string();
                    if value.pop().is_some() {
                        self.form.update(field, value);
                    }
                }
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn submit(&mut self) {
        if let Err(errors) = self.form.submit() {
            // Jump to the first invalid input so the user can fix it.
            if let Some((field, _)) = errors.iter().next() {
                self.focus.focus(Control::Input(field));
            }
        }
    }
}

impl ScreenState for ContactState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        ContactState::handle_key(self, key)
    }
}

/// Renders the contact form screen.
#[mutants::skip]
pub fn draw_contact(state: &ContactState, frame: &mut Frame, area: Rect) {
    let [header_area, form_area, summary_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Length(SUMMARY_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let header = Paragraph::new(Line::from("Contact Form"))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(header, header_area);

    draw_form(state.form(), state.focus(), frame, form_area);

    if let Some(submission) = state.form().submission() {
        draw_summary(submission, frame, summary_area);
    }

    let hint = match state.form().phase() {
        Phase::Blocked => "Fix the highlighted fields, then submit again",
        Phase::Submitted => "Submitted. Keep editing to send again",
        Phase::Editing => "Tab/Shift+Tab: next/prev  Ctrl+S: submit  F1: help  Esc: quit",
    };
    let footer = Paragraph::new(Line::from(hint)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
