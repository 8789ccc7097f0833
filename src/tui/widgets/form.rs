//! Contact form widget: labelled inputs, inline errors and a submit control.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{ContactForm, Field};

/// Rows used by one input. Its error is drawn on the bottom border.
const FIELD_HEIGHT: u16 = 3;

/// Total rows [`draw_form`] needs to show every control.
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * Field::ALL.len() as u16 + 1;

/// Prefix of every rendered validation error line.
pub const ERROR_PREFIX: &str = "Error: ";

/// A focusable control of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Input(Field),
    Submit,
}

impl Control {
    /// Focus order: every input, then the submit button.
    pub const ORDER: [Control; 5] = [
        Self::Input(Field::FirstName),
        Self::Input(Field::LastName),
        Self::Input(Field::Email),
        Self::Input(Field::Message),
        Self::Submit,
    ];
}

/// Tracks which control has keyboard focus.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    index: usize,
}

impl FocusRing {
    /// Focus starts on the first input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the focused control.
    pub fn current(&self) -> Control {
        Control::ORDER[self.index]
    }

    /// Moves focus to the next control, wrapping around.
    pub fn focus_next(&mut self) {
        self.index = (self.index + 1) % Control::ORDER.len();
    }

    /// Moves focus to the previous control, wrapping around.
    pub fn focus_prev(&mut self) {
        self.index = (self.index + Control::ORDER.len() - 1) % Control::ORDER.len();
    }

    /// Focuses `control` directly.
    pub fn focus(&mut self, control: Control) {
        if let Some(index) = Control::ORDER.iter().position(|c| *c == control) {
            self.index = index;
        }
    }
}

/// Renders every input, with any error on its bottom border, then the submit button.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &ContactForm, focus: Control, frame: &mut Frame, area: Rect) {
    let mut constraints: Vec<Constraint> = Field::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let is_focused = focus == Control::Input(field);
        let error = form.error(field);

        let border_color = if error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };

        let mut block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        if let Some(err) = error {
            block = block.title_bottom(Line::from(Span::styled(
                format!("{ERROR_PREFIX}{err}"),
                Style::default().fg(Color::Red),
            )));
        }

        let mut spans = vec![Span::raw(form.value(field))];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[i]);
    }

    let submit_style = if focus == Control::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let submit = Paragraph::new(Span::styled("[ Submit ]", submit_style));
    frame.render_widget(submit, rows[Field::ALL.len()]);
}
