//! Summary widget: the values captured by the last accepted submit.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Submission;

/// Label of the summary line that only appears when a message was submitted.
pub const MESSAGE_LABEL: &str = "Message: ";

/// Rows needed to show a summary with every line plus borders.
pub const SUMMARY_HEIGHT: u16 = 6;

/// Builds one line per submitted value. The message line is omitted when blank.
pub fn summary_lines(submission: &Submission) -> Vec<Line<'_>> {
    let details = submission.details();
    let label_style = Style::default().add_modifier(Modifier::BOLD);

    let mut rows = vec![
        ("First Name: ", details.first_name.as_str()),
        ("Last Name: ", details.last_name.as_str()),
        ("Email: ", details.email.as_str()),
    ];
    if let Some(message) = details.message() {
        rows.push((MESSAGE_LABEL, message));
    }

    rows.into_iter()
        .map(|(label, value)| Line::from(vec![Span::styled(label, label_style), Span::raw(value)]))
        .collect()
}

/// Renders the "You Submitted" block.
#[mutants::skip]
pub fn draw_summary(submission: &Submission, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" You Submitted: ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let paragraph = Paragraph::new(summary_lines(submission)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactForm, Field};

    fn submitted(message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.update(Field::FirstName, "Jimmy");
        form.update(Field::LastName, "dildos");
        form.update(Field::Email, "landonator14@yahoo.com");
        form.update(Field::Message, message);
        form.submit().unwrap();
        form
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn three_lines_without_message() {
        let form = submitted("");
        let lines = summary_lines(form.submission().unwrap());
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            text,
            vec![
                "First Name: Jimmy",
                "Last Name: dildos",
                "Email: landonator14@yahoo.com",
            ]
        );
    }

    #[test]
    fn four_lines_with_message() {
        let form = submitted("meooow");
        let lines = summary_lines(form.submission().unwrap());
        assert_eq!(lines.len(), 4);
        assert_eq!(line_text(&lines[3]), "Message: meooow");
    }
}
