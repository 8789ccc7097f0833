use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::{Frame, Terminal};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ContactState, HelpState, draw_contact, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// The contact form itself.
    #[default]
    Contact,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct App {
    screen: Screen,
    contact: ContactState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Contact`] screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        tracing::info!("contact form started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        tracing::info!("contact form closed");
        Ok(())
    }

    /// Renders the current screen inside the application frame.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let block = Block::default()
            .title(" contact-form ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(frame.area());
        frame.render_widget(block, frame.area());

        match self.screen {
            Screen::Contact => draw_contact(&self.contact, frame, inner),
            Screen::Help => draw_help(&self.help, frame, inner),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            let target = match self.screen {
                Screen::Help => Screen::Contact,
                Screen::Contact => Screen::Help,
            };
            self.navigate(target);
            return;
        }

        let state: &mut dyn ScreenState = match self.screen {
            Screen::Contact => &mut self.contact,
            Screen::Help => &mut self.help,
        };
        let action = state.handle_key(key);
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        if screen == Screen::Help {
            self.help.reset();
        }
        tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
        self.screen = screen;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact form screen state.
    pub fn contact(&self) -> &ContactState {
        &self.contact
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{Field, Phase};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(app: &mut App, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn new_starts_on_contact() {
        let app = App::new();
        assert_eq!(app.screen(), Screen::Contact);
        assert!(!app.should_quit());
        assert_eq!(app.contact().form().phase(), Phase::Editing);
    }

    #[test]
    fn esc_on_contact_quits() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        for screen in [Screen::Contact, Screen::Help] {
            let mut app = App::new();
            app.screen = screen;
            app.handle_key(ctrl('c'));
            assert!(app.should_quit(), "Ctrl+C on {screen:?} should quit");
        }
    }

    #[test]
    fn q_on_contact_types_instead_of_quitting() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.contact().form().value(Field::FirstName), "q");
    }

    #[test]
    fn f1_toggles_help() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Contact);
    }

    #[test]
    fn esc_on_help_returns_to_contact() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Contact);
        assert!(!app.should_quit());
    }

    #[test]
    fn opening_help_resets_scroll() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.help.scroll(), 0);
    }

    #[test]
    fn help_keeps_form_values() {
        let mut app = App::new();
        type_string(&mut app, "Jimmy");
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.contact().form().value(Field::FirstName), "Jimmy");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        app.handle_key(release(KeyCode::Esc));
        app.handle_key(release(KeyCode::Char('x')));
        assert!(!app.should_quit());
        assert_eq!(app.contact().form().value(Field::FirstName), "");
    }

    #[test]
    fn full_submission_through_app() {
        let mut app = App::new();
        type_string(&mut app, "Jimmy");
        app.handle_key(press(KeyCode::Tab));
        type_string(&mut app, "dildos");
        app.handle_key(press(KeyCode::Tab));
        type_string(&mut app, "landonator14@yahoo.com");
        app.handle_key(press(KeyCode::Tab));
        type_string(&mut app, "meooow");
        app.handle_key(ctrl('s'));

        let form = app.contact().form();
        assert_eq!(form.phase(), Phase::Submitted);
        let details = form.submission().unwrap().details();
        assert_eq!(details.first_name, "Jimmy");
        assert_eq!(details.message(), Some("meooow"));
    }
}
