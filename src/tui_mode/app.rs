use crossterm::event::{KeyCode, KeyModifiers};
use keycalc::{Action, Session, SessionConfig};

pub struct App {
    pub session: Session,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub show_details: bool,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new(config: SessionConfig) -> Self {
        App {
            session: Session::with_config(config),
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            show_details: false,
            terminal_too_small: false,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.show_help {
            match code {
                KeyCode::Down => self.help_scroll = self.help_scroll.saturating_add(1),
                KeyCode::Up => self.help_scroll = self.help_scroll.saturating_sub(1),
                KeyCode::PageDown => self.help_scroll = self.help_scroll.saturating_add(10),
                KeyCode::PageUp => self.help_scroll = self.help_scroll.saturating_sub(10),
                KeyCode::Esc | KeyCode::F(1) => {
                    self.show_help = false;
                    self.help_scroll = 0;
                }
                _ => {}
            }
            return;
        }

        if let Some(action) = key_to_action(code, modifiers) {
            self.session.apply(action);
            return;
        }

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::F(1) => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            KeyCode::F(2) => self.show_details = !self.show_details,
            _ => {}
        }
    }
}

fn key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Action::from_char(c)
        }
        KeyCode::Enter => Some(Action::Equals),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::ClearEntry),
        KeyCode::Esc => Some(Action::ClearAll),
        KeyCode::F(5) => Some(Action::MemoryClear),
        KeyCode::F(6) => Some(Action::MemoryRecall),
        KeyCode::F(7) => Some(Action::MemoryAdd),
        KeyCode::F(8) => Some(Action::MemorySub),
        _ => None,
    }
}
