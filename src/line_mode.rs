use anyhow::{Context, Result};
use keycalc::{Action, Session, SessionConfig};
use std::io::{stdin, stdout, Write};
use termion::{clear::CurrentLine as ClearLine, event::Key, input::TermRead, raw::IntoRawMode};

enum Input {
    Apply(Action),
    History,
    Quit,
    Ignore,
}

fn map_key(key: Key) -> Input {
    match key {
        Key::Ctrl('c') | Key::Char('q') => Input::Quit,
        Key::Char('h') => Input::History,
        Key::Char(c) => Action::from_char(c).map_or(Input::Ignore, Input::Apply),
        Key::Backspace => Input::Apply(Action::Backspace),
        Key::Delete => Input::Apply(Action::ClearEntry),
        Key::Esc => Input::Apply(Action::ClearAll),
        Key::F(5) => Input::Apply(Action::MemoryClear),
        Key::F(6) => Input::Apply(Action::MemoryRecall),
        Key::F(7) => Input::Apply(Action::MemoryAdd),
        Key::F(8) => Input::Apply(Action::MemorySub),
        _ => Input::Ignore,
    }
}

fn status_line(session: &Session) -> String {
    let pending = session.pending_expression();
    if pending.is_empty() {
        format!("[{}]  {}", session.memory_display(), session.current_entry())
    } else {
        format!(
            "[{}]  {} {}",
            session.memory_display(),
            pending,
            session.current_entry()
        )
    }
}

pub fn run_line(config: SessionConfig) -> Result<()> {
    println!("keycalc - keypad calculator");
    println!("Digits, '.', + - * /, Enter or '=' to evaluate");
    println!("Backspace deletes, Del = CE, Esc = C, F5-F8 = MC MR M+ M-");
    println!("'h' prints the history, 'q' quits\n");

    let mut stdout = stdout()
        .into_raw_mode()
        .context("failed to switch the terminal to raw mode")?;
    let mut session = Session::with_config(config);

    write!(stdout, "\r{}{}", ClearLine, status_line(&session))?;
    stdout.flush()?;

    for key in stdin().keys() {
        match map_key(key?) {
            Input::Quit => break,
            Input::Ignore => continue,
            Input::History => {
                let history = session.history_display();
                let history = if history.is_empty() {
                    "(no calculations yet)".to_string()
                } else {
                    history
                };
                write!(stdout, "\r{}History: {}\r\n", ClearLine, history)?;
            }
            Input::Apply(Action::Equals) => {
                let expression = format!(
                    "{} {}",
                    session.pending_expression(),
                    session.current_entry()
                );
                let expression = expression.trim().to_string();
                let outcome = session.finalize();
                let verdict = match outcome {
                    Ok(_) => session.current_entry().to_string(),
                    Err(e) => format!("{} ({})", session.current_entry(), e),
                };
                write!(stdout, "\r{}{} = {}\r\n", ClearLine, expression, verdict)?;
            }
            Input::Apply(action) => session.apply(action),
        }

        write!(stdout, "\r{}{}", ClearLine, status_line(&session))?;
        stdout.flush()?;
    }

    write!(stdout, "\r\nGoodbye!\r\n")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_maps_to_equals() {
        assert!(matches!(map_key(Key::Char('\n')), Input::Apply(Action::Equals)));
    }

    #[test]
    fn quit_and_history_keys() {
        assert!(matches!(map_key(Key::Char('q')), Input::Quit));
        assert!(matches!(map_key(Key::Ctrl('c')), Input::Quit));
        assert!(matches!(map_key(Key::Char('h')), Input::History));
        assert!(matches!(map_key(Key::Char('x')), Input::Ignore));
    }

    #[test]
    fn status_line_shows_pending_expression() {
        let mut session = Session::new();
        session.apply(Action::Digit('4'));
        session.apply(Action::Operator(keycalc::Operator::Sub));
        session.apply(Action::Digit('1'));
        assert_eq!(status_line(&session), "[M: 0]  4 - 1");
    }
}
