use keycalc::calc_engine::{format_result, parse_operand};
use keycalc::{Action, CalcError, Operator, Session, DIV_ZERO_MARKER};

/// Feeds raw entries the way a keypad would: operands digit by digit,
/// operators as commits, then equals.
fn calculate(session: &mut Session, entries: &[&str]) -> keycalc::Result<f64> {
    for entry in entries {
        match Operator::from_symbol(entry) {
            Some(op) => session.apply(Action::Operator(op)),
            None => {
                for c in entry.chars() {
                    session.apply(Action::Digit(c));
                }
            }
        }
    }
    session.finalize()
}

#[test]
fn equal_precedence_runs_left_to_right() {
    let mut session = Session::new();
    assert_eq!(calculate(&mut session, &["8", "-", "3", "-", "2"]), Ok(3.0));
    assert_eq!(session.current_entry(), "3");

    session.clear_all();
    assert_eq!(calculate(&mut session, &["16", "/", "4", "/", "2"]), Ok(2.0));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let mut session = Session::new();
    assert_eq!(calculate(&mut session, &["2", "+", "3", "*", "4"]), Ok(14.0));
    assert_eq!(session.current_entry(), "14");
}

#[test]
fn division_by_zero_shows_marker_and_keeps_history() {
    let mut session = Session::new();
    calculate(&mut session, &["1", "+", "1"]).ok();
    let before: Vec<String> = session.history().map(ToString::to_string).collect();

    session.clear_all();
    assert_eq!(
        calculate(&mut session, &["5", "/", "0"]),
        Err(CalcError::DivisionByZero)
    );
    assert_eq!(session.current_entry(), DIV_ZERO_MARKER);
    assert!(session.buffer().is_empty());

    let after: Vec<String> = session.history().map(ToString::to_string).collect();
    assert_eq!(before, after);
}

#[test]
fn history_keeps_five_most_recent() {
    let mut session = Session::new();
    for n in 1..=6 {
        session.clear_all();
        let operand = n.to_string();
        calculate(&mut session, &[operand.as_str(), "+", "0"]).ok();
    }

    assert_eq!(session.history_len(), 5);
    let expressions: Vec<String> = session.history().map(|h| h.expression.clone()).collect();
    assert_eq!(
        expressions,
        vec!["2 + 0", "3 + 0", "4 + 0", "5 + 0", "6 + 0"]
    );
    assert!(session.history_display().starts_with("6 + 0 = 6"));
}

#[test]
fn clearing_a_fresh_session_changes_nothing() {
    let mut session = Session::new();
    session.clear_all();
    assert_eq!(session.current_entry(), "0");
    assert!(session.buffer().is_empty());

    session.clear_entry();
    session.clear_entry();
    assert_eq!(session.current_entry(), "0");
    assert!(session.buffer().is_empty());
    assert_eq!(session.history_len(), 0);
}

#[test]
fn repeated_decimal_point_is_rejected() {
    let mut session = Session::new();
    session.apply(Action::Digit('.'));
    session.apply(Action::Digit('.'));
    assert_eq!(session.current_entry(), "0.");
}

#[test]
fn formatted_result_reads_back_as_the_same_value() {
    for value in [0.1 + 0.2, 1.0 / 3.0, 2.0 / 7.0, 123456.789, 42.5] {
        let formatted = format_result(value);

        let mut session = Session::new();
        let outcome = calculate(&mut session, &[formatted.as_str()]);
        let reread = outcome.unwrap_or(f64::NAN);

        assert!((reread - value).abs() < 1e-12, "{} -> {}", value, formatted);
        assert_eq!(session.current_entry(), formatted);
    }
}

#[test]
fn backspace_on_single_digit_resets_to_zero() {
    let mut session = Session::new();
    session.apply(Action::Digit('5'));
    session.apply(Action::Backspace);
    assert_eq!(session.current_entry(), "0");
}

#[test]
fn memory_survives_clear_and_finalize() {
    let mut session = Session::new();
    session.apply(Action::Digit('8'));
    session.apply(Action::MemoryAdd);
    session.apply(Action::ClearAll);
    calculate(&mut session, &["1", "+", "1"]).ok();
    assert_eq!(session.memory_display(), "M: 8");

    session.apply(Action::MemorySub);
    assert_eq!(parse_operand(session.current_entry()), 2.0);
    assert_eq!(session.memory(), 6.0);

    session.apply(Action::MemoryRecall);
    assert_eq!(session.current_entry(), "6");
    assert_eq!(session.history_len(), 1);
}

#[test]
fn result_can_continue_a_new_calculation() {
    let mut session = Session::new();
    calculate(&mut session, &["6", "*", "7"]).ok();
    session.apply(Action::Operator(Operator::Sub));
    session.apply(Action::Digit('2'));
    assert_eq!(session.finalize(), Ok(40.0));
    let last = session.history().last().map(ToString::to_string);
    assert_eq!(last.as_deref(), Some("42 - 2 = 40"));
}
