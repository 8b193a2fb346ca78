use crate::tui_mode::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_help(frame: &mut Frame, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" keycalc Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);

    let help_text = vec![
        Line::from(Span::styled("keycalc - Keypad Calculator", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Entry:", heading)),
        Line::from("  0-9 .    : Type the current number (one decimal point at most)"),
        Line::from("  + - * /  : Commit the number and the operator"),
        Line::from("  Enter, = : Evaluate the whole expression"),
        Line::from("  Backspace: Delete the last digit"),
        Line::from("  Delete   : Clear entry (CE)"),
        Line::from("  Esc      : Clear all (C)"),
        Line::from(""),
        Line::from(Span::styled("Precedence:", heading)),
        Line::from("  * and / bind tighter than + and -"),
        Line::from("  Equal precedence runs left to right: 8 - 3 - 2 = 3"),
        Line::from(""),
        Line::from(Span::styled("Memory:", heading)),
        Line::from("  F5 : MC  clear memory"),
        Line::from("  F6 : MR  recall memory into the entry"),
        Line::from("  F7 : M+  add the entry to memory"),
        Line::from("  F8 : M-  subtract the entry from memory"),
        Line::from(""),
        Line::from(Span::styled("Other:", heading)),
        Line::from("  F1     : Toggle this help"),
        Line::from("  F2     : Show the steps of the last calculation"),
        Line::from("  q      : Quit"),
        Line::from("  ↑ ↓ PgUp PgDn : Scroll this help"),
        Line::from(""),
        Line::from(Span::styled("History:", heading)),
        Line::from("  The most recent calculations are listed newest first."),
        Line::from("  Failed calculations are not recorded."),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
