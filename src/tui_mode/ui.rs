use super::app::App;
use super::helpers::{clip_to_width, highlight_expression};
use crate::render_help::render_help;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use keycalc::{DIV_ZERO_MARKER, ERROR_MARKER};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use std::time::Duration;

const MIN_TERMINAL_WIDTH: u16 = 40;
const MIN_TERMINAL_HEIGHT: u16 = 12;

pub fn run_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            if app.show_help {
                render_help(f, app);
            } else {
                ui(f, app);
            }
        })?;

        if app.should_quit {
            break;
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            if let Event::Key(KeyEvent { code, modifiers, kind, .. }) = crossterm::event::read()? {
                if kind == KeyEventKind::Press {
                    app.handle_key(code, modifiers);
                }
            }
        }
    }
    Ok(())
}

fn ui(frame: &mut Frame, app: &mut App) {
    let terminal_size = frame.size();

    app.terminal_too_small = terminal_size.width < MIN_TERMINAL_WIDTH
        || terminal_size.height < MIN_TERMINAL_HEIGHT;

    if app.terminal_too_small {
        render_resize_message(frame, terminal_size);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(terminal_size);

    render_memory(frame, app, layout[0]);
    render_display(frame, app, layout[1]);
    if app.show_details {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[2]);
        render_history(frame, app, columns[0]);
        render_details(frame, app, columns[1]);
    } else {
        render_history(frame, app, layout[2]);
    }
    render_status(frame, layout[3]);
}

fn render_resize_message(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small! Min size: {}x{}. Current: {}x{}",
        MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT, area.width, area.height
    );

    let text = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal window",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Resize Required ")
        .title_alignment(Alignment::Center);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_memory(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.session.memory() != 0.0 {
        Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let paragraph = Paragraph::new(app.session.memory_display())
        .style(style)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}

fn render_display(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Display ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let width = inner_area.width.saturating_sub(1) as usize;
    let pending = clip_to_width(&app.session.pending_expression(), width);
    let entry = app.session.current_entry();

    let entry_style = if entry == DIV_ZERO_MARKER || entry == ERROR_MARKER {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let text = vec![
        Line::from(highlight_expression(&pending, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(clip_to_width(entry, width), entry_style)),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Right);
    frame.render_widget(paragraph, inner_area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" History ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if app.session.history_len() == 0 {
        let empty_msg = Paragraph::new("No calculations yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, inner_area);
        return;
    }

    let width = inner_area.width.saturating_sub(2) as usize;
    let base_style = Style::default().fg(Color::Cyan);

    let items: Vec<ListItem> = app
        .session
        .history()
        .rev()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if i == 0 { "> " } else { "  " };
            let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Green))];
            spans.extend(highlight_expression(
                &clip_to_width(&entry.to_string(), width),
                base_style,
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items), inner_area);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Steps ")
        .title_alignment(Alignment::Center);

    let lines: Vec<Line> = app
        .session
        .last_steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            Line::from(Span::styled(
                format!("{}: {} = {}", i + 1, step.operation, step.result),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect) {
    let keys = [
        ("Enter", "Equals"),
        ("Del", "CE"),
        ("Esc", "C"),
        ("F5-F8", "MC MR M+ M-"),
        ("F1", "Help"),
        ("q", "Quit"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    *key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {} ", desc), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
