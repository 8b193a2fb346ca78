use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Keeps the tail of `text` that fits in `width` columns, marking the cut
/// with a leading `<`. Calculator entries grow on the right, so the most
/// recent digits stay visible.
pub fn clip_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        tail.push(c);
    }

    let mut clipped = String::with_capacity(tail.len() + 1);
    clipped.push('<');
    clipped.extend(tail.into_iter().rev());
    clipped
}

pub fn highlight_expression(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let number_style = Style::default().fg(Color::LightGreen);

    let mut spans = Vec::new();
    let mut current = String::new();

    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' {
            current.push(c);
            continue;
        }

        if !current.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut current), number_style));
        }

        match c {
            '+' | '-' | '*' | '/' => {
                spans.push(Span::styled(c.to_string(), operator_style));
            }
            '=' => {
                spans.push(Span::styled(c.to_string(), Style::default().fg(Color::Gray)));
            }
            ' ' => {
                spans.push(Span::raw(" "));
            }
            _ => {
                spans.push(Span::styled(c.to_string(), base_style));
            }
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, number_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(clip_to_width("123", 5), "123");
    }

    #[test]
    fn long_text_keeps_tail() {
        assert_eq!(clip_to_width("123456789", 5), "<6789");
        assert_eq!(clip_to_width("123", 0), "");
    }

    #[test]
    fn highlight_splits_numbers_and_operators() {
        let spans = highlight_expression("12 + 3.5", Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| &*s.content).collect();
        assert_eq!(parts, vec!["12", " ", "+", " ", "3.5"]);
    }
}
