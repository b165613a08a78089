use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

/// A blocking centered popup that displays a failure message until the user
/// dismisses it. The terminal analog of `alert()`: key input is swallowed
/// until Esc or Enter clears it.
pub struct ErrorPopup<'a> {
    text: &'a str,
}

impl<'a> ErrorPopup<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for ErrorPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 5 {
            return;
        }

        let width = 64u16.min(area.width - 4);
        // Border plus one column of padding each side.
        let inner_width = width.saturating_sub(4) as usize;

        // Estimate wrapped line count by display width, so wide (CJK etc.)
        // backend messages size the panel the same as ASCII ones.
        let text_lines: usize = self
            .text
            .lines()
            .map(|line| {
                let w = line.width();
                if w == 0 || inner_width == 0 {
                    1
                } else {
                    w.div_ceil(inner_width)
                }
            })
            .sum();

        // Borders, message, blank line, dismiss hint.
        let height = ((text_lines as u16) + 4).max(5).min(area.height - 2);

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let panel = Rect::new(x, y, width, height);

        Clear.render(panel, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Request Failed ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::Red));

        let inner = block.inner(panel);
        block.render(panel, buf);

        if inner.height < 2 {
            return;
        }
        let text_area = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height - 1,
        );
        let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);

        Paragraph::new(self.text)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        let hint = Line::from(vec![
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("/", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" dismiss ", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hint)
            .alignment(Alignment::Right)
            .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(area: Rect, message: &str) -> String {
        let mut buf = Buffer::empty(area);
        ErrorPopup::new(message).render(area, &mut buf);

        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn shows_message_title_and_dismiss_hint() {
        let text = rendered_text(
            Rect::new(0, 0, 50, 12),
            "Failed to generate map: timeout",
        );
        assert!(text.contains("Request Failed"));
        assert!(text.contains("timeout"));
        assert!(text.contains("dismiss"));
    }

    #[test]
    fn handles_wide_multibyte_messages() {
        let text = rendered_text(Rect::new(0, 0, 30, 12), "分類に失敗しました: タイムアウト");
        assert!(text.contains("Request Failed"));
    }

    #[test]
    fn tiny_areas_render_nothing() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        ErrorPopup::new("boom").render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
