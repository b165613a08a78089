use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, AppMode};
use crate::event::PageId;

/// Bottom status bar showing mode, current page, pending operations and
/// status messages.
pub struct StatusBar<'a> {
    pub app: &'a App,
}

impl<'a> StatusBar<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(bg_style);
        }

        let mut spans = Vec::new();

        // Mode indicator
        let mode_str = match self.app.mode {
            AppMode::Normal => " NORMAL ",
            AppMode::Command => " COMMAND ",
        };
        let mode_style = Style::default()
            .bg(match self.app.mode {
                AppMode::Normal => Color::Blue,
                AppMode::Command => Color::Magenta,
            })
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        spans.push(Span::styled(mode_str, mode_style));
        spans.push(Span::raw(" "));

        // Current page
        let page_name = match self.app.page {
            PageId::Home => "Home",
            PageId::Tweets => "Classify Tweets",
            PageId::About => "About Us",
        };
        spans.push(Span::styled(page_name, bg_style));

        // Pending operation indicators
        if self.app.loading {
            spans.push(Span::styled(
                " [classifying...]",
                Style::default().bg(Color::DarkGray).fg(Color::Yellow),
            ));
        }
        if self.app.map_pending {
            spans.push(Span::styled(
                " [generating map...]",
                Style::default().bg(Color::DarkGray).fg(Color::Yellow),
            ));
        }

        // Last successful fetch time
        if let Some(fetched) = self.app.last_fetched {
            spans.push(Span::styled(
                format!(" updated {}", fetched.format("%H:%M:%S")),
                Style::default().bg(Color::DarkGray).fg(Color::Gray),
            ));
        }

        // Status message (right-aligned, truncated on char boundaries)
        if let Some(ref msg) = self.app.status_message {
            let left_width: usize = spans.iter().map(|s| s.width()).sum();
            let msg = truncate_to_width(msg, area.width as usize);
            let padding = (area.width as usize).saturating_sub(left_width + msg.width());
            if padding > 0 {
                spans.push(Span::styled(" ".repeat(padding), bg_style));
            }
            spans.push(Span::styled(
                msg,
                Style::default().bg(Color::DarkGray).fg(Color::Green),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Longest prefix whose display width fits in `max_width`. Byte indexing
/// would split multi-byte characters.
fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width {
            return &s[..idx];
        }
        used += ch_width;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BackendClient;
    use crate::config::AppConfig;

    #[test]
    fn truncates_on_char_boundaries_by_display_width() {
        assert_eq!(truncate_to_width("abcdef", 4), "abcd");
        assert_eq!(truncate_to_width("abc", 10), "abc");
        // Wide CJK chars take two columns each.
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("", 3), "");
    }

    #[tokio::test]
    async fn renders_multibyte_status_message_wider_than_the_bar() {
        let mut app = App::new(
            AppConfig::default(),
            BackendClient::new("http://localhost:8000"),
        );
        app.status_message = Some("Unknown command: 日本語のコマンド".to_string());

        let area = Rect::new(0, 0, 18, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&app).render(area, &mut buf);
    }
}
