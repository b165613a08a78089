use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::app::{App, AppMode};

/// Single-line command input shown below the status bar in command mode.
pub struct CommandBar<'a> {
    pub app: &'a App,
}

impl<'a> CommandBar<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 || self.app.mode != AppMode::Command {
            return;
        }

        let line = Line::from(vec![
            Span::styled(
                ":",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.app.command_input.as_str()),
            Span::styled("\u{2588}", Style::default().fg(Color::DarkGray)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
