use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Top navigation bar: hamburger indicator on the left, app title on the
/// right, mirroring the menu/title split of the page header.
pub struct NavBar<'a> {
    pub app: &'a App,
}

impl<'a> NavBar<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bg_style = Style::default().bg(Color::Indexed(54)).fg(Color::White);
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(bg_style);
        }

        // Hamburger / close indicator (m toggles the menu).
        let burger = if self.app.menu_open {
            " \u{2715} m "
        } else {
            " \u{2630} m "
        };
        let left = Span::styled(burger, bg_style.add_modifier(Modifier::BOLD));

        let title = "Disaster Response ";
        let left_width = burger.width();
        let padding = (area.width as usize).saturating_sub(left_width + title.width());

        let line = Line::from(vec![
            left,
            Span::styled(" ".repeat(padding), bg_style),
            Span::styled(
                title,
                Style::default()
                    .bg(Color::Indexed(54))
                    .fg(Color::Indexed(183))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
