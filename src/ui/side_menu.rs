use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::app::{App, MENU_ENTRIES};

/// Slide-in side menu overlay. Rendered over the left edge of the page
/// content; the page underneath keeps rendering. Selecting an entry does
/// not close the menu.
pub struct SideMenu<'a> {
    pub app: &'a App,
}

impl<'a> SideMenu<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for SideMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 24u16.min(area.width);
        let panel = Rect::new(area.x, area.y, width, area.height);

        Clear.render(panel, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Menu ")
            .title_style(
                Style::default()
                    .fg(Color::Indexed(183))
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Indexed(54)));

        let inner = block.inner(panel);
        block.render(panel, buf);

        let mut lines: Vec<Line<'_>> = vec![Line::from("")];
        for (i, (page, label)) in MENU_ENTRIES.iter().enumerate() {
            let selected = i == self.app.menu_index;
            let current = *page == self.app.page;

            let marker = if selected { "> " } else { "  " };
            let mut style = if selected {
                Style::default()
                    .fg(Color::Indexed(183))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            if current {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(*label, style),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            " Enter select \u{b7} Esc close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
