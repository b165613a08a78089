use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

/// About page.
#[derive(Default)]
pub struct AboutView;

impl AboutView {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for AboutView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "About Us",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "This project classifies tweets related to disasters using AI.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "It helps in identifying emergency situations and responding efficiently.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let vertical_pad = area.height.saturating_sub(lines.len() as u16) / 3;
        let content = Rect::new(
            area.x,
            area.y + vertical_pad,
            area.width,
            area.height.saturating_sub(vertical_pad),
        );

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);
    }
}
