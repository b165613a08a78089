use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// Landing page.
#[derive(Default)]
pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for HomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "A system for disaster response classification.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Indexed(183))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " to start classification",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
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
            .render(content, buf);
    }
}
