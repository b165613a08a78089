use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::app::App;
use crate::ui::tweet::{TweetCard, tweet_card_height};

/// The classification page: fetch/map controls plus a scrollable list of
/// classified tweets with selection highlight.
pub struct TweetListView<'a> {
    pub app: &'a App,
}

impl<'a> TweetListView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for TweetListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Classify Disaster Tweets ")
            .title_style(
                Style::default()
                    .fg(Color::Indexed(183))
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Controls line: the fetch control is disabled while loading.
        let fetch_span = if self.app.loading {
            Span::styled(
                "[Classifying...]",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(
                "[f] Fetch Tweets",
                Style::default().fg(Color::Indexed(183)).add_modifier(Modifier::BOLD),
            )
        };
        let map_span = if self.app.map_pending {
            Span::styled(
                "[Generating map...]",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(
                "[d] Show Disaster Map",
                Style::default().fg(Color::Indexed(183)).add_modifier(Modifier::BOLD),
            )
        };
        let controls = Line::from(vec![fetch_span, Span::raw("   "), map_span]);
        buf.set_line(inner.x + 1, inner.y, &controls, inner.width);

        let list_area = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            inner.height.saturating_sub(2),
        );
        if list_area.height == 0 {
            return;
        }

        if self.app.tweets.is_empty() {
            let msg = if self.app.loading {
                "Loading..."
            } else {
                "No disaster-related tweets available."
            };
            buf.set_string(
                list_area.x + 1,
                list_area.y,
                msg,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let content_width = list_area.width.saturating_sub(1); // 1 char left margin
        let available_height = list_area.height;

        // Pre-compute heights for each card (including separator).
        let heights: Vec<u16> = self
            .app
            .tweets
            .iter()
            .map(|t| tweet_card_height(t, content_width) + 1)
            .collect();

        let scroll_start =
            compute_scroll_start(&heights, self.app.selected_index, available_height);

        // Render from scroll_start
        let mut y = list_area.y;
        let mut idx = scroll_start;
        while idx < self.app.tweets.len() && y < list_area.y + list_area.height {
            let tweet = &self.app.tweets[idx];
            let card_h = heights[idx];
            let remaining = list_area.y + list_area.height - y;
            let render_h = card_h.min(remaining);

            let card_area = Rect::new(list_area.x + 1, y, content_width, render_h.saturating_sub(1));

            TweetCard::new(tweet)
                .selected(idx == self.app.selected_index)
                .render(card_area, buf);

            y += render_h;

            // Draw separator line
            if y < list_area.y + list_area.height && idx + 1 < self.app.tweets.len() {
                let sep = "\u{2500}".repeat(content_width as usize);
                buf.set_string(
                    list_area.x + 1,
                    y.saturating_sub(1),
                    &sep,
                    Style::default().fg(Color::DarkGray),
                );
            }

            idx += 1;
        }
    }
}

/// Find the smallest scroll start index so that the selected item fits
/// within the available height.
fn compute_scroll_start(heights: &[u16], selected: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }

    let selected = selected.min(heights.len() - 1);
    if available == 0 {
        return selected;
    }

    // Build a viewport that always includes the selected card and packs as
    // many previous items as can fit above it.
    let mut start = selected;
    let mut used = heights[selected];

    while start > 0 {
        let next = used.saturating_add(heights[start - 1]);
        if next > available {
            break;
        }
        start -= 1;
        used = next;
    }

    start
}

#[cfg(test)]
mod tests {
    use super::compute_scroll_start;

    #[test]
    fn handles_empty_list() {
        assert_eq!(compute_scroll_start(&[], 0, 10), 0);
    }

    #[test]
    fn advances_when_selected_is_below_exactly_full_window() {
        // First two items exactly fill the viewport; selecting index 2 should
        // move the viewport start to 1 instead of looping.
        let heights = [5, 5, 5];
        assert_eq!(compute_scroll_start(&heights, 2, 10), 1);
    }

    #[test]
    fn keeps_selected_card_visible_when_it_is_taller_than_viewport() {
        let heights = [3, 12, 4];
        assert_eq!(compute_scroll_start(&heights, 1, 8), 1);
    }

    #[test]
    fn clamps_selected_index_to_last_item() {
        let heights = [2, 2, 2];
        assert_eq!(compute_scroll_start(&heights, 99, 4), 1);
    }
}
