use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::api::types::ClassifiedTweet;

/// Renders a single classified tweet as a compact card.
///
/// Layout:
///   Tweet text (may wrap) ...
///   Category: flood  Location: Springfield
pub struct TweetCard<'a> {
    pub tweet: &'a ClassifiedTweet,
    pub selected: bool,
}

impl<'a> TweetCard<'a> {
    pub fn new(tweet: &'a ClassifiedTweet) -> Self {
        Self {
            tweet,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for TweetCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let text_style = if self.selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut y = area.y;
        let width = area.width as usize;
        let max_text_lines = area.height.saturating_sub(1).max(1) as usize; // reserve 1 line for meta

        for (i, line_text) in wrap_text(&self.tweet.text, width).into_iter().enumerate() {
            if i >= max_text_lines || y >= area.y + area.height {
                break;
            }
            buf.set_string(area.x, y, &line_text, text_style);
            y += 1;
        }

        if y >= area.y + area.height {
            return;
        }

        let meta_line = Line::from(vec![
            Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                &self.tweet.category,
                Style::default().fg(category_color(&self.tweet.category)),
            ),
            Span::raw("  "),
            Span::styled("Location: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.tweet.location_display(),
                Style::default().fg(Color::Cyan),
            ),
        ]);
        buf.set_line(area.x, y, &meta_line, area.width);
    }
}

/// Height in lines needed for a tweet card.
pub fn tweet_card_height(tweet: &ClassifiedTweet, width: u16) -> u16 {
    let text_lines = wrap_text(&tweet.text, width as usize).len() as u16;
    // text + meta
    text_lines + 1
}

fn category_color(category: &str) -> Color {
    match category {
        "fire" | "wildfire" => Color::Red,
        "flood" | "storm" | "hurricane" => Color::Blue,
        "earthquake" | "quake" => Color::Yellow,
        _ => Color::Green,
    }
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.width() + 1 + word.width() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet(text: &str) -> ClassifiedTweet {
        ClassifiedTweet {
            text: text.to_string(),
            category: "flood".to_string(),
            location: None,
        }
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, ["one two", "three", "four"]);
    }

    #[test]
    fn zero_width_yields_nothing() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn empty_text_still_occupies_a_line() {
        assert_eq!(wrap_text("", 10), [""]);
    }

    #[test]
    fn card_height_counts_text_plus_meta() {
        assert_eq!(tweet_card_height(&tweet("short"), 40), 2);
        assert_eq!(tweet_card_height(&tweet("one two three four"), 9), 4);
    }
}
