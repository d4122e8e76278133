//! A single movie card: poster panel on top, title and year below.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::models::MovieRecord;
use crate::poster::Poster;

use super::helpers::{center_in, repeat_pattern_row, truncate_str, uri_file_name};
use super::theme;

/// ASCII textures drawn behind the poster caption. Cards rotate through them
/// by movie id so neighbouring cards look different.
const POSTER_ART: &[&[&str]] = &[
    &["/\\/\\/", "\\/\\/\\"],
    &["*+*+", "+*+*"],
    &["=--=", "--=="],
    &["<>><", "><<>"],
    &["..--", "--.."],
    &["oOo ", " OoO"],
    &["##  ", "  ##"],
    &["||--", "--||"],
    &["~~  ", "  ~~"],
    &["^v^v", "v^v^"],
];

/// Rows under the poster panel: title and release year.
const INFO_ROWS: usize = 2;

pub(crate) struct MovieCard<'a> {
    movie: &'a MovieRecord,
    poster: &'a Poster,
    fallback_label: &'a str,
    selected: bool,
}

impl<'a> MovieCard<'a> {
    pub(crate) fn new(movie: &'a MovieRecord, poster: &'a Poster, fallback_label: &'a str) -> Self {
        Self {
            movie,
            poster,
            fallback_label,
            selected: false,
        }
    }

    pub(crate) fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Caption naming what the poster panel stands for.
    fn poster_caption(&self) -> String {
        if self.poster.is_placeholder() {
            self.fallback_label.to_string()
        } else {
            uri_file_name(self.poster.source()).to_string()
        }
    }

    /// Build the card's inner text for the given inner size.
    pub(crate) fn lines(&self, inner_width: u16, inner_height: u16) -> Vec<Line<'static>> {
        let width = inner_width as usize;
        let height = inner_height as usize;
        if width == 0 || height == 0 {
            return vec![Line::from("")];
        }

        let poster_height = height.saturating_sub(INFO_ROWS);
        let pattern = POSTER_ART[self.movie.id.0 as usize % POSTER_ART.len()];
        let pattern_style = if self.selected {
            Style::default().fg(theme::SECONDARY_TEXT)
        } else {
            Style::default().fg(theme::BORDER)
        };

        let captions = [
            format!("[ {} ]", self.movie.poster_alt()),
            self.poster_caption(),
        ];
        let caption_start = poster_height.saturating_sub(captions.len()) / 2;

        let mut lines = Vec::with_capacity(height);
        for row in 0..poster_height {
            let caption = row
                .checked_sub(caption_start)
                .and_then(|offset| captions.get(offset))
                .filter(|_| poster_height >= captions.len());
            match caption {
                Some(text) => lines.push(Line::from(Span::styled(
                    center_in(text, width),
                    Style::default().fg(theme::TEXT).bg(theme::CARD_BACKGROUND),
                ))),
                None => {
                    let base = pattern[row % pattern.len()];
                    lines.push(Line::from(Span::styled(
                        repeat_pattern_row(base, width),
                        pattern_style,
                    )));
                }
            }
        }

        let mut title_style = Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD);
        if self.selected {
            title_style = title_style.fg(theme::PRIMARY);
        }
        lines.push(Line::from(Span::styled(
            truncate_str(&self.movie.title, width),
            title_style,
        )));
        if height > 1 {
            lines.push(Line::from(Span::styled(
                format!("({})", self.movie.release_year),
                theme::secondary(),
            )));
        }

        lines
    }
}

impl Widget for MovieCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(self.selected))
            .style(Style::default().bg(theme::CARD_BACKGROUND));
        let inner = block.inner(area);
        let lines = self.lines(inner.width, inner.height);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
