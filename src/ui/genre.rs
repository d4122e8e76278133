//! Genre selection control. The selected value always belongs to `App`; this
//! module only renders it and reports a new choice through a callback.

use crossterm::event::KeyCode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Widget};
use ratatui::Frame;

use crate::filter::GenreSelector;

use super::helpers::dropdown_rect;
use super::theme;

pub(crate) const GENRE_LABEL: &str = "Filter by Genre: ";

/// The closed control as shown in the header.
pub(crate) struct GenreFilter<'a> {
    selected: &'a GenreSelector,
    focused: bool,
}

impl<'a> GenreFilter<'a> {
    pub(crate) fn new(selected: &'a GenreSelector, focused: bool) -> Self {
        Self { selected, focused }
    }
}

impl Widget for GenreFilter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(GENRE_LABEL, theme::secondary()),
            Span::styled(
                format!(" {} ▾ ", self.selected),
                theme::input().add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::border(self.focused))
                    .title("[g] Genre"),
            )
            .render(area, buf);
    }
}

/// Open dropdown. Holds only which option is highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenreDropdown {
    highlighted: usize,
}

impl GenreDropdown {
    /// Open with the current selection highlighted, or the first option when
    /// it is not in the list.
    pub(crate) fn open(options: &[String], selected: &GenreSelector) -> Self {
        let highlighted = options
            .iter()
            .position(|option| option == selected.label())
            .unwrap_or(0);
        Self { highlighted }
    }

    pub(crate) fn highlighted(&self) -> usize {
        self.highlighted
    }

    fn move_highlight(&mut self, offset: isize, len: usize) {
        if len == 0 {
            return;
        }
        let new = (self.highlighted as isize + offset).clamp(0, len as isize - 1);
        self.highlighted = new as usize;
    }

    /// Handle a key while the dropdown is open. `on_change` receives the chosen
    /// option on `Enter`. Returns whether the dropdown stays open.
    pub(crate) fn handle_key(
        &mut self,
        code: KeyCode,
        options: &[String],
        on_change: impl FnOnce(&str),
    ) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_highlight(-1, options.len()),
            KeyCode::Down | KeyCode::Char('j') => self.move_highlight(1, options.len()),
            KeyCode::Home => self.highlighted = 0,
            KeyCode::End => self.highlighted = options.len().saturating_sub(1),
            KeyCode::Enter => {
                if let Some(option) = options.get(self.highlighted) {
                    on_change(option);
                }
                return false;
            }
            KeyCode::Esc | KeyCode::Char('g') => return false,
            _ => {}
        }
        true
    }

    /// Draw the option list directly below `anchor`.
    pub(crate) fn render(&self, frame: &mut Frame, anchor: Rect, options: &[String]) {
        let height = options.len() as u16 + 2;
        let area = dropdown_rect(anchor, height, frame.area());
        if area.height == 0 {
            return;
        }
        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = options
            .iter()
            .map(|option| ListItem::new(option.clone()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::border(true))
                    .style(theme::base()),
            )
            .highlight_style(
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(self.highlighted()));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
