use std::collections::HashMap;
use std::mem;

use crossterm::event::KeyCode;
use log::debug;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::Config;
use crate::filter::{filter_movies, genre_options, GenreSelector};
use crate::models::{MovieId, MovieRecord};
use crate::poster::{Poster, PosterLoader, PosterStatus};

use super::card::MovieCard;
use super::genre::{GenreDropdown, GenreFilter};
use super::theme;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Header: title row plus the bordered search/genre controls.
const HEADER_HEIGHT: u16 = 6;
const SEARCH_PLACEHOLDER: &str = "Search for a movie...";
const SEARCH_PREFIX: &str = " ";
const EMPTY_MESSAGE: &str = "No movies found.";
const APP_TITLE: &str = "Movie Browser";

/// Which input currently receives keystrokes.
enum Mode {
    Normal,
    Searching,
    SelectingGenre(GenreDropdown),
}

/// Regions computed for one frame.
struct FrameLayout {
    header: Rect,
    title: Rect,
    search: Rect,
    genre: Rect,
    grid: Rect,
    footer: Option<Rect>,
}

/// Owns the interaction state and derives everything else from it on demand.
pub struct App {
    config: Config,
    movies: &'static [MovieRecord],
    search_text: String,
    selected_genre: GenreSelector,
    /// Cursor into the filtered view.
    selected: usize,
    posters: HashMap<MovieId, Poster>,
    loader: Box<dyn PosterLoader>,
    mode: Mode,
    status: Option<String>,
}

impl App {
    pub fn new(
        config: Config,
        movies: &'static [MovieRecord],
        loader: Box<dyn PosterLoader>,
    ) -> Self {
        let placeholder = config.placeholder_uri();
        let posters = movies
            .iter()
            .map(|movie| (movie.id, Poster::new(movie.poster_url.clone(), placeholder.clone())))
            .collect();
        Self {
            config,
            movies,
            search_text: String::new(),
            selected_genre: GenreSelector::All,
            selected: 0,
            posters,
            loader,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_genre(&self) -> &GenreSelector {
        &self.selected_genre
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, Mode::Searching)
    }

    pub fn is_selecting_genre(&self) -> bool {
        matches!(self.mode, Mode::SelectingGenre(_))
    }

    pub fn poster(&self, id: MovieId) -> Option<&Poster> {
        self.posters.get(&id)
    }

    /// Records matching the current search text and genre, in catalog order.
    pub fn visible_movies(&self) -> Vec<&'static MovieRecord> {
        filter_movies(self.movies, &self.search_text, &self.selected_genre)
    }

    pub fn genre_options(&self) -> Vec<String> {
        genre_options(self.movies)
    }

    pub fn current_movie(&self) -> Option<&'static MovieRecord> {
        self.visible_movies().get(self.selected).copied()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        debug!("search text changed to {:?}", self.search_text);
        self.ensure_in_bounds();
    }

    /// Update the selected genre from an option label. This is the callback
    /// handed to the genre dropdown.
    pub fn set_selected_genre(&mut self, label: &str) {
        self.selected_genre = GenreSelector::from_option(label);
        debug!("genre changed to {}", self.selected_genre);
        self.ensure_in_bounds();
        let count = self.visible_movies().len();
        self.status = Some(if self.selected_genre.is_all() {
            format!("Showing all genres ({count} movies).")
        } else {
            format!("Showing {} ({count} movies).", self.selected_genre)
        });
    }

    pub fn reset_filters(&mut self) {
        self.search_text.clear();
        self.selected_genre = GenreSelector::All;
        self.selected = 0;
        self.status = Some("Filters cleared.".to_string());
        debug!("filters reset");
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Searching => self.handle_search_key(code),
            Mode::SelectingGenre(dropdown) => self.handle_genre_key(code, dropdown),
        };

        exit
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                *exit = true;
            }
            KeyCode::Left => self.move_horizontal(-1),
            KeyCode::Right => self.move_horizontal(1),
            KeyCode::Up => self.move_vertical(-1),
            KeyCode::Down => self.move_vertical(1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.visible_movies().len().saturating_sub(1),
            KeyCode::Enter => self.open_selected_poster(),
            KeyCode::Char('/') => {
                self.status = None;
                return Mode::Searching;
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                self.status = None;
                let options = self.genre_options();
                return Mode::SelectingGenre(GenreDropdown::open(&options, &self.selected_genre));
            }
            KeyCode::Esc => {
                if !self.search_text.is_empty() || !self.selected_genre.is_all() {
                    self.reset_filters();
                }
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_search_key(&mut self, code: KeyCode) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Enter => return Mode::Normal,
            KeyCode::Up => self.move_vertical(-1),
            KeyCode::Down => self.move_vertical(1),
            KeyCode::Backspace => {
                let mut text = self.search_text.clone();
                if text.pop().is_some() {
                    self.set_search_text(text);
                }
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                let mut text = self.search_text.clone();
                text.push(ch);
                self.set_search_text(text);
            }
            _ => {}
        }
        Mode::Searching
    }

    fn handle_genre_key(&mut self, code: KeyCode, mut dropdown: GenreDropdown) -> Mode {
        let options = self.genre_options();
        let still_open =
            dropdown.handle_key(code, &options, |genre| self.set_selected_genre(genre));
        if still_open {
            Mode::SelectingGenre(dropdown)
        } else {
            Mode::Normal
        }
    }

    /// Hand the selected card's poster to the loader. A failure swaps in the
    /// placeholder silently.
    pub fn open_selected_poster(&mut self) {
        let Some(movie) = self.current_movie() else {
            return;
        };
        let Some(poster) = self.posters.get_mut(&movie.id) else {
            return;
        };
        match poster.load_with(self.loader.as_mut()) {
            PosterStatus::Loaded => {
                self.status = Some(format!("Opened poster for {movie}."));
            }
            status => debug!("poster for {movie} is now {status:?}"),
        }
    }

    fn ensure_in_bounds(&mut self) {
        let len = self.visible_movies().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn move_horizontal(&mut self, offset: isize) {
        let len = self.visible_movies().len() as isize;
        let new_index = self.selected as isize + offset;
        if (0..len).contains(&new_index) {
            self.selected = new_index as usize;
        }
    }

    fn move_vertical(&mut self, offset: isize) {
        let len = self.visible_movies().len() as isize;
        let cols = self.columns() as isize;
        let new_index = self.selected as isize + offset * cols;
        if (0..len).contains(&new_index) {
            self.selected = new_index as usize;
        }
    }

    fn columns(&self) -> usize {
        self.config.grid_columns.max(1)
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let layout = self.layout(area);
        self.draw_header(frame, &layout);
        self.draw_movie_grid(frame, layout.grid);
        if let Some(footer) = layout.footer {
            self.draw_footer(frame, footer);
        }

        match &self.mode {
            Mode::SelectingGenre(dropdown) => {
                dropdown.render(frame, layout.genre, &self.genre_options())
            }
            Mode::Searching => {
                let cursor_x = layout.search.x
                    + 1
                    + SEARCH_PREFIX.len() as u16
                    + self.search_text.chars().count() as u16;
                let max_x = layout.search.right().saturating_sub(2);
                frame.set_cursor_position((cursor_x.min(max_x), layout.search.y + 1));
            }
            Mode::Normal => {}
        }
    }

    fn layout(&self, area: Rect) -> FrameLayout {
        let footer_height = if area.height > HEADER_HEIGHT + FOOTER_HEIGHT {
            FOOTER_HEIGHT
        } else {
            0
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT.min(area.height)),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(area);

        let header_inner = Block::default().borders(Borders::ALL).inner(rows[0]);
        let header_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)])
            .split(header_inner);
        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(header_rows[1]);

        FrameLayout {
            header: rows[0],
            title: header_rows[0],
            search: controls[0],
            genre: controls[1],
            grid: rows[1],
            footer: (footer_height > 0).then(|| rows[2]),
        }
    }

    fn draw_header(&self, frame: &mut Frame, layout: &FrameLayout) {
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(false))
                .style(Style::default().bg(theme::CARD_BACKGROUND)),
            layout.header,
        );

        let title = Paragraph::new(Span::styled(APP_TITLE, theme::heading()))
            .alignment(Alignment::Center);
        frame.render_widget(title, layout.title);

        let searching = self.is_searching();
        let search_line = if self.search_text.is_empty() && !searching {
            Line::from(vec![
                Span::raw(SEARCH_PREFIX),
                Span::styled(SEARCH_PLACEHOLDER, theme::secondary().add_modifier(Modifier::ITALIC)),
            ])
        } else {
            Line::from(vec![
                Span::raw(SEARCH_PREFIX),
                Span::styled(self.search_text.clone(), theme::input()),
            ])
        };
        let search = Paragraph::new(search_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(searching))
                .title("[/] Search"),
        );
        frame.render_widget(search, layout.search);

        frame.render_widget(
            GenreFilter::new(&self.selected_genre, self.is_selecting_genre()),
            layout.genre,
        );
    }

    fn draw_movie_grid(&self, frame: &mut Frame, area: Rect) {
        let movies = self.visible_movies();
        if movies.is_empty() {
            let message = Paragraph::new(Span::styled(EMPTY_MESSAGE, theme::secondary()))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            let centered = Rect {
                y: area.y + area.height / 3,
                height: area.height.min(1),
                ..area
            };
            frame.render_widget(message, centered);
            return;
        }

        let columns = self.columns();
        let card_height = self.config.card_height.max(1);
        let visible_rows = (area.height / card_height).max(1) as usize;
        let selected_row = self.selected / columns;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        let mut row_constraints = vec![Constraint::Length(card_height); visible_rows];
        row_constraints.push(Constraint::Min(0));
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);
        let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

        for (row_offset, row_area) in row_areas.iter().take(visible_rows).enumerate() {
            let row = first_row + row_offset;
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(column_constraints.clone())
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = row * columns + col;
                let Some(movie) = movies.get(index) else {
                    continue;
                };
                let Some(poster) = self.posters.get(&movie.id) else {
                    continue;
                };
                let card = MovieCard::new(movie, poster, &self.config.placeholder.label)
                    .selected(index == self.selected);
                frame.render_widget(card, *cell);
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme::border(false));
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let count = self.visible_movies().len();
        let status_line = match &self.status {
            Some(text) => Line::from(Span::styled(text.clone(), Style::default().fg(theme::PRIMARY))),
            None => Line::from(Span::styled(
                format!("{count} of {} movies", self.movies.len()),
                theme::secondary(),
            )),
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = theme::key_hint();
        match &self.mode {
            Mode::Searching => Line::from(vec![
                Span::styled("[type]", key_style),
                Span::raw(" Search   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Move   "),
                Span::styled("[Enter/Esc]", key_style),
                Span::raw(" Done"),
            ]),
            Mode::SelectingGenre(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[←↑↓→]", key_style),
                Span::raw(" Move   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Poster   "),
                Span::styled("[/]", key_style),
                Span::raw(" Search   "),
                Span::styled("[g]", key_style),
                Span::raw(" Genre   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::catalog::catalog;
    use crate::poster::tests::{FailingLoader, RecordingLoader};

    fn app_with(loader: Box<dyn PosterLoader>) -> App {
        App::new(Config::default(), catalog(), loader)
    }

    fn app() -> App {
        app_with(Box::new(RecordingLoader::default()))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch));
        }
    }

    fn titles(app: &App) -> Vec<&'static str> {
        app.visible_movies()
            .into_iter()
            .map(|movie| movie.title.as_str())
            .collect()
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn starts_with_defaults() {
        let app = app();
        assert_eq!(app.search_text(), "");
        assert_eq!(app.selected_genre(), &GenreSelector::All);
        assert_eq!(app.visible_movies().len(), 8);
        assert_eq!(
            app.genre_options(),
            vec!["All", "Sci-Fi", "Action", "Drama", "Comedy"]
        );
    }

    #[test]
    fn typing_refilters_immediately() {
        let mut app = app();
        app.handle_key(KeyCode::Char('/'));
        assert!(app.is_searching());
        type_text(&mut app, "inter");
        assert_eq!(app.search_text(), "inter");
        assert_eq!(titles(&app), vec!["Interstellar"]);

        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.search_text(), "inte");
        app.handle_key(KeyCode::Enter);
        assert!(!app.is_searching());
        assert_eq!(app.search_text(), "inte");
    }

    #[test]
    fn q_is_text_while_searching() {
        let mut app = app();
        app.handle_key(KeyCode::Char('/'));
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert_eq!(app.search_text(), "q");
        app.handle_key(KeyCode::Esc);
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn dropdown_reports_genre_to_app() {
        let mut app = app();
        app.handle_key(KeyCode::Char('g'));
        assert!(app.is_selecting_genre());
        // All -> Sci-Fi -> Action -> Drama -> Comedy
        for _ in 0..4 {
            app.handle_key(KeyCode::Down);
        }
        app.handle_key(KeyCode::Enter);
        assert!(!app.is_selecting_genre());
        assert_eq!(app.selected_genre(), &GenreSelector::Genre("Comedy".into()));
        assert_eq!(titles(&app), vec!["The Grand Budapest Hotel", "Knives Out"]);
    }

    #[test]
    fn dropdown_escape_keeps_genre() {
        let mut app = app();
        app.set_selected_genre("Drama");
        app.handle_key(KeyCode::Char('g'));
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.selected_genre(), &GenreSelector::Genre("Drama".into()));
    }

    #[test]
    fn cursor_is_clamped_after_filtering() {
        let mut app = app();
        app.handle_key(KeyCode::End);
        assert_eq!(app.selected_index(), 7);
        app.set_selected_genre("Drama");
        assert_eq!(app.selected_index(), 1);
        assert_eq!(app.current_movie().map(|m| m.title.as_str()), Some("Joker"));
        app.set_search_text("zzz");
        assert_eq!(app.selected_index(), 0);
        assert!(app.current_movie().is_none());
    }

    #[test]
    fn grid_navigation_moves_by_rows() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_index(), 5);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_index(), 5);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_index(), 0);
    }

    #[test]
    fn escape_resets_filters() {
        let mut app = app();
        app.set_search_text("the");
        app.set_selected_genre("Action");
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.search_text(), "");
        assert!(app.selected_genre().is_all());
        assert_eq!(app.visible_movies().len(), 8);
    }

    #[test]
    fn failing_poster_is_substituted_once() {
        let mut app = app_with(Box::new(FailingLoader::default()));
        let id = catalog()[0].id;
        for _ in 0..3 {
            app.handle_key(KeyCode::Enter);
        }
        let poster = app.poster(id).unwrap();
        assert_eq!(poster.substitutions(), 1);
        assert_eq!(poster.source(), "https://placehold.co/300x450/333/FFF?text=Not+Found");
        assert_eq!(poster.status(), PosterStatus::Settled);
        // Other cards are untouched and no error reached the status line.
        assert_eq!(app.poster(catalog()[1].id).unwrap().status(), PosterStatus::Pending);
        assert!(app.status.is_none());
    }

    #[test]
    fn successful_poster_sets_status() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.poster(catalog()[0].id).unwrap().status(),
            PosterStatus::Loaded
        );
        assert_eq!(app.status.as_deref(), Some("Opened poster for Inception (2010)."));
    }

    #[test]
    fn renders_cards_and_controls() {
        let app = app();
        let screen = render(&app);
        assert!(screen.contains("Movie Browser"));
        assert!(screen.contains("Search for a movie..."));
        assert!(screen.contains("Filter by Genre:"));
        assert!(screen.contains("Inception"));
        assert!(screen.contains("(2010)"));
        assert!(!screen.contains("No movies found."));
    }

    #[test]
    fn renders_empty_state() {
        let mut app = app();
        app.set_search_text("zzz");
        let screen = render(&app);
        assert!(screen.contains("No movies found."));
        assert!(!screen.contains("Inception"));
    }

    #[test]
    fn renders_placeholder_after_failure() {
        let mut app = app_with(Box::new(FailingLoader::default()));
        app.handle_key(KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Not Found"));
    }

    #[test]
    fn renders_open_dropdown() {
        let mut app = app();
        app.handle_key(KeyCode::Char('g'));
        let screen = render(&app);
        assert!(screen.contains("Comedy"));
        assert!(screen.contains("Sci-Fi"));
    }
}
