use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, warn};

use crate::models::Book;
use crate::service::BookServiceFacade;

use super::helpers::{centered_rect, key_hints, prompt_cursor_x};

/// Window title shown on the list block.
const APP_TITLE: &str = "Book Browsing Application";
/// Label of the refresh action bar.
const REFRESH_LABEL: &str = "Refresh Book List";
/// Rows reserved for the refresh bar at the top.
const REFRESH_BAR_HEIGHT: u16 = 3;
/// Rows reserved for the detail pane (borders plus two text lines).
const DETAILS_HEIGHT: u16 = 4;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

/// Input modes. `Normal` drives the list; `Finding` owns the keyboard while
/// the user types a title to look up.
enum Mode {
    Normal,
    Finding(FindState),
}

/// Title typed into the find prompt so far.
#[derive(Default)]
struct FindState {
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Browsing state: the displayed catalog, at most one selected entry, and the
/// text of the detail pane. With no selection the pane is always empty.
pub struct App<'a> {
    catalog: BookServiceFacade<'a>,
    books: &'a [Book],
    selected: Option<usize>,
    details: String,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Load the catalog and start with nothing selected.
    pub fn new(catalog: BookServiceFacade<'a>) -> Self {
        let books = catalog.get_available_books();
        debug!(count = books.len(), "catalog loaded");
        Self {
            catalog,
            books,
            selected: None,
            details: String::new(),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Books currently shown in the list.
    pub fn books(&self) -> &[Book] {
        self.books
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.and_then(|idx| self.books.get(idx))
    }

    /// Contents of the read-only detail pane.
    pub fn detail_text(&self) -> &str {
        &self.details
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    pub fn is_finding(&self) -> bool {
        matches!(self.mode, Mode::Finding(_))
    }

    /// Apply a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Finding(state) => self.handle_find(code, state)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => *exit = true,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Home => self.select_index(0),
            KeyCode::End => {
                if let Some(last) = self.books.len().checked_sub(1) {
                    self.select_index(last);
                }
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.clear_selection();
                self.clear_status();
            }
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => self.refresh(),
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.clear_status();
                return Ok(Mode::Finding(FindState::default()));
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_find(&mut self, code: KeyCode, mut state: FindState) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Find cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                self.find_title(state.query.trim());
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => state.query.push(ch),
            _ => {}
        }
        Ok(Mode::Finding(state))
    }

    /// Re-fetch the catalog and replace the list. Any selection refers to the
    /// old list, so it is dropped along with the detail text.
    pub fn refresh(&mut self) {
        self.books = self.catalog.get_available_books();
        self.clear_selection();
        debug!(count = self.books.len(), "catalog refreshed");
        let message = match self.books.len() {
            1 => "Loaded 1 book.".to_string(),
            count => format!("Loaded {count} books."),
        };
        self.set_status(message, StatusKind::Info);
    }

    /// Select the entry at `index` and show its details. Out-of-range
    /// indexes are ignored.
    pub fn select_index(&mut self, index: usize) {
        if let Some(book) = self.books.get(index) {
            self.selected = Some(index);
            self.details = book.detail_text();
        }
    }

    /// Return to the no-selection state.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.details.clear();
    }

    /// Look a title up through the catalog and select the matching entry. A
    /// miss leaves nothing selected and the detail pane empty.
    pub fn find_title(&mut self, title: &str) {
        let found = self
            .catalog
            .get_book_details(title)
            .and_then(|book| self.books.iter().position(|candidate| candidate == book));

        match found {
            Some(index) => {
                self.select_index(index);
                let message = format!("Selected {}.", self.books[index].title());
                self.set_status(message, StatusKind::Info);
            }
            None => {
                warn!(title, "no book with that title");
                self.clear_selection();
                self.set_status(format!("No book titled \"{title}\"."), StatusKind::Error);
            }
        }
    }

    fn move_selection(&mut self, offset: isize) {
        if self.books.is_empty() {
            return;
        }
        let last = self.books.len() - 1;
        let next = match self.selected {
            None if offset >= 0 => 0,
            None => last,
            Some(current) => (current as isize + offset).clamp(0, last as isize) as usize,
        };
        self.select_index(next);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(REFRESH_BAR_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(DETAILS_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_refresh_bar(frame, chunks[0]);
        self.draw_book_list(frame, chunks[1]);
        self.draw_details(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);

        if let Mode::Finding(state) = &self.mode {
            self.draw_find_prompt(frame, area, state);
        }
    }

    fn draw_refresh_bar(&self, frame: &mut Frame, area: Rect) {
        let button = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("[ {REFRESH_LABEL} ]"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  press "),
            Span::styled("r", Style::default().fg(Color::Cyan)),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, area);
    }

    fn draw_book_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(APP_TITLE);

        if self.books.is_empty() {
            let message = Paragraph::new("No books in the catalog.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = self
            .books
            .iter()
            .map(|book| ListItem::new(book.to_string()))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect) {
        let details = Paragraph::new(self.details.as_str())
            .block(Block::default().borders(Borders::ALL).title("Details"))
            .wrap(Wrap { trim: false });
        frame.render_widget(details, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match self.mode {
            Mode::Finding(_) => key_hints(&[("[Enter]", "Find"), ("[Esc]", "Cancel")]),
            Mode::Normal => key_hints(&[
                ("[↑↓]", "Select"),
                ("[Esc]", "Clear"),
                ("[r]", "Refresh"),
                ("[/]", "Find"),
                ("[q]", "Quit"),
            ]),
        }
    }

    fn draw_find_prompt(&self, frame: &mut Frame, area: Rect, state: &FindState) {
        let popup = centered_rect(60, 20, area);
        let popup_area = Rect {
            height: popup.height.max(3).min(area.height),
            ..popup
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Find Book");
        let paragraph = Paragraph::new(Span::raw(format!("Title: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        frame.set_cursor_position((prompt_cursor_x(inner, "Title: ", &state.query), inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryBookRepository;
    use crate::service::CatalogService;
    use pretty_assertions::assert_eq;

    fn seeded() -> CatalogService {
        CatalogService::new(Box::new(InMemoryBookRepository::new()))
    }

    #[test]
    fn starts_without_selection() {
        let service = seeded();
        let app = App::new(BookServiceFacade::new(&service));
        assert_eq!(app.books().len(), 3);
        assert!(app.selected_book().is_none());
        assert_eq!(app.detail_text(), "");
    }

    #[test]
    fn down_selects_first_then_clamps_at_the_end() {
        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));

        app.handle_key(KeyCode::Down).unwrap();
        assert_eq!(app.selected_book().unwrap().title(), "Java Programming");

        for _ in 0..5 {
            app.handle_key(KeyCode::Down).unwrap();
        }
        assert_eq!(app.selected_book().unwrap().title(), "Web Development");
    }

    #[test]
    fn up_without_selection_picks_the_last_entry() {
        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));
        app.handle_key(KeyCode::Up).unwrap();
        assert_eq!(app.selected_book().unwrap().title(), "Web Development");
    }

    #[test]
    fn esc_clears_selection_and_details() {
        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));
        app.select_index(1);
        assert_eq!(
            app.detail_text(),
            "Title: Data Structures\nDetails: An in-depth guide to data structures."
        );

        app.handle_key(KeyCode::Esc).unwrap();
        assert!(app.selected_book().is_none());
        assert_eq!(app.detail_text(), "");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));
        app.select_index(7);
        assert!(app.selected_book().is_none());
    }

    #[test]
    fn find_prompt_selects_matching_title() {
        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));

        app.handle_key(KeyCode::Char('/')).unwrap();
        assert!(app.is_finding());
        for ch in "web development".chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(!app.is_finding());
        assert_eq!(app.selected_book().unwrap().title(), "Web Development");
        assert_eq!(app.status_text(), Some("Selected Web Development."));
    }

    #[test]
    fn find_miss_leaves_neutral_state() {
        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));
        app.select_index(0);

        app.find_title("nonexistent");
        assert!(app.selected_book().is_none());
        assert_eq!(app.detail_text(), "");
        assert_eq!(app.status_text(), Some("No book titled \"nonexistent\"."));
    }

    #[test]
    fn quit_key_requests_exit() {
        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));
        assert!(!app.handle_key(KeyCode::Char('x')).unwrap());
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn typing_q_in_the_find_prompt_does_not_quit() {
        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));
        app.handle_key(KeyCode::Char('f')).unwrap();
        assert!(!app.handle_key(KeyCode::Char('q')).unwrap());
        assert!(app.is_finding());
    }

    #[test]
    fn very_long_find_query_still_renders() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let service = seeded();
        let mut app = App::new(BookServiceFacade::new(&service));
        app.handle_key(KeyCode::Char('/')).unwrap();
        for _ in 0..70_000 {
            app.handle_key(KeyCode::Char('x')).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        assert!(app.is_finding());
    }

    #[test]
    fn empty_catalog_ignores_navigation() {
        let service = CatalogService::new(Box::new(InMemoryBookRepository::with_books(Vec::new())));
        let mut app = App::new(BookServiceFacade::new(&service));
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::End).unwrap();
        assert!(app.selected_book().is_none());
        app.refresh();
        assert_eq!(app.status_text(), Some("Loaded 0 books."));
    }
}
