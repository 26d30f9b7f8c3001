//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::MAX_GUESSES;
use crate::output::display::{QWERTY_ROWS, keyboard_states};
use crate::output::{
    AnsiRenderer, EmojiRenderer, RenderStyle, TileRenderer, format_hints, format_stats,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

/// `TileRenderer` counterpart producing ratatui spans
///
/// ANSI escapes cannot go through a ratatui buffer, so colored output is
/// expressed as span styles; glyph-only renderers reuse their text.
pub trait SpanRenderer: TileRenderer {
    fn tile_span(&self, letter: u8, status: LetterStatus) -> Span<'static>;

    fn key_span(&self, letter: u8, status: Option<LetterStatus>) -> Span<'static>;
}

impl SpanRenderer for AnsiRenderer {
    fn tile_span(&self, letter: u8, status: LetterStatus) -> Span<'static> {
        Span::styled(
            format!(" {} ", char::from(letter)),
            Style::default()
                .fg(Color::White)
                .bg(status_color(status))
                .add_modifier(Modifier::BOLD),
        )
    }

    fn key_span(&self, letter: u8, status: Option<LetterStatus>) -> Span<'static> {
        let label = format!("{} ", char::from(letter));
        match status {
            Some(status) => Span::styled(
                label,
                Style::default()
                    .fg(status_color(status))
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::raw(label),
        }
    }
}

impl SpanRenderer for EmojiRenderer {
    fn tile_span(&self, letter: u8, status: LetterStatus) -> Span<'static> {
        Span::raw(format!("{} ", self.render_tile(letter, status)))
    }

    fn key_span(&self, letter: u8, status: Option<LetterStatus>) -> Span<'static> {
        Span::raw(format!("{} ", self.render_key(letter, status)))
    }
}

/// Span renderer for the configured style
pub fn span_renderer(style: RenderStyle) -> &'static dyn SpanRenderer {
    match style {
        RenderStyle::Ansi => &AnsiRenderer,
        RenderStyle::Emoji => &EmojiRenderer,
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut title = app.title.clone();
    if app.session.hard_mode() {
        title.push_str("  •  HARD");
    }

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let renderer = span_renderer(app.config.style);
    let guesses = app.session.guesses();
    let mut lines: Vec<Line> = guesses
        .iter()
        .map(|(_, result)| {
            let spans: Vec<Span> = result
                .tiles()
                .iter()
                .flat_map(|&(letter, status)| [renderer.tile_span(letter, status), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    // Row being typed, then blanks
    if !app.session.is_over() {
        let typed: String = (0..WORD_LENGTH)
            .map(|i| {
                let c = app.input_buffer.chars().nth(i).unwrap_or('_');
                format!("[{c}] ")
            })
            .collect();
        lines.push(Line::from(Span::styled(
            typed,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
    }
    while lines.len() < MAX_GUESSES {
        lines.push(Line::from(Span::styled(
            "[ ] ".repeat(WORD_LENGTH),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = if app.session.is_over() {
        " Board ".to_string()
    } else {
        format!(" Board ({} left) ", app.session.remaining())
    };
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // Messages
            Constraint::Min(4),    // Stats
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let renderer = span_renderer(app.config.style);
    let states = keyboard_states(app.session.guesses());
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|key| renderer.key_span(key, states.get(&key).copied()))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = Paragraph::new(format_stats(&app.stats)).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(stats, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.session.is_over() {
        (" Game over | n: new game  q: quit ", Color::Green)
    } else {
        (
            " Enter: submit | Backspace: delete | Esc: quit ",
            Color::Yellow,
        )
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hints = if app.session.hard_mode() && !app.session.is_over() {
        format_hints(app.session.constraint())
    } else {
        None
    };

    let (text, color) = match hints {
        Some(hints) => (hints, Color::Cyan),
        None => (
            "Green: right spot  •  Yellow: wrong spot  •  Gray: not in word".to_string(),
            Color::DarkGray,
        ),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Selection;
    use crate::stats::{StatsRecord, StatsStore};
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn ui_draws_board_and_keyboard() {
        let words = WordList::new(Vec::new(), words_from_slice(&["crane", "slate"])).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("stats.json"));
        let config = GameConfig {
            selection: Selection::Seeded(1),
            hard_mode: true,
            style: RenderStyle::Ansi,
        };
        let app = App::new(config, &words, &store, StatsRecord::default()).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Wordle-T (6) [seed 1]"));
        assert!(text.contains("HARD"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Statistics"));
    }

    #[test]
    fn emoji_tile_has_no_letter() {
        let span = span_renderer(RenderStyle::Emoji).tile_span(b'A', LetterStatus::Correct);
        assert_eq!(span.content, "🟩 ");
        let span = span_renderer(RenderStyle::Ansi).tile_span(b'A', LetterStatus::Correct);
        assert_eq!(span.content, " A ");
    }

    #[test]
    fn keyboard_follows_render_style() {
        let emoji = span_renderer(RenderStyle::Emoji);
        assert_eq!(emoji.key_span(b'Q', Some(LetterStatus::Present)).content, "🟨Q ");
        assert_eq!(emoji.key_span(b'Q', None).content, "Q ");

        let ansi = span_renderer(RenderStyle::Ansi).key_span(b'Q', Some(LetterStatus::Present));
        assert_eq!(ansi.content, "Q ");
        assert_eq!(ansi.style.fg, Some(Color::Yellow));
    }

    #[test]
    fn hard_mode_status_shows_hints() {
        let words = WordList::new(Vec::new(), words_from_slice(&["crane", "slate"])).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("stats.json"));
        let config = GameConfig {
            selection: Selection::Seeded(1),
            hard_mode: true,
            style: RenderStyle::Emoji,
        };
        let mut app = App::new(config, &words, &store, StatsRecord::default()).unwrap();
        let target = app.session.target().clone();
        let guess = if target.text() == "CRANE" { "slate" } else { "crane" };
        for c in guess.chars() {
            app.push_letter(c);
        }
        app.submit().unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Known:"));
        assert!(text.contains("5 left"));
    }
}
