//! Main TUI application state and logic

use crate::session::{Outcome, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Transcript,
    Tokens,
    Trace,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: transcript -> tokens -> trace)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Transcript => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Transcript,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Transcript => FocusedPane::Trace,
            FocusedPane::Tokens => FocusedPane::Transcript,
            FocusedPane::Trace => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    pub session: Session,

    /// Line being edited
    pub input: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub transcript_scroll: usize,
    pub tokens_scroll: usize,
    pub trace_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the last submitted line was rejected
    pub last_failed: bool,
}

impl App {
    pub fn new(mut session: Session) -> Self {
        // The reduction pane shows the trace of every line
        session.record_traces(true);
        App {
            session,
            input: String::new(),
            focused_pane: FocusedPane::Transcript,
            transcript_scroll: 0,
            tokens_scroll: 0,
            trace_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_failed: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Transcript (top) | Input (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(columns[0]);

        // Right column: Tokens (top) | Reduction (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        super::panes::render_transcript_pane(
            frame,
            left_rows[0],
            self.session.transcript(),
            self.focused_pane == FocusedPane::Transcript,
            &mut self.transcript_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            self.session.last(),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_trace_pane(
            frame,
            right_rows[1],
            self.session.last(),
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        let (evaluated, rejected) = self.session.counts();
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            evaluated,
            rejected,
            self.last_failed,
        );

        // Last so the cursor ends up in the input box
        super::panes::render_input_pane(
            frame,
            left_rows[1],
            &self.session.config().prompt,
            &self.input,
            self.session.config().max_line_len,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
            }
            KeyCode::Char(c) => {
                if self.input.chars().count() < self.session.config().max_line_len {
                    self.input.push(c);
                } else {
                    self.status_message = "Line limit reached".to_string();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Transcript => &mut self.transcript_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Trace => &mut self.trace_scroll,
        }
    }

    /// Submit the input line to the session
    fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);

        match self.session.submit(&line) {
            Outcome::Quit => {
                self.should_quit = true;
            }
            Outcome::Empty => {}
            Outcome::Evaluated(evaluation) => {
                self.last_failed = false;
                self.status_message = format!("{} folds", evaluation.tokens.len() - 1);
                self.tokens_scroll = 0;
                self.trace_scroll = 0;
            }
            Outcome::Rejected(err) => {
                self.last_failed = true;
                self.status_message = format!("Error: {}", err);
            }
        }

        // Auto-scroll transcript to bottom
        self.transcript_scroll = usize::MAX;
    }
}
