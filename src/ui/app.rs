//! Main TUI application state and logic

use crate::algorithms::constants::SPEED_STEP_MS;
use crate::playback::{PlaybackController, PlaybackError};
use crate::snapshot::StepSequence;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Longest the event loop sleeps when no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// Playback of the loaded sequence
    pub controller: PlaybackController,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display; the controller's renderer callback writes
    /// the message of every step it shows
    pub status_message: Rc<RefCell<String>>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app replaying the given sequence
    pub fn new(sequence: StepSequence, interval_ms: u64) -> Self {
        let status_message = Rc::new(RefCell::new(String::from("Ready!")));
        let mut controller = PlaybackController::new();
        controller.set_speed(interval_ms);

        let sink = Rc::clone(&status_message);
        controller.set_renderer(move |_index, step| {
            *sink.borrow_mut() = step.message.clone();
        });
        controller.load(sequence);

        App {
            controller,
            should_quit: false,
            status_message,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.controller.poll();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Sleep until the next tick is due, or at most IDLE_POLL
            let timeout = self
                .controller
                .next_deadline()
                .map(|due| due.saturating_duration_since(Instant::now()))
                .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

            if event::poll(timeout)? {
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
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Array (left) | Details (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(main_chunks[0]);

        let step = self.controller.current_step();
        let info = self.controller.sequence().map(|s| s.algorithm().info());

        super::panes::render_bars_pane(frame, columns[0], step, self.controller.is_playing());
        super::panes::render_details_pane(frame, columns[1], info, step);

        let (index, state) = self.controller.position();
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message.borrow(),
            index,
            self.controller.len(),
            state,
            self.controller.interval_ms(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.controller.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    match self.controller.step_forward() {
                        Ok(true) => stepped += 1,
                        _ => break,
                    }
                }
                if stepped < n {
                    self.set_status(format!("Stepped forward {} step(s), at the end", stepped));
                }
            }
            KeyCode::Right => {
                self.controller.pause();
                let moved = self.controller.step_forward();
                self.report(moved, "Already at the last step");
            }
            KeyCode::Left => {
                self.controller.pause();
                let moved = self.controller.step_backward();
                self.report(moved, "Already at the first step");
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if let Err(e) = self.controller.toggle() {
                        self.set_status(e.to_string());
                    } else if self.controller.is_playing() {
                        self.set_status("Playing...".to_string());
                    } else {
                        self.set_status("Paused".to_string());
                    }
                }
            }
            KeyCode::Enter => {
                self.controller.pause();
                let moved = self.controller.jump_to_end();
                self.report(moved, "Already at the last step");
            }
            KeyCode::Backspace | KeyCode::Char('r') | KeyCode::Char('R') => {
                if let Err(e) = self.controller.reset() {
                    self.set_status(e.to_string());
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let faster = self.controller.interval_ms().saturating_sub(SPEED_STEP_MS);
                let applied = self.controller.set_speed(faster);
                self.set_status(format!("Interval {} ms", applied));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let slower = self.controller.interval_ms() + SPEED_STEP_MS;
                let applied = self.controller.set_speed(slower);
                self.set_status(format!("Interval {} ms", applied));
            }
            _ => {}
        }
    }

    fn report(&mut self, moved: Result<bool, PlaybackError>, at_edge: &str) {
        match moved {
            Ok(true) => {}
            Ok(false) => self.set_status(at_edge.to_string()),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    fn set_status(&mut self, message: String) {
        *self.status_message.borrow_mut() = message;
    }
}
