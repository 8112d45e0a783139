//! Crossterm-backed display sink and input source

use crate::engine::controller::{ControlEvent, InputSource};
use crate::engine::presenter::DisplaySink;
use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Terminal display sink. Takes over the terminal on construction
/// (alternate screen, hidden cursor, raw mode) and restores it on drop.
pub struct TerminalDisplay {
    stdout: Stdout,
}

impl TerminalDisplay {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode().context("Failed to enable terminal raw mode")?;
        execute!(stdout, EnterAlternateScreen, Hide)
            .context("Failed to initialize terminal display")?;
        Ok(Self { stdout })
    }
}

impl DisplaySink for TerminalDisplay {
    fn present(&mut self, frame: &str) -> Result<()> {
        queue!(self.stdout, MoveTo(0, 0))?;
        // Raw mode disables newline translation; move explicitly per line.
        for line in frame.lines() {
            queue!(self.stdout, Print(line), MoveToNextLine(1))?;
        }
        self.stdout.flush().context("Failed to flush frame to terminal")?;
        Ok(())
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Terminal keyboard input source.
///
/// Key map: Up / `+` / `k` speed up, Down / `-` / `j` speed down,
/// `q` / Esc / Ctrl-C quit.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<ControlEvent>> {
        if !event::poll(timeout).context("Failed to poll terminal input")? {
            return Ok(None);
        }

        let Event::Key(key) = event::read().context("Failed to read terminal input")? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        let event = match key.code {
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => Some(ControlEvent::SpeedUp),
            KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => {
                Some(ControlEvent::SpeedDown)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(ControlEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(ControlEvent::Quit)
            }
            _ => None,
        };
        Ok(event)
    }
}
