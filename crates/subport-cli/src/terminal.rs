//! Terminal capability detection and raw-mode input.
//!
//! Colour detection decides whether log output carries ANSI codes; the masked
//! reader turns echo off through `crossterm` so a typed password never appears
//! on screen.

use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// Check if log output should carry ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
/// - Redirected stdout (pipes and files never get colour)
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    io::stdout().is_terminal()
}

/// Whether stdin is attached to an interactive terminal.
#[must_use]
pub fn stdin_is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Disables raw mode when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// What a single key press does to a masked input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaskedKey {
    Submit,
    Cancel,
    Erase,
    Insert(char),
    Ignore,
}

fn classify_key(key: &KeyEvent) -> MaskedKey {
    if key.kind != KeyEventKind::Press {
        return MaskedKey::Ignore;
    }
    match key.code {
        KeyCode::Enter => MaskedKey::Submit,
        KeyCode::Esc => MaskedKey::Cancel,
        KeyCode::Char('c') | KeyCode::Char('d')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            MaskedKey::Cancel
        }
        KeyCode::Backspace => MaskedKey::Erase,
        KeyCode::Char(c) => MaskedKey::Insert(c),
        _ => MaskedKey::Ignore,
    }
}

/// Read one line from the terminal without echoing it.
///
/// Backspace removes the last character. Esc, Ctrl-C and Ctrl-D cancel with
/// [`io::ErrorKind::Interrupted`].
pub fn read_masked_line() -> io::Result<String> {
    let mut buffer = String::new();
    {
        let _raw = RawModeGuard::enable()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match classify_key(&key) {
                MaskedKey::Submit => break,
                MaskedKey::Cancel => {
                    return Err(io::Error::new(
                        io::ErrorKind::Interrupted,
                        "password entry cancelled",
                    ))
                }
                MaskedKey::Erase => {
                    buffer.pop();
                }
                MaskedKey::Insert(c) => buffer.push(c),
                MaskedKey::Ignore => {}
            }
        }
    }

    let mut stdout = io::stdout();
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(buffer)
}
