//! The terminal user interface.
//!
//! Drives the controller on a timer and draws every generation.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifeloop_lib::{Controller, Presenter, Snapshot, Status, Tick};
use log::debug;
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// What the user asked for.
enum Action {
    Toggle,
    Step,
    Quit,
    ForceQuit,
    Redraw,
    Nothing,
}

impl From<Event> for Action {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(KeyEvent {
                code, modifiers, kind, ..
            }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Action::ForceQuit
                }
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Char(' ') | KeyCode::Enter => Action::Toggle,
                KeyCode::Right | KeyCode::Char('s') | KeyCode::Char('n') => Action::Step,
                _ => Action::Nothing,
            },
            Event::Resize(_, _) => Action::Redraw,
            _ => Action::Nothing,
        }
    }
}

/// The screen: a top bar, the world, and a bottom bar.
struct Screen<W: Write> {
    out: W,
    width: u16,
    height: u16,
    interval: Duration,
}

impl<W: Write> Screen<W> {
    fn new(out: W, interval: Duration) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Screen {
            out,
            width,
            height,
            interval,
        })
    }

    fn resize(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.width = width;
        self.height = height;
        queue!(self.out, Clear(ClearType::All))
    }

    /// Pads or cuts a line to the width of the terminal.
    fn fit(&self, line: &str) -> String {
        let width = self.width as usize;
        format!("{:<width$.width$}", line, width = width)
    }

    fn bar(&mut self, y: u16, text: &str) -> io::Result<()> {
        let line = self.fit(text);
        queue!(
            self.out,
            cursor::MoveTo(0, y),
            SetAttribute(Attribute::Reverse),
            Print(line),
            SetAttribute(Attribute::Reset)
        )
    }

    fn bottom_bar(&mut self, text: &str) -> io::Result<()> {
        self.bar(self.height.saturating_sub(1), text)
    }

    /// Asks whether to quit. Returns `true` if the user agrees.
    fn confirm_quit(&mut self) -> io::Result<bool> {
        self.bottom_bar("Are you sure to quit? [Y/n]")?;
        self.out.flush()?;
        loop {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind == KeyEventKind::Release {
                    continue;
                }
                return Ok(matches!(
                    code,
                    KeyCode::Char('Y') | KeyCode::Char('y') | KeyCode::Enter
                ));
            }
        }
    }
}

impl<W: Write> Presenter for Screen<W> {
    fn present(&mut self, snapshot: Snapshot<'_>, status: Status) -> io::Result<()> {
        let status_str = match status {
            Status::Running => "Running",
            Status::Paused => "Paused",
        };
        let top = format!(
            "Gen: {}  Cells: {}  Grid: {}x{}  Interval: {:?}  {}",
            snapshot.generation(),
            snapshot.population(),
            snapshot.rows(),
            snapshot.cols(),
            self.interval,
            status_str
        );
        self.bar(0, &top)?;

        // Rows of the grid run along the terminal width.
        let visible_cols = (self.height.saturating_sub(2) as usize).min(snapshot.cols());
        let visible_rows = (self.width as usize).min(snapshot.rows());
        for col in 0..visible_cols {
            let line: String = (0..visible_rows)
                .map(|row| if snapshot.is_alive((row, col)) { 'o' } else { '.' })
                .collect();
            queue!(
                self.out,
                cursor::MoveTo(0, col as u16 + 1),
                Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }

        let help = match status {
            Status::Running => "Running. Press [space] to pause, [→] to step, [q] to quit.",
            Status::Paused => "Paused. Press [space] to resume, [→] to step, [q] to quit.",
        };
        self.bottom_bar(help)?;
        self.out.flush()
    }
}

/// When the tick after the one due at `deadline` is due.
///
/// Keeps the cadence, unless that time has already passed. Then the
/// missed ticks are dropped and the interval restarts from `now`.
fn next_deadline(deadline: Instant, now: Instant, interval: Duration) -> Instant {
    let next = deadline + interval;
    if next < now {
        debug!("Fell behind the step interval.");
        now + interval
    } else {
        next
    }
}

/// Runs the controller until the user quits.
///
/// A tick is due every `step_interval_ms` milliseconds. The next tick is
/// scheduled whether or not the simulation is paused, so resuming keeps
/// the same cadence.
fn event_loop<W: Write>(controller: &mut Controller, screen: &mut Screen<W>) -> io::Result<()> {
    let interval = screen.interval;
    controller.present(screen)?;
    let mut deadline = Instant::now() + interval;
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match Action::from(event::read()?) {
                Action::Toggle => {
                    controller.toggle();
                    controller.present(screen)?;
                }
                Action::Step => {
                    controller.step();
                    controller.present(screen)?;
                }
                Action::Quit => {
                    if screen.confirm_quit()? {
                        break;
                    }
                    controller.present(screen)?;
                }
                Action::ForceQuit => break,
                Action::Redraw => {
                    screen.resize()?;
                    controller.present(screen)?;
                }
                Action::Nothing => (),
            }
        } else {
            if let Tick::Advanced(_) = controller.tick() {
                controller.present(screen)?;
            }
            deadline = next_deadline(deadline, Instant::now(), interval);
        }
    }
    Ok(())
}

/// Runs the simulation in the terminal, and returns the controller when the
/// user quits.
pub(crate) fn run_with_tui(mut controller: Controller, paused: bool) -> io::Result<Controller> {
    if paused {
        controller.toggle();
    }
    let interval = Duration::from_millis(controller.config().step_interval_ms);

    let _guard = RawTerminal::enter()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        cursor::Hide,
        Clear(ClearType::All)
    )?;

    Screen::new(io::stdout(), interval)
        .and_then(|mut screen| event_loop(&mut controller, &mut screen))?;
    Ok(controller)
}

/// Raw mode, until dropped.
///
/// Dropping also leaves the alternate screen and shows the cursor, so the
/// terminal is restored on errors and panics too.
struct RawTerminal;

impl RawTerminal {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawTerminal)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
            debug!("Failed to leave the alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            debug!("Failed to disable raw mode: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(150);

    #[test]
    fn on_schedule() {
        let start = Instant::now();
        assert_eq!(next_deadline(start, start, INTERVAL), start + INTERVAL);

        // A little late, but the next tick is still ahead.
        let now = start + Duration::from_millis(100);
        assert_eq!(next_deadline(start, now, INTERVAL), start + INTERVAL);
        let now = start + INTERVAL;
        assert_eq!(next_deadline(start, now, INTERVAL), start + INTERVAL);
    }

    #[test]
    fn fell_behind() {
        let start = Instant::now();
        let now = start + Duration::from_millis(1000);
        assert_eq!(next_deadline(start, now, INTERVAL), now + INTERVAL);
    }

    #[test]
    fn zero_interval() {
        let start = Instant::now();
        assert_eq!(next_deadline(start, start, Duration::ZERO), start);

        let now = start + Duration::from_millis(10);
        assert_eq!(next_deadline(start, now, Duration::ZERO), now);
    }
}
