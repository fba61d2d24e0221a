//! Input and timer events
//!
//! A background thread waits on the terminal and on two independent
//! timers, one for simulation ticks and one for redraws, and forwards
//! everything over a channel. Game state only lives on the receiving
//! thread, so a tick and a redraw never overlap.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEvent};

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
    Render,
}

/// A fixed-period timer. Fires at most once per call to `fire` and does
/// not try to catch up after a stall.
#[derive(Debug)]
struct Cadence {
    period: Duration,
    next: Instant,
}

impl Cadence {
    fn new(period: Duration, now: Instant) -> Self {
        Self { period, next: now + period }
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }
}

/// The tick and render timers side by side
#[derive(Debug)]
pub struct Schedule {
    tick: Cadence,
    render: Cadence,
}

impl Schedule {
    pub fn new(tick_period: Duration, render_period: Duration, now: Instant) -> Self {
        Self {
            tick: Cadence::new(tick_period, now),
            render: Cadence::new(render_period, now),
        }
    }

    /// Time until the next timer is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.tick.remaining(now).min(self.render.remaining(now))
    }

    /// Timer events due at `now`, tick first.
    pub fn due(&mut self, now: Instant) -> impl Iterator<Item = Event> {
        let tick = self.tick.fire(now).then_some(Event::Tick);
        let render = self.render.fire(now).then_some(Event::Render);
        [tick, render].into_iter().flatten()
    }
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_period: Duration, render_period: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut schedule = Schedule::new(tick_period, render_period, Instant::now());
            loop {
                let timeout = schedule.timeout(Instant::now());
                if event::poll(timeout).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(crossterm::event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(crossterm::event::Event::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                        Ok(crossterm::event::Event::Resize(..)) => Some(Event::Resize),
                        Ok(_) => None,
                        Err(e) => {
                            log::warn!("failed to read terminal event: {e}");
                            None
                        }
                    };
                    if let Some(ev) = forwarded {
                        if tx.send(ev).is_err() {
                            return;
                        }
                    }
                }
                for ev in schedule.due(Instant::now()) {
                    if tx.send(ev).is_err() {
                        return;
                    }
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
