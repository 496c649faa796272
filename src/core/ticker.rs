//! Periodic refresh of the "current time" line.
//!
//! A `NowTicker` owns at most one worker thread. `watch(date)` cancels the
//! running worker (if any) before starting a new one, `cancel()` stops it and
//! dropping the ticker does the same, so a view that goes away never leaves a
//! recurring timer behind.

use crate::core::layout::LayoutConfig;
use chrono::{Local, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_TICK: Duration = Duration::from_secs(60);

type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;
type TickFn = Arc<Mutex<dyn FnMut(Option<f64>) + Send>>;

struct Running {
    date: NaiveDate,
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

pub struct NowTicker {
    layout: LayoutConfig,
    interval: Duration,
    clock: Clock,
    on_tick: TickFn,
    running: Option<Running>,
}

impl NowTicker {
    /// `on_tick` receives the indicator position (or `None` when hidden)
    /// right away and then once per `interval`.
    pub fn new<F>(layout: LayoutConfig, interval: Duration, on_tick: F) -> Self
    where
        F: FnMut(Option<f64>) + Send + 'static,
    {
        Self {
            layout,
            interval,
            clock: Arc::new(|| Local::now().naive_local()),
            on_tick: Arc::new(Mutex::new(on_tick)),
            running: None,
        }
    }

    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Fn() -> NaiveDateTime + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn watched_date(&self) -> Option<NaiveDate> {
        self.running.as_ref().map(|r| r.date)
    }

    /// Start tracking `date`, replacing any timer already running.
    pub fn watch(&mut self, date: NaiveDate) {
        self.cancel();

        let (stop, stop_rx) = mpsc::channel::<()>();
        let layout = self.layout;
        let interval = self.interval;
        let clock = Arc::clone(&self.clock);
        let on_tick = Arc::clone(&self.on_tick);

        let handle = thread::spawn(move || {
            loop {
                let position = layout.now_indicator(clock(), date);
                match on_tick.lock() {
                    Ok(mut f) => (&mut *f)(position),
                    Err(_) => {
                        warn!("ticker: tick callback poisoned, stopping");
                        break;
                    }
                }

                // A message or a dropped sender both mean "stop".
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    _ => break,
                }
            }
        });

        debug!("ticker: watching {}", date);
        self.running = Some(Running { date, stop, handle });
    }

    /// Stop the timer and wait for the worker to exit. No-op when idle.
    pub fn cancel(&mut self) {
        if let Some(running) = self.running.take() {
            let _ = running.stop.send(());
            if running.handle.join().is_err() {
                warn!("ticker: worker for {} panicked", running.date);
            }
            debug!("ticker: stopped watching {}", running.date);
        }
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
