//! Clock - Local time and three world cities, refreshed every second

use chrono::{Duration as ChronoDuration, Local, NaiveDateTime, Timelike};
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::scheduler::{Scheduler, TimerId};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Label for the local reading
pub const HOME_LABEL: &str = "서울 (KST)";

/// City name and whole-hour offset from the local time
pub const WORLD_CITIES: [(&str, i64); 3] = [("뉴욕", -14), ("런던", -9), ("도쿄", 0)];

/// Source of the current local time
pub trait WallClock: Send {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedWallClock(pub NaiveDateTime);

impl WallClock for FixedWallClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockReading {
    pub fn at(time: NaiveDateTime) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute(),
            seconds: time.second(),
        }
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTime {
    pub city: &'static str,
    pub hours: u32,
    pub minutes: u32,
}

impl CityTime {
    pub fn hh_mm(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Shift `local` by each city's offset
pub fn world_times(local: NaiveDateTime) -> Vec<CityTime> {
    WORLD_CITIES
        .iter()
        .map(|&(city, offset_hours)| {
            let shifted = local + ChronoDuration::hours(offset_hours);
            CityTime {
                city,
                hours: shifted.hour(),
                minutes: shifted.minute(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tick;

pub struct ClockApp {
    wall: Box<dyn WallClock>,
    current: NaiveDateTime,
    timers: Scheduler<Tick>,
    ticker: Option<TimerId>,
}

impl fmt::Debug for ClockApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockApp")
            .field("current", &self.current)
            .field("ticker", &self.ticker)
            .finish()
    }
}

impl ClockApp {
    /// Read the time once and start the one-second ticker
    pub fn new(wall: Box<dyn WallClock>) -> Self {
        let current = wall.now();
        let mut timers = Scheduler::new();
        let ticker = Some(timers.every(TICK_INTERVAL, Tick));
        Self {
            wall,
            current,
            timers,
            ticker,
        }
    }

    pub fn reading(&self) -> ClockReading {
        ClockReading::at(self.current)
    }

    pub fn cities(&self) -> Vec<CityTime> {
        world_times(self.current)
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some_and(|id| self.timers.is_pending(id))
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if !self.timers.advance_to(elapsed).is_empty() {
            self.current = self.wall.now();
        }
    }

    pub fn teardown(&mut self) {
        if let Some(id) = self.ticker.take() {
            self.timers.cancel(id);
            debug!("clock: ticker stopped");
        }
    }
}
