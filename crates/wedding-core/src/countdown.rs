//! Countdown Engine
//!
//! Pure snapshot computation plus a ticker that remembers the last frame shown
//! so the view can highlight only the fields whose text changed.

/// Period of the driving loop.
pub const TICK_PERIOD_MS: u32 = 1_000;
/// How long a changed field keeps its highlight.
pub const FLIP_DURATION_MS: u32 = 600;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Remaining time until the target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownSnapshot {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub reached_target: bool,
}

impl CountdownSnapshot {
    /// Fixed state once the target has passed.
    pub const TERMINAL: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        reached_target: true,
    };

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + u64::from(self.hours) * 3_600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

/// Snapshot of `target - now`, both in epoch milliseconds.
pub fn compute_snapshot(now: i64, target: i64) -> CountdownSnapshot {
    if target <= now {
        return CountdownSnapshot::TERMINAL;
    }
    let delta = target.saturating_sub(now);
    CountdownSnapshot {
        days: (delta / DAY_MS) as u64,
        hours: ((delta % DAY_MS) / HOUR_MS) as u8,
        minutes: ((delta % HOUR_MS) / MINUTE_MS) as u8,
        seconds: ((delta % MINUTE_MS) / SECOND_MS) as u8,
        reached_target: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountdownField {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownField {
    pub const ALL: [CountdownField; 4] = [Self::Days, Self::Hours, Self::Minutes, Self::Seconds];

    pub fn label(self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Hours => "Hours",
            Self::Minutes => "Minutes",
            Self::Seconds => "Seconds",
        }
    }

    /// DOM id of the digit element, kept stable for the stylesheet.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Days => "countDays",
            Self::Hours => "countHours",
            Self::Minutes => "countMinutes",
            Self::Seconds => "countSeconds",
        }
    }
}

/// Text shown for each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownDisplay {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl CountdownDisplay {
    pub fn from_snapshot(snapshot: &CountdownSnapshot) -> Self {
        if snapshot.reached_target {
            return Self {
                days: "0".to_string(),
                hours: "00".to_string(),
                minutes: "00".to_string(),
                seconds: "00".to_string(),
            };
        }
        Self {
            days: format!("{:03}", snapshot.days),
            hours: format!("{:02}", snapshot.hours),
            minutes: format!("{:02}", snapshot.minutes),
            seconds: format!("{:02}", snapshot.seconds),
        }
    }

    pub fn get(&self, field: CountdownField) -> &str {
        match field {
            CountdownField::Days => &self.days,
            CountdownField::Hours => &self.hours,
            CountdownField::Minutes => &self.minutes,
            CountdownField::Seconds => &self.seconds,
        }
    }
}

/// One tick's worth of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownFrame {
    pub snapshot: CountdownSnapshot,
    pub display: CountdownDisplay,
    /// Fields whose text differs from the previously shown frame.
    pub changed: Vec<CountdownField>,
}

impl CountdownFrame {
    /// Whether the driving loop can stop after showing this frame.
    pub fn is_final(&self) -> bool {
        self.snapshot.reached_target
    }

    pub fn is_changed(&self, field: CountdownField) -> bool {
        self.changed.contains(&field)
    }
}

/// Drives the countdown towards a fixed target, tracking what was last shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTicker {
    target: i64,
    last_shown: Option<CountdownDisplay>,
}

impl CountdownTicker {
    pub fn new(target_millis: i64) -> Self {
        Self { target: target_millis, last_shown: None }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn tick(&mut self, now_millis: i64) -> CountdownFrame {
        let snapshot = compute_snapshot(now_millis, self.target);
        let display = CountdownDisplay::from_snapshot(&snapshot);
        let changed = CountdownField::ALL
            .into_iter()
            .filter(|field| {
                self.last_shown
                    .as_ref()
                    .map_or(true, |shown| shown.get(*field) != display.get(*field))
            })
            .collect();
        self.last_shown = Some(display.clone());
        CountdownFrame { snapshot, display, changed }
    }
}
