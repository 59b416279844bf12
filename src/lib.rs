use log::{debug, info};
use std::fmt;
use std::rc::Rc;
use yew::functional::Reducible;

pub mod geometry;
pub mod theme;

/// Largest value accepted by any single duration segment.
pub const SEGMENT_MAX: u32 = 59;

/// Which segment of a [`Duration`] a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Hours => write!(f, "Hours"),
            TimeUnit::Minutes => write!(f, "Minutes"),
            TimeUnit::Seconds => write!(f, "Seconds"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// A segment fell outside `0..=59`.
    OutOfRange { unit: TimeUnit, value: i64 },
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::OutOfRange { unit, value } => write!(
                f,
                "{} must be between 0 and {}, got {}",
                unit, SEGMENT_MAX, value
            ),
        }
    }
}

impl std::error::Error for DurationError {}

/// Check a single segment against the closed range `0..=59`.
pub fn validate_segment(unit: TimeUnit, value: i64) -> Result<u32, DurationError> {
    if (0..=SEGMENT_MAX as i64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(DurationError::OutOfRange { unit, value })
    }
}

/// A configured countdown length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Duration {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, DurationError> {
        Ok(Duration {
            hours: validate_segment(TimeUnit::Hours, hours as i64)?,
            minutes: validate_segment(TimeUnit::Minutes, minutes as i64)?,
            seconds: validate_segment(TimeUnit::Seconds, seconds as i64)?,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Split a second count back into (hours, minutes, seconds).
pub fn split_seconds(total: u32) -> (u32, u32, u32) {
    (total / 3600, (total % 3600) / 60, total % 60)
}

fn pad2(value: u32) -> String {
    format!("{:02}", value)
}

pub fn hours_readable(total: u32) -> String {
    pad2(split_seconds(total).0)
}

pub fn minutes_readable(total: u32) -> String {
    pad2(split_seconds(total).1)
}

pub fn seconds_readable(total: u32) -> String {
    pad2(split_seconds(total).2)
}

/// Format a second count as `HH:MM:SS`.
///
/// # Examples
/// ```
/// assert_eq!(donut_timer::time_readable(3923), "01:05:23");
/// ```
pub fn time_readable(total: u32) -> String {
    format!(
        "{}:{}:{}",
        hours_readable(total),
        minutes_readable(total),
        seconds_readable(total)
    )
}

/// What a single tick did to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer paused; nothing changed.
    Idle,
    /// One second was taken off the clock.
    Advanced,
    /// The countdown had already reached zero and has now stopped.
    Done { chime: bool },
}

/// Countdown state machine driven by one tick per second.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerState {
    duration: Duration,
    time_remaining: u32,
    running: bool,
    percentage_remaining: f64,
    tick_fraction: f64,
    chimes: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState {
            duration: Duration::ZERO,
            time_remaining: 0,
            running: false,
            percentage_remaining: 1.0,
            tick_fraction: 0.0,
            chimes: 0,
        }
    }
}

impl TimerState {
    /// A freshly reset timer for `duration`.
    pub fn new(duration: Duration) -> Self {
        let mut state = TimerState::default();
        state.reset(duration);
        state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn percentage_remaining(&self) -> f64 {
        self.percentage_remaining
    }

    pub fn tick_fraction(&self) -> f64 {
        self.tick_fraction
    }

    /// Number of completions that asked for the chime since mount.
    pub fn chimes(&self) -> u32 {
        self.chimes
    }

    pub fn time_readable(&self) -> String {
        time_readable(self.time_remaining)
    }

    /// Restart the countdown from `duration`. The running flag is left alone.
    pub fn reset(&mut self, duration: Duration) {
        let total = duration.total_seconds();
        self.duration = duration;
        self.time_remaining = total;
        self.percentage_remaining = 1.0;
        // A zero total is already done; the first running tick completes it.
        self.tick_fraction = if total == 0 {
            0.0
        } else {
            0.01 * (100.0 / total as f64)
        };
        info!("Timer reset to {} ({} seconds)", duration, total);
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
        info!(
            "Timer {} at {}",
            if self.running { "started" } else { "paused" },
            self.time_readable()
        );
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        if self.time_remaining == 0 {
            return TickOutcome::Done {
                chime: self.done(),
            };
        }
        self.time_remaining -= 1;
        self.percentage_remaining = if self.time_remaining == 0 {
            0.0
        } else {
            (self.percentage_remaining - self.tick_fraction).max(0.0)
        };
        debug!("Tick: {} remaining", self.time_readable());
        TickOutcome::Advanced
    }

    /// Stop the timer. Returns whether the chime should sound, which is only
    /// the case when the duration at last reset was non-zero.
    pub fn done(&mut self) -> bool {
        self.running = false;
        let chime = !self.duration.is_zero();
        if chime {
            self.chimes += 1;
        }
        info!("Timer done (chime: {})", chime);
        chime
    }

    /// Apply a new configured duration: always stops and resets.
    pub fn set_duration(&mut self, duration: Duration) {
        self.running = false;
        self.reset(duration);
    }

    /// End angle of the elapsed sweep in radians, 0 when no time has elapsed.
    pub fn path_end_angle(&self) -> f64 {
        (1.0 - self.percentage_remaining) * std::f64::consts::TAU
    }
}

/// Transitions accepted by [`TimerState`] when used as a Yew reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerAction {
    Reset,
    Toggle,
    Tick,
    SetDuration(Duration),
}

impl Reducible for TimerState {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Same Rc back means no re-render.
        if action == TimerAction::Tick && !self.running {
            return self;
        }
        let mut next = (*self).clone();
        match action {
            TimerAction::Reset => next.reset(self.duration),
            TimerAction::Toggle => next.toggle(),
            TimerAction::Tick => {
                next.tick();
            }
            TimerAction::SetDuration(duration) => next.set_duration(duration),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> Duration {
        Duration::new(h, m, s).unwrap()
    }

    #[test]
    fn formats_time_zero_padded() {
        assert_eq!(time_readable(hms(1, 5, 23).total_seconds()), "01:05:23");
        assert_eq!(hours_readable(7 * 3600), "07");
        assert_eq!(hours_readable(48 * 3600), "48");
        assert_eq!(minutes_readable(9 * 60), "09");
        assert_eq!(seconds_readable(24), "24");
        assert_eq!(hms(0, 10, 0).to_string(), "00:10:00");
    }

    #[test]
    fn rejects_segments_outside_closed_range() {
        assert!(validate_segment(TimeUnit::Hours, -1).is_err());
        assert!(validate_segment(TimeUnit::Minutes, 60).is_err());
        assert_eq!(validate_segment(TimeUnit::Seconds, 0), Ok(0));
        assert_eq!(validate_segment(TimeUnit::Seconds, 59), Ok(59));
        assert_eq!(
            Duration::new(0, 60, 0),
            Err(DurationError::OutOfRange {
                unit: TimeUnit::Minutes,
                value: 60
            })
        );
    }

    #[test]
    fn default_state_is_idle_and_full() {
        let state = TimerState::default();
        assert_eq!(state.time_remaining(), 0);
        assert!(!state.is_running());
        assert_eq!(state.percentage_remaining(), 1.0);
        assert_eq!(state.tick_fraction(), 0.0);
    }

    #[test]
    fn reset_computes_remaining_and_fraction() {
        let state = TimerState::new(hms(1, 5, 23));
        assert_eq!(state.time_remaining(), 3923);
        assert_eq!(state.tick_fraction(), (100.0 / 3923.0) * 0.01);
        assert_eq!(state.percentage_remaining(), 1.0);
        assert_eq!(state.time_readable(), "01:05:23");
        assert_eq!(state.path_end_angle(), 0.0);
    }

    #[test]
    fn zero_duration_reset_is_already_done() {
        let state = TimerState::new(Duration::ZERO);
        assert_eq!(state.time_remaining(), 0);
        assert_eq!(state.tick_fraction(), 0.0);
        assert_eq!(state.percentage_remaining(), 1.0);
        assert_eq!(state.path_end_angle(), 0.0);
    }

    #[test]
    fn percentage_lands_on_zero_with_the_clock() {
        for total in [5, 10, 13, 3923] {
            let mut state = TimerState::new(hms(total / 3600, (total % 3600) / 60, total % 60));
            state.toggle();
            while state.time_remaining() > 0 {
                assert!(state.percentage_remaining() > 0.0);
                state.tick();
            }
            assert_eq!(state.percentage_remaining(), 0.0, "total {}", total);
            assert_eq!(state.path_end_angle(), std::f64::consts::TAU);
        }
    }

    #[test]
    fn toggle_twice_restores_running() {
        let mut state = TimerState::new(hms(0, 1, 0));
        assert!(!state.is_running());
        state.toggle();
        assert!(state.is_running());
        state.toggle();
        assert!(!state.is_running());
    }

    #[test]
    fn running_tick_decrements_by_one_step() {
        let mut state = TimerState::new(hms(1, 5, 23));
        let fraction = state.tick_fraction();
        let before = state.percentage_remaining();
        state.toggle();
        assert_eq!(state.tick(), TickOutcome::Advanced);
        assert_eq!(state.time_remaining(), 3922);
        assert_eq!(state.percentage_remaining(), before - fraction);
        assert_eq!(state.time_readable(), "01:05:22");
        state.tick();
        assert_eq!(state.time_readable(), "01:05:21");
    }

    #[test]
    fn paused_tick_changes_nothing() {
        let mut state = TimerState::new(hms(1, 5, 23));
        let before = state.clone();
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state, before);
    }

    #[test]
    fn tick_at_zero_completes_once() {
        let mut state = TimerState::new(hms(0, 0, 2));
        state.toggle();
        assert_eq!(state.tick(), TickOutcome::Advanced);
        assert_eq!(state.tick(), TickOutcome::Advanced);
        assert_eq!(state.percentage_remaining(), 0.0);
        assert_eq!(state.tick(), TickOutcome::Done { chime: true });
        assert!(!state.is_running());
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.time_remaining(), 0);
        assert_eq!(state.chimes(), 1);
    }

    #[test]
    fn zero_duration_never_chimes() {
        let mut state = TimerState::new(Duration::ZERO);
        state.toggle();
        assert_eq!(state.tick(), TickOutcome::Done { chime: false });
        assert!(!state.done());
        assert_eq!(state.chimes(), 0);
    }

    #[test]
    fn nonzero_duration_chimes_exactly_once() {
        for duration in [hms(0, 0, 1), hms(0, 1, 0), hms(1, 0, 0)] {
            let mut state = TimerState::new(duration);
            state.toggle();
            assert!(state.done());
            assert!(!state.is_running());
            assert_eq!(state.chimes(), 1);
        }
    }

    #[test]
    fn duration_change_stops_and_resets() {
        let mut state = TimerState::new(hms(1, 5, 23));
        state.toggle();
        state.tick();
        state.set_duration(hms(3, 5, 23));
        assert!(!state.is_running());
        assert_eq!(state.time_remaining(), 3 * 3600 + 5 * 60 + 23);
        assert_eq!(state.percentage_remaining(), 1.0);
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(TimerState::new(hms(0, 0, 10)));
        let paused = state.clone().reduce(TimerAction::Tick);
        assert!(Rc::ptr_eq(&state, &paused));

        let running = paused.reduce(TimerAction::Toggle);
        let ticked = running.reduce(TimerAction::Tick);
        assert_eq!(ticked.time_remaining(), 9);

        let reset = ticked.reduce(TimerAction::Reset);
        assert_eq!(reset.time_remaining(), 10);
        assert!(reset.is_running());

        let changed = reset.reduce(TimerAction::SetDuration(hms(0, 1, 0)));
        assert!(!changed.is_running());
        assert_eq!(changed.time_remaining(), 60);
    }
}
