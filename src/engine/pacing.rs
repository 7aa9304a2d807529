//! Pacing between animation steps.
//!
//! The runner announces a [`Pause`] at every point where the animation should
//! linger; the sink decides how long to actually wait. [`Pacing`] maps a pause
//! kind and a [`Speed`] to a duration, and [`Playback`] adds the interactive
//! controls (live speed changes, pause, single-step) shared between a UI thread
//! and the worker running the sort.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use super::cancel::CancellationToken;

/// Animation speed setting, `1` (slowest) to `10` (fastest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Speed(u8);

impl Speed {
    /// Slowest setting.
    pub const MIN: Self = Self(1);
    /// Fastest setting.
    pub const MAX: Self = Self(10);

    /// Create a speed, clamping into `1..=10`.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Raw setting.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// One notch faster, saturating at [`Speed::MAX`].
    #[must_use]
    pub fn faster(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One notch slower, saturating at [`Speed::MIN`].
    #[must_use]
    pub fn slower(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// Delay between steps: `510 - 50 * speed` ms, floored at `floor`.
    ///
    /// Speed 1 gives 460 ms and speed 10 gives the floor.
    #[must_use]
    pub fn step_delay(self, floor: Duration) -> Duration {
        let ms = 510_u64.saturating_sub(50 * u64::from(self.0));
        Duration::from_millis(ms).max(floor)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for Speed {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("speed must be between 1 and 10, got {value}"))
        }
    }
}

impl From<Speed> for u8 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

/// Kind of pause announced by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pause {
    /// Linger on a comparison highlight.
    Compare,
    /// Linger on a swap highlight.
    Swap,
    /// Delay after the array state changed; scaled by speed.
    Step,
}

/// Durations for each [`Pause`] kind.
///
/// Zero durations are legitimate settings: a zero `min_step` still leaves the
/// speed-scaled step delay in place. Only [`Pacing::instant`] skips waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Fixed pause after a comparison highlight.
    pub compare_highlight: Duration,
    /// Fixed pause after a swap highlight.
    pub swap_highlight: Duration,
    /// Lower bound of the speed-scaled step delay.
    pub min_step: Duration,
    #[serde(default)]
    instant: bool,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(50),
            Duration::from_millis(100),
            Duration::from_millis(10),
        )
    }
}

impl Pacing {
    /// Pacing with the given highlight pauses and step-delay floor.
    #[must_use]
    pub const fn new(
        compare_highlight: Duration,
        swap_highlight: Duration,
        min_step: Duration,
    ) -> Self {
        Self {
            compare_highlight,
            swap_highlight,
            min_step,
            instant: false,
        }
    }

    /// No waiting at all; used for headless runs and benchmarks.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            compare_highlight: Duration::ZERO,
            swap_highlight: Duration::ZERO,
            min_step: Duration::ZERO,
            instant: true,
        }
    }

    /// Whether every pause is skipped.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.instant
    }

    /// How long to wait for `pause` at `speed`.
    #[must_use]
    pub fn duration(&self, pause: Pause, speed: Speed) -> Duration {
        if self.instant {
            return Duration::ZERO;
        }
        match pause {
            Pause::Compare => self.compare_highlight,
            Pause::Swap => self.swap_highlight,
            Pause::Step => speed.step_delay(self.min_step),
        }
    }
}

/// Granularity of sleeps so a stop or pause is noticed quickly.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Interactive playback state shared between a controller and a worker.
///
/// All fields are single-word atomics that are only loaded, stored, or
/// decremented, so no lock is needed.
#[derive(Debug)]
pub struct Playback {
    speed: AtomicU8,
    paused: AtomicBool,
    step_credits: AtomicUsize,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(Speed::default())
    }
}

impl Playback {
    /// Create an unpaused playback at `speed`.
    #[must_use]
    pub fn new(speed: Speed) -> Self {
        Self {
            speed: AtomicU8::new(speed.get()),
            paused: AtomicBool::new(false),
            step_credits: AtomicUsize::new(0),
        }
    }

    /// Current speed.
    #[must_use]
    pub fn speed(&self) -> Speed {
        Speed::new(self.speed.load(Ordering::Relaxed))
    }

    /// Change the speed; takes effect at the next pause.
    pub fn set_speed(&self, speed: Speed) {
        self.speed.store(speed.get(), Ordering::Relaxed);
    }

    /// Whether playback is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause or resume.
    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Release);
        if !paused {
            self.step_credits.store(0, Ordering::Release);
        }
    }

    /// Allow one pause point to pass while paused.
    pub fn grant_step(&self) {
        self.step_credits.fetch_add(1, Ordering::AcqRel);
    }

    fn take_step(&self) -> bool {
        self.step_credits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok()
    }

    /// Block the calling worker for `pause`.
    ///
    /// While paused, waits for a step credit. Returns early as soon as
    /// `cancel` is set.
    pub fn wait(&self, pause: Pause, pacing: &Pacing, cancel: &CancellationToken) {
        while self.is_paused() {
            if cancel.is_cancelled() || self.take_step() {
                break;
            }
            thread::sleep(POLL_INTERVAL);
        }

        let mut remaining = pacing.duration(pause, self.speed());
        while !remaining.is_zero() && !cancel.is_cancelled() {
            let slice = remaining.min(POLL_INTERVAL);
            thread::sleep(slice);
            remaining = remaining.saturating_sub(slice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_clamps() {
        assert_eq!(Speed::new(0), Speed::MIN);
        assert_eq!(Speed::new(42), Speed::MAX);
        assert_eq!(Speed::default().get(), 5);
    }

    #[test]
    fn test_speed_step_delay_mapping() {
        let floor = Duration::from_millis(10);
        assert_eq!(Speed::new(1).step_delay(floor), Duration::from_millis(460));
        assert_eq!(Speed::new(5).step_delay(floor), Duration::from_millis(260));
        assert_eq!(Speed::new(10).step_delay(floor), Duration::from_millis(10));
    }

    #[test]
    fn test_step_delay_monotonically_decreasing() {
        let floor = Duration::from_millis(10);
        let delays: Vec<Duration> = (1..=10).map(|s| Speed::new(s).step_delay(floor)).collect();
        assert!(delays.windows(2).all(|w| w[0] >= w[1]));
        assert!(delays.iter().all(|d| *d >= floor));
    }

    #[test]
    fn test_faster_slower_saturate() {
        assert_eq!(Speed::MAX.faster(), Speed::MAX);
        assert_eq!(Speed::MIN.slower(), Speed::MIN);
        assert_eq!(Speed::new(4).faster().get(), 5);
    }

    #[test]
    fn test_speed_try_from() {
        assert!(Speed::try_from(0).is_err());
        assert!(Speed::try_from(11).is_err());
        assert_eq!(Speed::try_from(7).ok(), Some(Speed::new(7)));
    }

    #[test]
    fn test_pacing_durations() {
        let pacing = Pacing::default();
        let speed = Speed::new(10);
        assert_eq!(pacing.duration(Pause::Compare, speed), Duration::from_millis(50));
        assert_eq!(pacing.duration(Pause::Swap, speed), Duration::from_millis(100));
        assert_eq!(pacing.duration(Pause::Step, speed), Duration::from_millis(10));
    }

    #[test]
    fn test_zero_floor_keeps_speed_scaling() {
        let pacing = Pacing::new(Duration::ZERO, Duration::ZERO, Duration::ZERO);
        assert!(!pacing.is_instant());
        assert_eq!(pacing.duration(Pause::Compare, Speed::MIN), Duration::ZERO);
        assert_eq!(pacing.duration(Pause::Step, Speed::MIN), Duration::from_millis(460));
        assert_eq!(pacing.duration(Pause::Step, Speed::new(9)), Duration::from_millis(60));
        assert_eq!(pacing.duration(Pause::Step, Speed::MAX), Duration::from_millis(10));
    }

    #[test]
    fn test_instant_pacing_is_zero() {
        let pacing = Pacing::instant();
        for pause in [Pause::Compare, Pause::Swap, Pause::Step] {
            assert_eq!(pacing.duration(pause, Speed::MIN), Duration::ZERO);
        }
    }

    #[test]
    fn test_playback_step_credits() {
        let playback = Playback::default();
        playback.set_paused(true);
        assert!(!playback.take_step());
        playback.grant_step();
        assert!(playback.take_step());
        assert!(!playback.take_step());
    }

    #[test]
    fn test_playback_resume_clears_credits() {
        let playback = Playback::default();
        playback.set_paused(true);
        playback.grant_step();
        playback.set_paused(false);
        assert!(!playback.is_paused());
        assert!(!playback.take_step());
    }

    #[test]
    fn test_wait_returns_when_cancelled_while_paused() {
        let playback = Playback::default();
        playback.set_paused(true);
        let cancel = CancellationToken::new();
        cancel.cancel();
        playback.wait(Pause::Step, &Pacing::default(), &cancel);
    }

    #[test]
    fn test_wait_consumes_step_credit() {
        let playback = Playback::default();
        playback.set_paused(true);
        playback.grant_step();
        playback.wait(Pause::Step, &Pacing::instant(), &CancellationToken::new());
        assert!(!playback.take_step());
    }

    #[test]
    fn test_live_speed_change() {
        let playback = Playback::new(Speed::MIN);
        playback.set_speed(Speed::MAX);
        assert_eq!(playback.speed(), Speed::MAX);
    }
}
