//! Count-up animation for headline figures ("50,000+ Happy Customers").

use std::time::Duration;

use serde::{Deserialize, Serialize};

use sangam_core::group_indian;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_STEPS: u32 = 60;

/// A headline figure split into its number and trailing suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatFigure {
    pub value: u64,
    pub suffix: String,
}

impl StatFigure {
    /// `"50000+"` → 50000 and `"+"`, `"1,200K"` → 1200 and `"K"`. Without leading
    /// digits the value is 0 and the whole string is the suffix.
    pub fn parse(raw: &str) -> Self {
        let split = raw
            .find(|c: char| !(c.is_ascii_digit() || c == ','))
            .unwrap_or(raw.len());
        let (number, suffix) = raw.split_at(split);
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();

        match digits.parse::<u64>() {
            Ok(value) => Self {
                value,
                suffix: suffix.to_string(),
            },
            Err(_) => Self {
                value: 0,
                suffix: raw.to_string(),
            },
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterPhase {
    /// Not yet scrolled into view.
    Waiting,
    Running,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedCounter {
    target: u64,
    suffix: String,
    steps: u32,
    duration: Duration,
    step: u32,
    current: f64,
    shown: u64,
    phase: CounterPhase,
}

impl AnimatedCounter {
    pub fn new(target: u64) -> Self {
        Self::with_timing(target, DEFAULT_DURATION, DEFAULT_STEPS)
    }

    pub fn for_figure(figure: &StatFigure) -> Self {
        let mut counter = Self::new(figure.value);
        counter.suffix = figure.suffix.clone();
        counter
    }

    pub fn with_timing(target: u64, duration: Duration, steps: u32) -> Self {
        Self {
            target,
            suffix: String::new(),
            steps: steps.max(1),
            duration,
            step: 0,
            current: 0.0,
            shown: 0,
            phase: CounterPhase::Waiting,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn value(&self) -> u64 {
        self.shown
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Delay between ticks.
    pub fn step_interval(&self) -> Duration {
        self.duration / self.steps
    }

    /// Start counting the first time the element becomes visible. Later calls
    /// do nothing and return false.
    pub fn reveal(&mut self) -> bool {
        if self.phase != CounterPhase::Waiting {
            return false;
        }
        self.phase = CounterPhase::Running;
        true
    }

    /// Advance one step and return the value to display.
    pub fn tick(&mut self) -> u64 {
        if self.phase != CounterPhase::Running {
            return self.shown;
        }

        self.step += 1;
        self.current += self.target as f64 / self.steps as f64;

        if self.step >= self.steps || self.current >= self.target as f64 {
            self.shown = self.target;
            self.phase = CounterPhase::Finished;
        } else {
            // Never overshoot through float drift.
            self.shown = (self.current.floor() as u64).min(self.target);
        }
        self.shown
    }

    /// Current value with Indian digit grouping and the figure's suffix.
    pub fn display(&self) -> String {
        format!("{}{}", group_indian(self.shown), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_about_page_figures() {
        assert_eq!(StatFigure::parse("25+"), StatFigure { value: 25, suffix: "+".into() });
        assert_eq!(StatFigure::parse("50000+").value, 50000);
        assert_eq!(StatFigure::parse("1,200K"), StatFigure { value: 1200, suffix: "K".into() });
        assert_eq!(StatFigure::parse("500"), StatFigure { value: 500, suffix: String::new() });
        assert_eq!(StatFigure::parse("Many"), StatFigure { value: 0, suffix: "Many".into() });
    }

    #[test]
    fn waits_until_revealed() {
        let mut counter = AnimatedCounter::new(500);
        assert_eq!(counter.tick(), 0);
        assert_eq!(counter.phase(), CounterPhase::Waiting);
        assert!(counter.reveal());
        assert!(!counter.reveal());
        assert!(counter.tick() > 0);
    }

    #[test]
    fn finishes_exactly_on_target_after_all_steps() {
        let mut counter = AnimatedCounter::for_figure(&StatFigure::parse("50000+"));
        counter.reveal();
        for _ in 0..DEFAULT_STEPS - 1 {
            counter.tick();
            assert_eq!(counter.phase(), CounterPhase::Running);
        }
        assert_eq!(counter.tick(), 50000);
        assert_eq!(counter.phase(), CounterPhase::Finished);
        assert_eq!(counter.display(), "50,000+");
        assert_eq!(counter.tick(), 50000);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = AnimatedCounter::new(0);
        counter.reveal();
        assert_eq!(counter.tick(), 0);
        assert_eq!(counter.phase(), CounterPhase::Finished);
    }

    #[test]
    fn step_interval_splits_duration() {
        assert_eq!(AnimatedCounter::new(10).step_interval(), Duration::from_nanos(33_333_333));
        let counter = AnimatedCounter::with_timing(10, Duration::from_millis(100), 0);
        assert_eq!(counter.step_interval(), Duration::from_millis(100));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: displayed values never decrease, never exceed the target,
            /// and end on the target.
            #[test]
            fn counts_up_monotonically_to_target(target in 0u64..10_000_000, steps in 1u32..120) {
                let mut counter = AnimatedCounter::with_timing(target, DEFAULT_DURATION, steps);
                counter.reveal();
                let mut last = 0;
                for _ in 0..steps {
                    let shown = counter.tick();
                    prop_assert!(shown >= last);
                    prop_assert!(shown <= target);
                    last = shown;
                }
                prop_assert_eq!(counter.value(), target);
                prop_assert_eq!(counter.phase(), CounterPhase::Finished);
            }
        }
    }
}
