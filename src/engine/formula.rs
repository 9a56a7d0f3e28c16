//! Closed-form indicator formulas and their single evaluator.
//!
//! Every series is a function of `t = year - BASE_YEAR` and, for the seeded
//! formulas, one scalar from the entity configuration.

use std::f64::consts::PI;

use crate::data::EntityConfig;

pub const BASE_YEAR: i32 = 2000;

/// Years elapsed since [`BASE_YEAR`]; negative before it.
#[inline]
pub fn elapsed(year: i32) -> f64 {
    f64::from(year) - f64::from(BASE_YEAR)
}

/// Configuration scalar a seeded formula starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Budget,
    Personnel,
    Exercises,
}

impl Seed {
    pub fn value(self, config: &EntityConfig) -> f64 {
        match self {
            Self::Budget => config.budget_base(),
            Self::Personnel => config.personnel_base(),
            Self::Exercises => config.exercises_base(),
        }
    }
}

/// One segment of a piecewise series. Active from `from` (inclusive) until the next
/// era starts; value is `intercept + slope * (year - origin)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Era {
    pub from: i32,
    pub origin: i32,
    pub intercept: f64,
    pub slope: f64,
}

impl Era {
    /// Era with a constant value.
    pub const fn flat(from: i32, value: f64) -> Self {
        Self {
            from,
            origin: from,
            intercept: value,
            slope: 0.0,
        }
    }

    /// Era growing linearly from its own start year.
    pub const fn ramp(from: i32, intercept: f64, slope: f64) -> Self {
        Self {
            from,
            origin: from,
            intercept,
            slope,
        }
    }

    fn value(&self, year: i32) -> f64 {
        self.intercept + self.slope * (f64::from(year) - f64::from(self.origin))
    }
}

/// One-time additive increment applied from `from` onward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub from: i32,
    pub amount: f64,
}

/// Multiplier applied to years in `first..=last` (`last: None` is open-ended).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub first: i32,
    pub last: Option<i32>,
    pub factor: f64,
}

impl Adjustment {
    pub fn covers(&self, year: i32) -> bool {
        year >= self.first && self.last.map_or(true, |last| year <= last)
    }
}

/// How overlapping adjustment windows combine. Never cumulative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjustmentPolicy {
    /// Rules are read top to bottom and the last covering rule's factor applies.
    #[default]
    LastMatch,
    /// The first covering rule's factor applies; later overlapping windows never fire.
    FirstMatch,
}

impl AdjustmentPolicy {
    /// Factor for `year`, or 1.0 when no rule covers it.
    pub fn factor(self, rules: &[Adjustment], year: i32) -> f64 {
        let mut covering = rules.iter().filter(|rule| rule.covers(year));
        let selected = match self {
            Self::LastMatch => covering.last(),
            Self::FirstMatch => covering.next(),
        };
        selected.map_or(1.0, |rule| rule.factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    /// `intercept + slope * t`
    Linear { intercept: f64, slope: f64 },
    /// `min(intercept + slope * t, cap)`
    Saturating {
        intercept: f64,
        slope: f64,
        cap: f64,
    },
    /// `max(intercept + slope * t, floor)`
    Floored {
        intercept: f64,
        slope: f64,
        floor: f64,
    },
    /// Linear base plus every step reached so far, then capped.
    Stepped {
        intercept: f64,
        slope: f64,
        steps: &'static [Step],
        cap: f64,
    },
    /// Piecewise by era; years before the first era use the first era.
    Eras {
        eras: &'static [Era],
        cap: Option<f64>,
    },
    /// `seed * (1 + rate * t)` times the adjustment factor for the year.
    Growth {
        seed: Seed,
        rate: f64,
        adjustments: &'static [Adjustment],
    },
    /// `seed + slope * t + amplitude * sin(2πt / period)`
    Seasonal {
        seed: Seed,
        slope: f64,
        amplitude: f64,
        period: f64,
    },
}

impl Formula {
    pub fn evaluate(&self, year: i32, config: &EntityConfig, policy: AdjustmentPolicy) -> f64 {
        let t = elapsed(year);
        match *self {
            Self::Linear { intercept, slope } => intercept + slope * t,
            Self::Saturating { intercept, slope, cap } => (intercept + slope * t).min(cap),
            Self::Floored { intercept, slope, floor } => (intercept + slope * t).max(floor),
            Self::Stepped {
                intercept,
                slope,
                steps,
                cap,
            } => {
                let reached: f64 = steps
                    .iter()
                    .filter(|step| year >= step.from)
                    .map(|step| step.amount)
                    .sum();
                (intercept + slope * t + reached).min(cap)
            }
            Self::Eras { eras, cap } => {
                let era = eras
                    .iter()
                    .rev()
                    .find(|era| year >= era.from)
                    .or_else(|| eras.first());
                let value = era.map_or(0.0, |era| era.value(year));
                cap.map_or(value, |cap| value.min(cap))
            }
            Self::Growth {
                seed,
                rate,
                adjustments,
            } => seed.value(config) * (1.0 + rate * t) * policy.factor(adjustments, year),
            Self::Seasonal {
                seed,
                slope,
                amplitude,
                period,
            } => seed.value(config) + slope * t + amplitude * (2.0 * PI * t / period).sin(),
        }
    }

    /// Upper bound the formula can never exceed, if it has one.
    pub fn ceiling(&self) -> Option<f64> {
        match *self {
            Self::Saturating { cap, .. } | Self::Stepped { cap, .. } => Some(cap),
            Self::Eras { cap, .. } => cap,
            _ => None,
        }
    }

    /// Lower bound the formula can never go below, if it has one.
    pub fn floor(&self) -> Option<f64> {
        match *self {
            Self::Floored { floor, .. } => Some(floor),
            _ => None,
        }
    }
}
