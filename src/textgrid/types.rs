//! In-memory model of a Praat TextGrid.

use crate::constants::textgrid::{INTERVAL_TIER, TEXT_TIER};

/// A Praat TextGrid document.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGrid {
    /// Start of the annotated timeline in seconds.
    pub xmin: f64,
    /// End of the annotated timeline in seconds (the file duration).
    pub xmax: f64,
    /// Tiers in file order.
    pub tiers: Vec<Tier>,
}

/// A single tier of a TextGrid.
#[derive(Debug, Clone, PartialEq)]
pub enum Tier {
    /// Tier made of labelled time ranges.
    Interval(IntervalTier),
    /// Tier made of labelled time points (`TextTier` in Praat).
    Point(PointTier),
}

/// A tier of labelled intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTier {
    /// Tier name.
    pub name: String,
    /// Tier start in seconds.
    pub xmin: f64,
    /// Tier end in seconds.
    pub xmax: f64,
    /// Intervals in file order.
    pub intervals: Vec<Interval>,
}

/// A labelled time range.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    /// Start time in seconds.
    pub xmin: f64,
    /// End time in seconds.
    pub xmax: f64,
    /// Interval label.
    pub text: String,
}

/// A tier of labelled points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTier {
    /// Tier name.
    pub name: String,
    /// Tier start in seconds.
    pub xmin: f64,
    /// Tier end in seconds.
    pub xmax: f64,
    /// Points in file order.
    pub points: Vec<Point>,
}

/// A labelled time point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Time in seconds.
    pub time: f64,
    /// Point label.
    pub mark: String,
}

impl TextGrid {
    /// Total duration of the annotated file.
    pub fn duration(&self) -> f64 {
        self.xmax
    }

    /// The last tier by position, if any.
    pub fn last_tier(&self) -> Option<&Tier> {
        self.tiers.last()
    }

    /// Mutable access to the last tier by position.
    pub fn last_tier_mut(&mut self) -> Option<&mut Tier> {
        self.tiers.last_mut()
    }
}

impl Tier {
    /// Tier name.
    pub fn name(&self) -> &str {
        match self {
            Self::Interval(tier) => &tier.name,
            Self::Point(tier) => &tier.name,
        }
    }

    /// Praat class name of this tier.
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Interval(_) => INTERVAL_TIER,
            Self::Point(_) => TEXT_TIER,
        }
    }
}
