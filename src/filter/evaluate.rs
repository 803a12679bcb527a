//! Keep-or-discard decision for one annotation document.

use crate::config::FilterConfig;
use crate::error::{Error, Result};
use crate::textgrid::{Interval, TextGrid, Tier};

use super::BoundaryWindow;

/// Outcome of evaluating an annotation document.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// No marked interval survived; the whole example should be deleted.
    Discard {
        /// Number of marked intervals found in the inspected tier.
        candidates: usize,
        /// Marked intervals that failed the window test, in tier order.
        removed: Vec<Interval>,
    },
    /// At least one marked interval survived.
    Keep {
        /// The pruned document with the inspected tier renamed.
        grid: TextGrid,
        /// Number of marked intervals found in the inspected tier.
        candidates: usize,
        /// Marked intervals that failed the window test, in tier order.
        removed: Vec<Interval>,
    },
}

impl Verdict {
    /// Marked intervals removed by the window test.
    pub fn removed(&self) -> &[Interval] {
        match self {
            Self::Discard { removed, .. } | Self::Keep { removed, .. } => removed,
        }
    }

    /// Whether the example survives.
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep { .. })
    }
}

/// Evaluate the last tier of `grid` against the configured windows.
///
/// The input document is left untouched; a kept example carries a new
/// document with failing intervals removed and the last tier renamed.
pub fn evaluate(grid: &TextGrid, config: &FilterConfig) -> Result<Verdict> {
    let window = BoundaryWindow::from_config(config);
    let file_length = grid.duration();
    let mut pruned = grid.clone();

    let tier = match pruned.last_tier_mut() {
        Some(Tier::Interval(tier)) => tier,
        Some(Tier::Point(tier)) => {
            return Err(Error::InvalidTextGrid {
                message: format!("last tier '{}' is a point tier, expected intervals", tier.name),
            });
        }
        None => {
            return Err(Error::InvalidTextGrid {
                message: "no tiers to inspect".to_string(),
            });
        }
    };

    let mut candidates = 0;
    let mut removed = Vec::new();
    tier.intervals.retain(|interval| {
        if interval.text != config.marker {
            return true;
        }
        candidates += 1;
        if window.admits(interval, file_length) {
            true
        } else {
            removed.push(interval.clone());
            false
        }
    });

    if removed.len() == candidates {
        return Ok(Verdict::Discard {
            candidates,
            removed,
        });
    }

    config.tier_name.clone_into(&mut tier.name);
    Ok(Verdict::Keep {
        grid: pruned,
        candidates,
        removed,
    })
}
