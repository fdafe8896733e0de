//! Reproducible chain of adjustments applied to a starting color.
//!
//! A [`Recipe`] captures a color and the ordered list of adjustments to run
//! on it, so the same edit can be replayed from JSON.

use crate::adjust::Adjustment;
use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// A starting color and the adjustments to apply to it, in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub color: Rgb,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}

impl Recipe {
    /// Creates a recipe with no adjustments.
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            adjustments: Vec::new(),
        }
    }

    /// Appends an adjustment and returns the recipe for chaining.
    pub fn then(mut self, adjustment: Adjustment) -> Self {
        self.adjustments.push(adjustment);
        self
    }

    /// Applies every adjustment in order. An empty recipe returns its color.
    pub fn run(&self) -> Rgb {
        self.adjustments.iter().fold(self.color, |c, adj| {
            let out = adj.apply(c);
            log::debug!("{}: {:?} -> {:?}", adj.name(), c, out);
            out
        })
    }
}
