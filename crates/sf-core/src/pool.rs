//! Hit-point and mana pools.
//!
//! A pool is a clamped resource value in `[0, max]`. Unlike stats, pools are
//! mutated constantly during play, so they carry their own damage/heal/spend
//! vocabulary instead of a generic setter.

use serde::{Deserialize, Serialize};

/// A clamped numeric resource (HP, mana).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Current value.
    pub current: u32,
    /// Maximum value.
    pub max: u32,
}

impl Pool {
    /// Create a full pool.
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage, flooring at 0. Returns the new current value.
    pub fn damage(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Add healing, capping at max. Returns the new current value.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.current = (self.current + amount).min(self.max);
        self.current
    }

    /// Spend from the pool, refusing if insufficient. Returns whether the
    /// spend happened.
    pub fn spend(&mut self, amount: u32) -> bool {
        if amount > self.current {
            return false;
        }
        self.current -= amount;
        true
    }

    /// Refill to max.
    pub fn restore(&mut self) {
        self.current = self.max;
    }

    /// Resize the maximum, clamping current into the new range.
    pub fn resize(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
    }

    /// Returns true if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Returns true if the pool is full.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Filled fraction (0.0 to 1.0), for display bars.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 1.0;
        }
        f64::from(self.current) / f64::from(self.max)
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
