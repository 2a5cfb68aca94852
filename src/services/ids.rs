// src/services/ids.rs
use chrono::Utc;

use crate::models::product::Product;

pub type Clock = Box<dyn Fn() -> i64 + Send>;

/// Hands out product ids from the wall clock in milliseconds.
///
/// Ids only move forward within a session, and a timestamp that is
/// already taken by a stored product is bumped until it is free.
pub struct IdGenerator {
    clock: Clock,
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(Box::new(|| Utc::now().timestamp_millis()))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock, last: None }
    }

    pub fn next_id(&mut self, existing: &[Product]) -> String {
        let mut candidate = (self.clock)();
        if let Some(last) = self.last {
            candidate = candidate.max(last + 1);
        }
        while existing.iter().any(|p| p.id == candidate.to_string()) {
            candidate += 1;
        }
        self.last = Some(candidate);
        candidate.to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").field("last", &self.last).finish()
    }
}
