//! State change history tracking.
//!
//! Every state change a machine performs can be recorded, whether it came
//! from a fired transition or from a direct `set_current_state` call.
//! Recording is a diagnostic; it never influences evaluation.

use super::id::{StateId, TransitionId};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state change.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRecord {
    /// The state being left, if there was one
    pub from: Option<StateId>,
    /// The state being entered, if any
    pub to: Option<StateId>,
    /// The transition that fired, or `None` for a direct change
    pub via: Option<TransitionId>,
    /// Value of the machine's tick counter when the change happened
    pub tick: u64,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded log of state changes.
///
/// With a limit, the oldest records are dropped first.
///
/// # Example
///
/// ```rust
/// use reflex::{Condition, Fsm, State, Transition};
///
/// let mut fsm = Fsm::new();
/// let idle = fsm.add_state(State::new("Idle"));
/// let walk = fsm.add_state(State::new("Walk"));
/// fsm.add_transition(Transition::new(idle, walk).when(Condition::function(|| true)));
///
/// fsm.set_current_state(idle);
/// fsm.update();
///
/// let path = fsm.history().path();
/// assert_eq!(path, vec![None, Some(idle), Some(walk)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    limit: Option<usize>,
}

impl TransitionHistory {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history keeping at most `limit` records.
    pub fn bounded(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.min(64)),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.records.len() >= limit {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// States traversed: the `from` of the oldest record, then the `to` of
    /// every record.
    pub fn path(&self) -> Vec<Option<StateId>> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// Wall-clock time between the oldest and newest record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
