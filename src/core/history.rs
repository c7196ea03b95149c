//! State transition history tracking.
//!
//! A machine appends one [`StateTransition`] per successful dispatch. The
//! history keeps at most `limit` entries and drops the oldest first.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::Duration;

/// Entries kept by a machine unless its builder sets another limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Record of a single dispatched transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateTransition {
    /// The event that fired
    pub event: String,
    /// The state being transitioned from
    pub from: String,
    /// The state being transitioned to
    pub to: String,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

/// Most recent state transitions, oldest first.
///
/// # Example
///
/// ```rust
/// use turnstile::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(2);
/// for (event, from, to) in [("open", "closed", "open"), ("close", "open", "closed"), ("open", "closed", "open")] {
///     history.push(StateTransition {
///         event: event.to_string(),
///         from: from.to_string(),
///         to: to.to_string(),
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec!["open", "closed", "open"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    limit: usize,
}

impl StateHistory {
    /// Empty history holding up to [`DEFAULT_HISTORY_LIMIT`] entries.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Empty history holding up to `limit` entries. A limit of zero
    /// records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a transition, evicting the oldest one when full.
    pub fn push(&mut self, transition: StateTransition) {
        if self.limit == 0 {
            return;
        }
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed by the retained transitions: the oldest `from`,
    /// then every `to`.
    pub fn get_path(&self) -> Vec<&str> {
        self.transitions
            .front()
            .map(|first| first.from.as_str())
            .into_iter()
            .chain(self.transitions.iter().map(|t| t.to.as_str()))
            .collect()
    }

    /// Names of the events that fired, in order.
    pub fn events(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.event.as_str()).collect()
    }

    /// Time between the oldest and the newest retained transition.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp.signed_duration_since(first.timestamp).to_std().ok()
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(event: &str, from: &str, to: &str) -> StateTransition {
        StateTransition {
            event: event.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            timestamp: Utc::now(),
        }
    }

    fn door_history(limit: usize, steps: usize) -> StateHistory {
        let mut history = StateHistory::with_limit(limit);
        for i in 0..steps {
            if i % 2 == 0 {
                history.push(step("open", "closed", "open"));
            } else {
                history.push(step("close", "open", "closed"));
            }
        }
        history
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = door_history(8, 2);

        assert_eq!(history.get_path(), vec!["closed", "open", "closed"]);
        assert_eq!(history.events(), vec!["open", "close"]);
        assert_eq!(history.last().map(|t| t.event.as_str()), Some("close"));
    }

    #[test]
    fn oldest_entries_are_evicted_at_the_limit() {
        let history = door_history(3, 10);

        assert_eq!(history.len(), 3);
        assert_eq!(history.events(), vec!["close", "open", "close"]);
        assert_eq!(history.get_path(), vec!["open", "closed", "open", "closed"]);
    }

    #[test]
    fn zero_limit_records_nothing() {
        let history = door_history(0, 5);
        assert!(history.is_empty());
    }

    #[test]
    fn clear_keeps_the_limit() {
        let mut history = door_history(4, 4);
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.limit(), 4);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        history.push(step("open", "closed", "open"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        history.push(step("close", "open", "closed"));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = door_history(8, 1);

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }
}
