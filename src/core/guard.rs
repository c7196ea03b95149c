//! Guard conditions for controlling transitions.
//!
//! A guard holds zero or more conditions and is satisfied when all of
//! them return `true`. Every condition is evaluated, in order, even after
//! one has returned `false`: conditions may have side effects the host
//! relies on.

use crate::callback::{ActionInvoker, CallbackError, CallbackList, Condition, EventArgs, Methods};
use crate::machine::StateMachine;
use std::fmt;

/// Conjunction of conditions gating a transition.
pub struct Guard<C: Methods + 'static> {
    conditions: CallbackList<C, bool>,
}

impl<C: Methods + 'static> Guard<C> {
    /// Guard that is always satisfied.
    pub fn none() -> Self {
        Self {
            conditions: CallbackList::default(),
        }
    }

    /// Guard over one or more conditions.
    pub fn new(conditions: impl Into<CallbackList<C, bool>>) -> Self {
        Self {
            conditions: conditions.into(),
        }
    }

    /// Guard from a single closure over the machine.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&mut StateMachine<C>) -> bool + Send + Sync + 'static,
    {
        Self::new(Condition::new(predicate))
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub(crate) fn push(&mut self, condition: Condition<C>) {
        self.conditions.push(condition);
    }

    pub(crate) fn extend(&mut self, conditions: CallbackList<C, bool>) {
        self.conditions.extend(conditions);
    }

    /// Evaluate every condition left to right and AND the results.
    pub fn is_satisfied(&self, machine: &mut StateMachine<C>) -> Result<bool, CallbackError> {
        let mut invoker = ActionInvoker::new(machine);
        let no_args = EventArgs::new();

        let mut satisfied = true;
        for condition in self.conditions.iter() {
            let passed = invoker.invoke(condition, &no_args)?;
            satisfied = satisfied && passed;
        }
        Ok(satisfied)
    }
}

impl<C: Methods + 'static> Default for Guard<C> {
    fn default() -> Self {
        Self::none()
    }
}

impl<C: Methods + 'static> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("conditions", &self.conditions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{StateMachineBuilder, TransitionBuilder};
    use crate::callback::Callback;
    use crate::core::State;
    use serde_json::Value;

    #[derive(Default)]
    struct Door {
        locked: bool,
        checks: Vec<&'static str>,
    }

    impl Methods for Door {
        fn call_method(
            &mut self,
            name: &str,
            _args: &EventArgs,
        ) -> Option<Result<Value, CallbackError>> {
            match name {
                "unlocked" => Some(Ok(Value::Bool(!self.locked))),
                "volume" => Some(Ok(Value::from(11))),
                _ => None,
            }
        }
    }

    fn door(locked: bool) -> StateMachine<Door> {
        StateMachineBuilder::new()
            .state(State::new("closed"))
            .state(State::new("open"))
            .initial("closed")
            .transition(TransitionBuilder::new("open").from("closed").to("open"))
            .build()
            .unwrap()
            .instantiate(Door {
                locked,
                ..Door::default()
            })
            .unwrap()
    }

    fn recording(label: &'static str, result: bool) -> Condition<Door> {
        Callback::new(move |m: &mut StateMachine<Door>| {
            m.context_mut().checks.push(label);
            result
        })
    }

    #[test]
    fn empty_guard_is_always_satisfied() {
        let mut machine = door(true);
        assert!(Guard::none().is_satisfied(&mut machine).unwrap());
    }

    #[test]
    fn named_condition_reads_host_state() {
        let guard: Guard<Door> = Guard::new("unlocked");

        assert!(guard.is_satisfied(&mut door(false)).unwrap());
        assert!(!guard.is_satisfied(&mut door(true)).unwrap());
    }

    #[test]
    fn conditions_are_combined_with_and() {
        let mut machine = door(false);
        let guard = Guard::new(vec![recording("a", true), recording("b", false)]);

        assert!(!guard.is_satisfied(&mut machine).unwrap());
    }

    #[test]
    fn every_condition_runs_after_a_failure() {
        let mut machine = door(false);
        let guard = Guard::new(vec![
            recording("first", false),
            recording("second", true),
            recording("third", true),
        ]);

        assert!(!guard.is_satisfied(&mut machine).unwrap());
        assert_eq!(machine.context().checks, vec!["first", "second", "third"]);
    }

    #[test]
    fn non_boolean_named_condition_is_an_error() {
        let guard: Guard<Door> = Guard::new("volume");

        let result = guard.is_satisfied(&mut door(false));

        assert!(matches!(result, Err(CallbackError::NotBoolean { .. })));
    }

    #[test]
    fn when_wraps_a_closure() {
        let guard = Guard::when(|m: &mut StateMachine<Door>| m.is("closed"));
        assert!(guard.is_satisfied(&mut door(true)).unwrap());
        assert_eq!(guard.len(), 1);
    }
}
