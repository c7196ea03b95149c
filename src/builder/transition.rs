//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::callback::{CallbackList, Condition, Hook, Methods};
use crate::core::{DefinitionError, Guard, State, Transition};
use crate::machine::StateMachine;
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
///
/// States are referenced by name and resolved when the transition is
/// registered, so a transition can point at states defined in either tier.
///
/// # Example
///
/// ```rust
/// use turnstile::{StateMachine, TransitionBuilder};
///
/// let open = TransitionBuilder::<()>::new("open")
///     .from("closed")
///     .to("open")
///     .when(|door: &mut StateMachine<()>| door.is("closed"))
///     .action("log_open")
///     .build()
///     .unwrap();
///
/// assert_eq!(open.event(), "open");
/// ```
pub struct TransitionBuilder<C: Methods + 'static> {
    event: String,
    from: Vec<String>,
    to: Option<String>,
    action: Option<Hook<C>>,
    guard: Guard<C>,
}

impl<C: Methods + 'static> TransitionBuilder<C> {
    /// Create a transition builder for `event`.
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            from: Vec::new(),
            to: None,
            action: None,
            guard: Guard::none(),
        }
    }

    /// Add a source state (at least one required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from.push(state.into());
        self
    }

    /// Add several source states.
    pub fn from_any<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add actions run after the target's enter hook (optional).
    pub fn action(mut self, action: impl Into<Hook<C>>) -> Self {
        let action = action.into();
        if action.is_empty() {
            return self;
        }
        if let Some(existing) = self.action.as_mut() {
            existing.extend(action);
        } else {
            self.action = Some(action);
        }
        self
    }

    /// Add guard conditions (optional). All must hold for the transition to fire.
    pub fn guard(mut self, conditions: impl Into<CallbackList<C, bool>>) -> Self {
        self.guard.extend(conditions.into());
        self
    }

    /// Add a guard condition from a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&mut StateMachine<C>) -> bool + Send + Sync + 'static,
    {
        self.guard.push(Condition::new(predicate));
        self
    }

    /// Build the transition definition.
    pub fn build(self) -> Result<TransitionDef<C>, BuildError> {
        if self.event.is_empty() {
            return Err(BuildError::MissingEvent);
        }
        if self.from.is_empty() {
            return Err(BuildError::MissingFromState { event: self.event });
        }
        let Some(to) = self.to else {
            return Err(BuildError::MissingToState { event: self.event });
        };

        Ok(TransitionDef {
            event: self.event,
            from: self.from,
            to,
            action: self.action,
            guard: self.guard,
        })
    }
}

/// Validated transition whose state names are not yet resolved.
pub struct TransitionDef<C: Methods + 'static> {
    event: String,
    from: Vec<String>,
    to: String,
    action: Option<Hook<C>>,
    guard: Guard<C>,
}

impl<C: Methods + 'static> TransitionDef<C> {
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Resolve source and target names into a transition.
    pub(crate) fn resolve<F>(self, mut lookup: F) -> Result<Transition<C>, DefinitionError>
    where
        F: FnMut(&str) -> Result<Arc<State<C>>, DefinitionError>,
    {
        let from = self
            .from
            .iter()
            .map(|name| lookup(name.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let to = lookup(self.to.as_str())?;

        Ok(Transition::new(self.event, from, to, self.action, self.guard))
    }
}
