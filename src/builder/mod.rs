//! Builder API for machine definitions.
//!
//! This module provides fluent builders for transitions and for
//! whole machine types, plus a macro that exposes events and state
//! predicates as plain methods.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::{TransitionBuilder, TransitionDef};

use crate::callback::{CallbackList, Methods};

/// Create an unguarded transition without an action.
///
/// # Example
///
/// ```
/// use turnstile::builder::simple_transition;
///
/// let toggle = simple_transition::<()>("toggle", "off", "on");
/// assert!(toggle.build().is_ok());
/// ```
pub fn simple_transition<C>(
    event: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> TransitionBuilder<C>
where
    C: Methods + 'static,
{
    TransitionBuilder::new(event).from(from).to(to)
}

/// Create a transition gated by guard conditions.
///
/// # Example
///
/// ```
/// use turnstile::builder::guarded_transition;
///
/// let open = guarded_transition::<()>("open", "closed", "open", "is_unlocked");
/// assert!(open.build().is_ok());
/// ```
pub fn guarded_transition<C>(
    event: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
    guard: impl Into<CallbackList<C, bool>>,
) -> TransitionBuilder<C>
where
    C: Methods + 'static,
{
    TransitionBuilder::new(event).from(from).to(to).guard(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn simple_transition_builds() {
        let def = simple_transition::<()>("toggle", "off", "on").build().unwrap();

        assert_eq!(def.event(), "toggle");
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let mut machine = StateMachineBuilder::<()>::new()
            .state(State::new("closed"))
            .state(State::new("open"))
            .initial("closed")
            .transition(guarded_transition(
                "open",
                "closed",
                "open",
                crate::callback::Callback::bare(|| false),
            ))
            .build()
            .unwrap()
            .instantiate(())
            .unwrap();

        assert!(machine.fire("open").is_err());
        assert!(machine.is("closed"));
    }
}
