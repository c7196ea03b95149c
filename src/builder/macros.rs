//! Macros for ergonomic machine access.

/// Generate an extension trait with one method per event and one
/// predicate per state.
///
/// Event methods fire the event with no arguments; use
/// [`StateMachine::fire_with`](crate::StateMachine::fire_with) to pass
/// arguments. Predicates are true iff the machine is in that state.
///
/// # Example
///
/// ```
/// use turnstile::{machine_methods, State, StateMachineBuilder, TransitionBuilder};
///
/// machine_methods! {
///     pub trait JumperApi {
///         events { jump }
///         states { is_looking => looking, is_falling => falling }
///     }
/// }
///
/// let mut guy = StateMachineBuilder::<()>::new()
///     .state(State::new("looking"))
///     .state(State::new("falling"))
///     .initial("looking")
///     .transition(TransitionBuilder::new("jump").from("looking").to("falling"))
///     .build()
///     .unwrap()
///     .instantiate(())
///     .unwrap();
///
/// assert!(guy.is_looking());
/// guy.jump().unwrap();
/// assert!(guy.is_falling());
/// ```
#[macro_export]
macro_rules! machine_methods {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident {
            $(events { $($event:ident),* $(,)? })?
            $(states { $($predicate:ident => $state:ident),* $(,)? })?
        }
    ) => {
        $(#[$meta])*
        $vis trait $name {
            $($(
                fn $event(&mut self) -> ::std::result::Result<(), $crate::machine::MachineError>;
            )*)?
            $($(
                fn $predicate(&self) -> bool;
            )*)?
        }

        impl<C: $crate::callback::Methods + 'static> $name for $crate::machine::StateMachine<C> {
            $($(
                fn $event(&mut self) -> ::std::result::Result<(), $crate::machine::MachineError> {
                    self.fire(stringify!($event))
                }
            )*)?
            $($(
                fn $predicate(&self) -> bool {
                    self.is(stringify!($state))
                }
            )*)?
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::{StateMachineBuilder, TransitionBuilder};
    use crate::core::State;
    use crate::machine::MachineError;

    machine_methods! {
        trait DoorApi {
            events { open, close }
            states { is_open => open, is_closed => closed }
        }
    }

    machine_methods! {
        trait EventsOnly {
            events { crack }
        }
    }

    #[test]
    fn machine_methods_generates_events_and_predicates() {
        let mut door = StateMachineBuilder::<()>::new()
            .state(State::new("open"))
            .state(State::new("closed"))
            .state(State::new("broken"))
            .initial("closed")
            .transition(TransitionBuilder::new("open").from("closed").to("open"))
            .transition(TransitionBuilder::new("close").from("open").to("closed"))
            .transition(TransitionBuilder::new("crack").from("closed").to("broken"))
            .build()
            .unwrap()
            .instantiate(())
            .unwrap();

        assert!(door.is_closed());
        door.open().unwrap();
        assert!(door.is_open());
        assert!(!door.is_closed());

        assert!(matches!(
            door.crack(),
            Err(MachineError::InvalidTransition { .. })
        ));
        door.close().unwrap();
        door.crack().unwrap();
        assert_eq!(door.current_state(), "broken");
    }
}
