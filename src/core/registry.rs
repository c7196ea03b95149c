//! Storage for states and transitions.
//!
//! A machine sees two tiers: the shared tier frozen into its
//! [`MachineDefinition`](crate::machine::MachineDefinition) and the
//! instance tier filled by `add_state`/`add_transition`. Each tier is a
//! [`Registry`]; [`Tiers`] is the read view over both, with the instance
//! tier winning on name collisions.

use crate::builder::TransitionDef;
use crate::callback::Methods;
use crate::core::error::DefinitionError;
use crate::core::state::State;
use crate::core::transition::Transition;
use std::fmt;
use std::sync::Arc;

/// One tier of state and transition definitions.
pub struct Registry<C: Methods + 'static> {
    states: Vec<Arc<State<C>>>,
    transitions: Vec<Arc<Transition<C>>>,
}

impl<C: Methods + 'static> Registry<C> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Insert a state owned by this tier.
    ///
    /// Fails if this tier already owns a state with the same name. Shadowing
    /// a state of another tier is allowed.
    pub fn define_state(&mut self, state: State<C>) -> Result<Arc<State<C>>, DefinitionError> {
        if self.state(state.name()).is_some() {
            return Err(DefinitionError::DuplicateState {
                name: state.name().to_string(),
            });
        }

        let state = Arc::new(state);
        self.states.push(Arc::clone(&state));
        Ok(state)
    }

    /// Resolve a transition definition and append it to this tier.
    ///
    /// State names are resolved against this tier first, then `shared`.
    pub fn define_transition(
        &mut self,
        definition: TransitionDef<C>,
        shared: Option<&Registry<C>>,
    ) -> Result<Arc<Transition<C>>, DefinitionError> {
        let transition = {
            let tiers = Tiers::new(shared, self);
            definition.resolve(|name| tiers.lookup_state(name).map(Arc::clone))?
        };

        let transition = Arc::new(transition);
        self.transitions.push(Arc::clone(&transition));
        Ok(transition)
    }

    /// State owned by this tier.
    pub fn state(&self, name: &str) -> Option<&Arc<State<C>>> {
        self.states.iter().find(|state| state.name() == name)
    }

    pub fn states(&self) -> impl Iterator<Item = &Arc<State<C>>> {
        self.states.iter()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &Arc<Transition<C>>> {
        self.transitions.iter()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl<C: Methods + 'static> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Methods + 'static> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("states", &self.states)
            .field("transitions", &self.transitions)
            .finish()
    }
}

/// Read view over the shared tier and an instance tier.
pub struct Tiers<'a, C: Methods + 'static> {
    shared: Option<&'a Registry<C>>,
    local: &'a Registry<C>,
}

impl<'a, C: Methods + 'static> Clone for Tiers<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: Methods + 'static> Copy for Tiers<'a, C> {}

impl<'a, C: Methods + 'static> Tiers<'a, C> {
    pub fn new(shared: Option<&'a Registry<C>>, local: &'a Registry<C>) -> Self {
        Self { shared, local }
    }

    /// Find a state by name, instance tier first.
    pub fn lookup_state(self, name: &str) -> Result<&'a Arc<State<C>>, DefinitionError> {
        self.local
            .state(name)
            .or_else(|| self.shared.and_then(|shared| shared.state(name)))
            .ok_or_else(|| DefinitionError::UnknownState {
                name: name.to_string(),
            })
    }

    /// Union of both tiers without duplicate names.
    ///
    /// Shared states come first in definition order; an instance state with
    /// the same name takes the shared state's place.
    pub fn all_states(self) -> Vec<&'a Arc<State<C>>> {
        let mut states: Vec<&'a Arc<State<C>>> = self
            .shared
            .into_iter()
            .flat_map(|shared| shared.states())
            .map(|state| self.local.state(state.name()).unwrap_or(state))
            .collect();

        for state in self.local.states() {
            if !states.iter().any(|known| known.name() == state.name()) {
                states.push(state);
            }
        }
        states
    }

    /// Transitions labeled `event`: shared tier first, then instance tier.
    pub fn transitions_for(self, event: &'a str) -> impl Iterator<Item = &'a Arc<Transition<C>>> + 'a {
        self.shared
            .into_iter()
            .flat_map(|shared| shared.transitions())
            .chain(self.local.transitions())
            .filter(move |transition| transition.event() == event)
    }

    /// Distinct event names in definition order.
    pub fn event_names(self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = Vec::new();
        let all = self
            .shared
            .into_iter()
            .flat_map(|shared| shared.transitions())
            .chain(self.local.transitions());

        for transition in all {
            if !names.contains(&transition.event()) {
                names.push(transition.event());
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TransitionBuilder;

    fn def(builder: TransitionBuilder<()>) -> TransitionDef<()> {
        builder.build().unwrap()
    }

    fn shared() -> Registry<()> {
        let mut registry = Registry::new();
        registry.define_state(State::new("looking")).unwrap();
        registry.define_state(State::new("falling")).unwrap();
        registry
            .define_transition(
                def(TransitionBuilder::new("jump").from("looking").to("falling")),
                None,
            )
            .unwrap();
        registry
    }

    #[test]
    fn define_state_rejects_duplicates_in_same_tier() {
        let mut registry = shared();

        let result = registry.define_state(State::new("looking"));

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::DuplicateState {
                name: "looking".to_string()
            }
        );
    }

    #[test]
    fn define_transition_rejects_unknown_states() {
        let mut registry = shared();

        let result = registry.define_transition(
            def(TransitionBuilder::new("land").from("falling").to("squashed")),
            None,
        );

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::UnknownState {
                name: "squashed".to_string()
            }
        );
        assert_eq!(registry.transition_count(), 1);
    }

    #[test]
    fn instance_tier_resolves_against_shared_tier() {
        let shared = shared();
        let mut local = Registry::new();
        local.define_state(State::new("squashed")).unwrap();

        let land = local
            .define_transition(
                def(TransitionBuilder::new("land").from("falling").to("squashed")),
                Some(&shared),
            )
            .unwrap();

        assert_eq!(land.sources().collect::<Vec<_>>(), vec!["falling"]);
        assert_eq!(land.target().name(), "squashed");
        assert_eq!(shared.transition_count(), 1);
    }

    #[test]
    fn instance_tier_may_shadow_shared_state() {
        let shared = shared();
        let mut local = Registry::new();
        local
            .define_state(State::new("falling").on_enter("scream"))
            .unwrap();
        local.define_state(State::new("squashed")).unwrap();

        let tiers = Tiers::new(Some(&shared), &local);
        let names: Vec<&str> = tiers.all_states().iter().map(|s| s.name()).collect();

        assert_eq!(names, vec!["looking", "falling", "squashed"]);
        assert!(tiers.lookup_state("falling").unwrap().enter_hook().is_some());
    }

    #[test]
    fn transitions_for_lists_shared_before_local() {
        let shared = shared();
        let mut local = Registry::new();
        local
            .define_transition(
                def(TransitionBuilder::new("jump").from("falling").to("looking")),
                Some(&shared),
            )
            .unwrap();

        let tiers = Tiers::new(Some(&shared), &local);
        let targets: Vec<&str> = tiers
            .transitions_for("jump")
            .map(|t| t.target().name())
            .collect();

        assert_eq!(targets, vec!["falling", "looking"]);
        assert_eq!(tiers.transitions_for("land").count(), 0);
        // Restartable: a second call sees the same sequence.
        assert_eq!(tiers.transitions_for("jump").count(), 2);
    }

    #[test]
    fn event_names_are_distinct() {
        let shared = shared();
        let mut local = Registry::new();
        local
            .define_transition(
                def(TransitionBuilder::new("jump").from("falling").to("looking")),
                Some(&shared),
            )
            .unwrap();
        local
            .define_transition(
                def(TransitionBuilder::new("rest").from("looking").to("looking")),
                Some(&shared),
            )
            .unwrap();

        let tiers = Tiers::new(Some(&shared), &local);
        assert_eq!(tiers.event_names(), vec!["jump", "rest"]);
    }
}
