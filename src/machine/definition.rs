//! Shared, frozen definition of a machine type.

use crate::callback::Methods;
use crate::core::{Registry, Tiers};
use crate::machine::error::MachineError;
use crate::machine::state_machine::StateMachine;
use std::fmt;
use std::sync::Arc;

type Resolver<C> = Arc<dyn Fn(&C) -> String + Send + Sync>;

/// How an instance picks its first state.
pub enum InitialState<C> {
    /// A fixed state name.
    Named(String),
    /// Computed from the host data once per instance.
    Resolved(Resolver<C>),
}

impl<C> InitialState<C> {
    pub fn resolved<F>(resolve: F) -> Self
    where
        F: Fn(&C) -> String + Send + Sync + 'static,
    {
        Self::Resolved(Arc::new(resolve))
    }

    pub(crate) fn resolve(&self, context: &C) -> String {
        match self {
            Self::Named(name) => name.clone(),
            Self::Resolved(resolve) => resolve(context),
        }
    }
}

impl<C> fmt::Debug for InitialState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Resolved(_) => f.write_str("Resolved(..)"),
        }
    }
}

struct DefinitionInner<C: Methods + 'static> {
    name: String,
    registry: Registry<C>,
    initial: InitialState<C>,
    history_limit: usize,
}

/// The shared tier of a machine type.
///
/// Built once by [`StateMachineBuilder`](crate::StateMachineBuilder) and
/// never mutated afterwards. Cloning is cheap; every instance holds a
/// clone and reads from it.
pub struct MachineDefinition<C: Methods + 'static> {
    inner: Arc<DefinitionInner<C>>,
}

impl<C: Methods + 'static> MachineDefinition<C> {
    pub(crate) fn new(
        name: String,
        registry: Registry<C>,
        initial: InitialState<C>,
        history_limit: usize,
    ) -> Self {
        Self {
            inner: Arc::new(DefinitionInner {
                name,
                registry,
                initial,
                history_limit,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn registry(&self) -> &Registry<C> {
        &self.inner.registry
    }

    pub fn initial(&self) -> &InitialState<C> {
        &self.inner.initial
    }

    /// Transitions each instance keeps in its history.
    pub fn history_limit(&self) -> usize {
        self.inner.history_limit
    }

    /// Names of the shared states in definition order.
    pub fn states(&self) -> Vec<&str> {
        self.inner.registry.states().map(|s| s.name()).collect()
    }

    /// Distinct event names of the shared transitions.
    pub fn events(&self) -> Vec<&str> {
        Tiers::new(None, &self.inner.registry).event_names()
    }

    /// Create a new instance owning `context`.
    pub fn instantiate(&self, context: C) -> Result<StateMachine<C>, MachineError> {
        StateMachine::new(self, context)
    }

    /// Whether two handles point at the same definition.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: Methods + 'static> Clone for MachineDefinition<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Methods + 'static> fmt::Debug for MachineDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineDefinition")
            .field("name", &self.inner.name)
            .field("initial", &self.inner.initial)
            .field("history_limit", &self.inner.history_limit)
            .field("registry", &self.inner.registry)
            .finish()
    }
}
