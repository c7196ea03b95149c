//! Callback references: inline closures or named host methods.

use crate::callback::args::EventArgs;
use crate::callback::error::CallbackError;
use crate::callback::methods::Methods;
use crate::machine::StateMachine;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type MachineFn<C, R> =
    Arc<dyn Fn(&mut StateMachine<C>) -> Result<R, CallbackError> + Send + Sync>;
type MachineArgsFn<C, R> =
    Arc<dyn Fn(&mut StateMachine<C>, &EventArgs) -> Result<R, CallbackError> + Send + Sync>;
type BareFn<R> = Arc<dyn Fn() -> Result<R, CallbackError> + Send + Sync>;

/// A single hook, action or guard.
///
/// Inline callables carry their arity explicitly: they take the machine,
/// the machine plus the event arguments, or nothing at all. A `Method`
/// names a method resolved through [`Methods::call_method`] when invoked.
pub enum Callback<C: Methods + 'static, R> {
    Machine(MachineFn<C, R>),
    MachineWithArgs(MachineArgsFn<C, R>),
    Bare(BareFn<R>),
    Method(String),
}

/// Callback run for its side effects.
pub type Action<C> = Callback<C, ()>;

/// Callback that decides whether a transition may fire.
pub type Condition<C> = Callback<C, bool>;

impl<C: Methods + 'static, R: 'static> Callback<C, R> {
    /// Callable receiving the machine.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut StateMachine<C>) -> R + Send + Sync + 'static,
    {
        Self::Machine(Arc::new(move |machine| Ok(f(machine))))
    }

    /// Callable receiving the machine and the event arguments.
    pub fn with_args<F>(f: F) -> Self
    where
        F: Fn(&mut StateMachine<C>, &EventArgs) -> R + Send + Sync + 'static,
    {
        Self::MachineWithArgs(Arc::new(move |machine, args| Ok(f(machine, args))))
    }

    /// Callable taking no arguments.
    pub fn bare<F>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self::Bare(Arc::new(move || Ok(f())))
    }

    /// Fallible callable receiving the machine and the event arguments.
    ///
    /// Errors are returned to the caller of the event unchanged.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&mut StateMachine<C>, &EventArgs) -> Result<R, CallbackError> + Send + Sync + 'static,
    {
        Self::MachineWithArgs(Arc::new(f))
    }
}

impl<C: Methods + 'static, R> Callback<C, R> {
    /// Reference to a named method on the machine's host data.
    pub fn method(name: impl Into<String>) -> Self {
        Self::Method(name.into())
    }

    /// Short label used in logs.
    pub fn label(&self) -> &str {
        match self {
            Self::Machine(_) => "<fn(machine)>",
            Self::MachineWithArgs(_) => "<fn(machine, args)>",
            Self::Bare(_) => "<fn()>",
            Self::Method(name) => name,
        }
    }
}

impl<C: Methods + 'static, R> Clone for Callback<C, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Machine(f) => Self::Machine(Arc::clone(f)),
            Self::MachineWithArgs(f) => Self::MachineWithArgs(Arc::clone(f)),
            Self::Bare(f) => Self::Bare(Arc::clone(f)),
            Self::Method(name) => Self::Method(name.clone()),
        }
    }
}

impl<C: Methods + 'static, R> fmt::Debug for Callback<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Machine(_) => f.write_str("Callback::Machine(..)"),
            Self::MachineWithArgs(_) => f.write_str("Callback::MachineWithArgs(..)"),
            Self::Bare(_) => f.write_str("Callback::Bare(..)"),
            Self::Method(name) => f.debug_tuple("Callback::Method").field(name).finish(),
        }
    }
}

/// Conversion from a named method's return value to a callback result.
pub trait CallbackOutput: Sized {
    fn from_method(name: &str, value: Value) -> Result<Self, CallbackError>;
}

impl CallbackOutput for () {
    fn from_method(_name: &str, _value: Value) -> Result<Self, CallbackError> {
        Ok(())
    }
}

impl CallbackOutput for bool {
    fn from_method(name: &str, value: Value) -> Result<Self, CallbackError> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(CallbackError::NotBoolean {
                name: name.to_string(),
                value: other,
            }),
        }
    }
}

/// Ordered, possibly single-element sequence of callbacks.
///
/// Every item is invoked in order with the same arguments.
pub struct CallbackList<C: Methods + 'static, R> {
    items: Vec<Callback<C, R>>,
}

/// Enter/exit hooks and transition actions.
pub type Hook<C> = CallbackList<C, ()>;

impl<C: Methods + 'static, R> CallbackList<C, R> {
    pub fn new(items: Vec<Callback<C, R>>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Callback<C, R>> {
        self.items.iter()
    }

    pub(crate) fn extend(&mut self, other: CallbackList<C, R>) {
        self.items.extend(other.items);
    }

    pub(crate) fn push(&mut self, item: Callback<C, R>) {
        self.items.push(item);
    }
}

impl<C: Methods + 'static, R> Default for CallbackList<C, R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<C: Methods + 'static, R> Clone for CallbackList<C, R> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<C: Methods + 'static, R> fmt::Debug for CallbackList<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<C: Methods + 'static, R> From<Callback<C, R>> for CallbackList<C, R> {
    fn from(item: Callback<C, R>) -> Self {
        Self { items: vec![item] }
    }
}

impl<C: Methods + 'static, R> From<Vec<Callback<C, R>>> for CallbackList<C, R> {
    fn from(items: Vec<Callback<C, R>>) -> Self {
        Self { items }
    }
}

impl<C: Methods + 'static, R> From<&str> for CallbackList<C, R> {
    fn from(name: &str) -> Self {
        Self {
            items: vec![Callback::Method(name.to_string())],
        }
    }
}

impl<C: Methods + 'static, R> From<String> for CallbackList<C, R> {
    fn from(name: String) -> Self {
        Self {
            items: vec![Callback::Method(name)],
        }
    }
}

impl<C: Methods + 'static, R> From<Vec<&str>> for CallbackList<C, R> {
    fn from(names: Vec<&str>) -> Self {
        Self {
            items: names
                .into_iter()
                .map(|name| Callback::Method(name.to_string()))
                .collect(),
        }
    }
}
