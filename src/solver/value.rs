/// The base trait for anything usable as a variable identifier.
///
/// Only identity matters for a variable: it must be cloneable, debuggable,
/// equatable, and hashable. This is a marker trait, so any type satisfying
/// these bounds implements `VariableKey`.
pub trait VariableKey: Clone + Eq + std::hash::Hash + std::fmt::Debug + 'static {}
impl<T> VariableKey for T where T: Clone + Eq + std::hash::Hash + std::fmt::Debug + 'static {}

/// The base trait for anything usable as a domain value.
///
/// Values need structural equality and nothing more; the engine never orders
/// them beyond the caller-supplied domain order. This is a marker trait, so
/// any type satisfying these bounds implements `ValueEquality`.
pub trait ValueEquality: Clone + PartialEq + std::fmt::Debug + 'static {}
impl<T> ValueEquality for T where T: Clone + PartialEq + std::fmt::Debug + 'static {}
