use serde::{Deserialize, Serialize};

pub type EventName = String;

/// The explicit result of a vault transition.
///
/// Every submission returns an `Outcome` instead of panicking or throwing:
/// control flow is data the caller can match on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// Proceed with the new state (Linear flow)
    Next(T),

    /// Proceed with the new state and signal a side-effect event.
    /// The event is fire-and-forget: whoever handles it must not feed
    /// anything back into the state.
    Emit(EventName, T),

    /// The transition was refused; the state is unchanged.
    Fault(E),
}

impl<T, E> Outcome<T, E> {
    pub fn next(state: T) -> Self {
        Outcome::Next(state)
    }

    pub fn emit(event: impl Into<EventName>, state: T) -> Self {
        Outcome::Emit(event.into(), state)
    }

    pub fn fault(err: E) -> Self {
        Outcome::Fault(err)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Outcome<U, E> {
        match self {
            Outcome::Next(t) => Outcome::Next(op(t)),
            Outcome::Emit(evt, t) => Outcome::Emit(evt, op(t)),
            Outcome::Fault(e) => Outcome::Fault(e),
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault(_))
    }

    /// The carried state, if the transition was accepted.
    pub fn state(&self) -> Option<&T> {
        match self {
            Outcome::Next(t) | Outcome::Emit(_, t) => Some(t),
            Outcome::Fault(_) => None,
        }
    }

    pub fn event(&self) -> Option<&str> {
        match self {
            Outcome::Emit(evt, _) => Some(evt.as_str()),
            _ => None,
        }
    }
}
