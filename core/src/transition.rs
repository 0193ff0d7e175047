use crate::outcome::Outcome;

/// The contract for a typed state transition.
///
/// `Transition` converts state `From` into `Outcome<To, Error>`, recording
/// whatever it observes into its `Context`. It is deliberately synchronous:
/// a transition must finish before the next event is accepted, and any async
/// follow-up is signalled through `Outcome::Emit` for the caller to spawn.
pub trait Transition<From, To> {
    /// Domain-specific error type (e.g. `VaultError`)
    type Error;

    /// Mutable record the transition writes into (transcript, counters, ...)
    type Context;

    /// Execute the transition
    fn run(&self, state: From, ctx: &mut Self::Context) -> Outcome<To, Self::Error>;
}
