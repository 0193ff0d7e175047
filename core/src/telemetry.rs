//! # Telemetry: Observability Decorators
//!
//! Wrap any [`Transition`] in [`Traced`] to get a span per run and one log
//! line per outcome.

use crate::outcome::Outcome;
use crate::transition::Transition;
use std::fmt::Debug;

/// A wrapper Transition that adds tracing to any inner Transition.
#[derive(Clone)]
pub struct Traced<T> {
    inner: T,
    name: &'static str,
}

impl<T> Traced<T> {
    pub fn new(inner: T, name: &'static str) -> Self {
        Self { inner, name }
    }
}

impl<T, From, To> Transition<From, To> for Traced<T>
where
    T: Transition<From, To>,
    <T as Transition<From, To>>::Error: Debug,
    From: Debug,
    To: Debug,
{
    type Error = <T as Transition<From, To>>::Error;
    type Context = <T as Transition<From, To>>::Context;

    fn run(&self, state: From, ctx: &mut Self::Context) -> Outcome<To, Self::Error> {
        let span = tracing::info_span!("Node", vault.node = %self.name);
        let _entered = span.enter();

        tracing::debug!(?state, "Entering node transition");
        let start = std::time::Instant::now();

        let result = self.inner.run(state, ctx);

        let duration = start.elapsed();
        match &result {
            Outcome::Next(val) => {
                tracing::info!(?val, ?duration, "Transition completed: Next");
            }
            Outcome::Emit(event, val) => {
                tracing::info!(%event, ?val, ?duration, "Transition completed: Emit");
            }
            Outcome::Fault(e) => {
                // Faults here are wrong answers, not system failures.
                tracing::info!(error = ?e, ?duration, "Transition refused: Fault");
            }
        }
        result
    }
}
