//! Per-category loading counters.
//!
//! A boolean busy flag races to `false` when two requests of the same kind
//! overlap and the first one finishes. A counter does not: each start is
//! matched by one stop, and the category is loading while any is pending.

use serde::Serialize;

use super::state::Immutable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Loading(u32);

impl Loading {
    pub fn start(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Floored at zero.
    pub fn stop(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn count(self) -> u32 {
        self.0
    }

    pub fn is_loading(self) -> bool {
        self.0 > 0
    }
}

/// Accessor for one loading category inside a state struct.
pub type LoadingField<S> = fn(&mut S) -> &mut Loading;

pub fn start_loading<S: Clone>(state: &Immutable<S>, field: LoadingField<S>) -> Immutable<S> {
    state.with(|s| {
        let counter = field(s);
        *counter = counter.start();
    })
}

pub fn stop_loading<S: Clone>(state: &Immutable<S>, field: LoadingField<S>) -> Immutable<S> {
    state.with(|s| {
        let counter = field(s);
        *counter = counter.stop();
    })
}
