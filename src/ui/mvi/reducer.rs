//! Reducer and component traits for MVI architecture.

use super::intent::Intent;
use super::state::{Immutable, UiState};
use super::update::Update;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// The capability set every composable component exposes:
/// `init`, `update`, `view` plus its state and message types.
///
/// `update` may return follow-up [`Task`](super::Task)s; everything else about
/// it is a reducer. `Global` is the app-wide message type the component can
/// emit, or [`NoGlobal`](super::NoGlobal).
pub trait Component {
    type Params;
    type State: UiState;
    type Intent: Intent;
    type Global: Intent;
    type View;

    fn init(&self, params: Self::Params) -> Self::State;

    fn update(
        &self,
        state: Immutable<Self::State>,
        intent: Self::Intent,
    ) -> Update<Self::State, Self::Intent, Self::Global>;

    fn view(&self, state: &Self::State) -> Self::View;
}
