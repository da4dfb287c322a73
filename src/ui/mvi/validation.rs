//! Helpers for state wrapped in [`Validation`].
//!
//! A page whose preconditions failed at init sits in `Invalid` for good.
//! These helpers make every update, view and metadata function a no-op (or a
//! fallback) in that case, so the page code only ever handles the valid
//! state.

pub use crate::validation::Validation;

use super::dispatch::Dispatcher;
use super::state::{Immutable, UiState};
use super::task::{Merge, Task};
use super::update::Update;

/// Page state that is either a usable snapshot or a terminal error.
pub type ValidState<S, E> = Validation<Immutable<S>, E>;

impl<S, E> UiState for Validation<S, E>
where
    S: UiState,
    E: Clone + PartialEq + Send + Sync + 'static,
{
}

/// Lift an update over the valid state into one over [`ValidState`].
///
/// `Invalid` input comes back unchanged with no tasks. Tasks of the inner
/// update run against the valid snapshot; if the page has become invalid by
/// the time one of them resolves, its merge is dropped.
pub fn update_valid<S, E, M, G, F>(
    f: F,
) -> impl Fn(Immutable<ValidState<S, E>>, M) -> Update<ValidState<S, E>, M, G>
where
    F: Fn(Immutable<S>, M) -> Update<S, M, G>,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
    M: Send + 'static,
    G: Send + 'static,
{
    move |state: Immutable<ValidState<S, E>>, msg: M| {
        let inner = match &*state {
            Validation::Valid(inner) => inner.clone(),
            Validation::Invalid(_) => return Update::new(state),
        };
        let (next, tasks) = f(inner.clone(), msg).into_parts();
        let state = if Immutable::ptr_eq(&inner, &next) {
            state
        } else {
            Immutable::new(Validation::Valid(next))
        };
        Update {
            state,
            tasks: tasks.into_iter().map(lift_task).collect(),
        }
    }
}

fn lift_task<S, E, M, G>(task: Task<S, M, G>) -> Task<ValidState<S, E>, M, G>
where
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
    M: Send + 'static,
    G: Send + 'static,
{
    Task::new(move |outer: Immutable<ValidState<S, E>>, dispatcher: Dispatcher<M, G>| {
        let pending = match &*outer {
            Validation::Valid(inner) => Some(task.run(inner.clone(), dispatcher)),
            Validation::Invalid(_) => None,
        };
        async move {
            match pending {
                Some(pending) => pending
                    .await
                    .lift_partial(project::<S, E>, embed::<S, E>),
                None => Merge::keep(),
            }
        }
    })
}

fn project<S, E>(state: &ValidState<S, E>) -> Option<Immutable<S>> {
    state.as_valid().cloned()
}

fn embed<S, E>(_: &Immutable<ValidState<S, E>>, inner: Immutable<S>) -> Immutable<ValidState<S, E>> {
    Immutable::new(Validation::Valid(inner))
}

/// Derive a view only from a valid state.
pub fn view_valid<S, E, V>(state: &Validation<S, E>, f: impl FnOnce(&S) -> V) -> Option<V> {
    state.as_valid().map(f)
}

/// Derive a value from a valid state, or fall back when invalid.
pub fn with_valid<S, E, V>(state: &Validation<S, E>, f: impl FnOnce(&S) -> V, fallback: V) -> V {
    match state {
        Validation::Valid(inner) => f(inner),
        Validation::Invalid(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Msg {
        Bump,
        BumpLater,
    }

    fn inner_update(state: Immutable<u32>, msg: Msg) -> Update<u32, Msg> {
        match msg {
            Msg::Bump => Update::new(Immutable::new(*state + 1)),
            Msg::BumpLater => Update::with_task(
                state,
                Task::apply(|n: Immutable<u32>| Immutable::new(*n + 100)),
            ),
        }
    }

    #[test]
    fn invalid_state_is_inert() {
        let update = update_valid::<_, &'static str, _, _, _>(inner_update);
        let state: Immutable<ValidState<u32, &'static str>> =
            Immutable::new(Validation::Invalid("gone"));

        for msg in [Msg::Bump, Msg::BumpLater] {
            let (next, tasks) = update(state.clone(), msg).into_parts();
            assert!(Immutable::ptr_eq(&state, &next));
            assert!(tasks.is_empty());
        }
    }

    #[test]
    fn unchanged_inner_state_keeps_root() {
        let update = update_valid::<_, (), _, _, _>(inner_update);
        let state: Immutable<ValidState<u32, ()>> =
            Immutable::new(Validation::Valid(Immutable::new(1)));

        let (next, tasks) = update(state.clone(), Msg::BumpLater).into_parts();
        assert!(Immutable::ptr_eq(&state, &next));
        assert_eq!(tasks.len(), 1);

        let (next, _) = update(state.clone(), Msg::Bump).into_parts();
        assert!(!Immutable::ptr_eq(&state, &next));
    }

    #[test]
    fn valid_state_delegates() {
        let update = update_valid::<_, (), _, _, _>(inner_update);
        let state: Immutable<ValidState<u32, ()>> =
            Immutable::new(Validation::Valid(Immutable::new(1)));

        let (next, tasks) = update(state, Msg::Bump).into_parts();
        assert_eq!(next.as_valid().map(|n| **n), Some(2));
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn lifted_task_merges_into_valid_state() {
        let update = update_valid::<_, (), _, _, _>(inner_update);
        let state: Immutable<ValidState<u32, ()>> =
            Immutable::new(Validation::Valid(Immutable::new(1)));

        let (next, mut tasks) = update(state, Msg::BumpLater).into_parts();
        let task = tasks.remove(0);
        let merge = task.run(next.clone(), Dispatcher::detached()).await;
        let merged = merge.merge_into(next);
        assert_eq!(merged.as_valid().map(|n| **n), Some(101));
    }

    #[tokio::test]
    async fn lifted_task_is_dropped_once_invalid() {
        let update = update_valid::<_, (), _, _, _>(inner_update);
        let state: Immutable<ValidState<u32, ()>> =
            Immutable::new(Validation::Valid(Immutable::new(1)));

        let (next, mut tasks) = update(state, Msg::BumpLater).into_parts();
        let merge = tasks.remove(0).run(next, Dispatcher::detached()).await;
        let gone: Immutable<ValidState<u32, ()>> = Immutable::new(Validation::Invalid(()));
        let merged = merge.merge_into(gone.clone());
        assert!(Immutable::ptr_eq(&gone, &merged));
    }

    #[test]
    fn view_and_metadata_helpers() {
        let valid: Validation<u32, ()> = Validation::Valid(3);
        let invalid: Validation<u32, ()> = Validation::Invalid(());

        assert_eq!(view_valid(&valid, |n| n * 2), Some(6));
        assert_eq!(view_valid(&invalid, |n| n * 2), None);
        assert_eq!(with_valid(&valid, |n| n.to_string(), "fallback".into()), "3");
        assert_eq!(with_valid(&invalid, |n| n.to_string(), "fallback".into()), "fallback");
    }
}
