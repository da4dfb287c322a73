//! Composition adapters: run a child component's update inside a parent.
//!
//! Both adapters take the child's slice out through a [`Lens`], run the
//! child update on it, put the resulting slice back at the same path and
//! lift the child's tasks so they read and write that slice and dispatch
//! under the parent's intent variant.

use super::intent::NoGlobal;
use super::lens::Lens;
use super::state::Immutable;
use super::update::Update;

/// Delegate to a child that has no global channel.
///
/// The lifted child tasks get a dispatcher without a global channel, so the
/// child cannot emit app-wide messages at all.
pub fn update_component_child<P, C, PM, PG, CM>(
    state: Immutable<P>,
    lens: &Lens<P, C>,
    child_update: impl FnOnce(Immutable<C>, CM) -> Update<C, CM, NoGlobal>,
    child_msg: CM,
    wrap: fn(CM) -> PM,
) -> Update<P, PM, PG>
where
    P: Clone + Send + Sync + 'static,
    C: Send + Sync + 'static,
    CM: Send + 'static,
    PM: Send + 'static,
    PG: Send + 'static,
{
    let (child, tasks) = child_update(lens.get(&state), child_msg).into_parts();
    Update {
        state: lens.set(&state, child),
        tasks: tasks
            .into_iter()
            .map(|task| task.lift_local(lens.clone(), wrap))
            .collect(),
    }
}

/// Delegate to a child that shares the parent's global channel.
///
/// Global messages from the child (navigation, for instance) reach the
/// app-wide channel untouched; only local messages are wrapped.
pub fn update_global_component_child<P, C, PM, G, CM>(
    state: Immutable<P>,
    lens: &Lens<P, C>,
    child_update: impl FnOnce(Immutable<C>, CM) -> Update<C, CM, G>,
    child_msg: CM,
    wrap: fn(CM) -> PM,
) -> Update<P, PM, G>
where
    P: Clone + Send + Sync + 'static,
    C: Send + Sync + 'static,
    CM: Send + 'static,
    PM: Send + 'static,
    G: Send + 'static,
{
    let (child, tasks) = child_update(lens.get(&state), child_msg).into_parts();
    Update {
        state: lens.set(&state, child),
        tasks: tasks
            .into_iter()
            .map(|task| task.lift(lens.clone(), wrap))
            .collect(),
    }
}
