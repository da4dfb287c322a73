//! Deferred async work produced by an update step.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use super::dispatch::Dispatcher;
use super::intent::NoGlobal;
use super::lens::Lens;
use super::state::Immutable;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

type Transition<S> = Box<dyn FnOnce(Immutable<S>) -> Immutable<S> + Send>;

/// What a finished task writes back.
///
/// The runtime applies it to the state current at the moment the task
/// resolves, which is not necessarily the snapshot the task started from.
pub struct Merge<S> {
    kind: MergeKind<S>,
}

enum MergeKind<S> {
    Keep,
    Replace(Immutable<S>),
    Apply(Transition<S>),
}

impl<S: Send + Sync + 'static> Merge<S> {
    /// Leave the state as it is.
    pub fn keep() -> Self {
        Self {
            kind: MergeKind::Keep,
        }
    }

    /// Overwrite the state with the task's result.
    pub fn replace(state: Immutable<S>) -> Self {
        Self {
            kind: MergeKind::Replace(state),
        }
    }

    /// Run a transition against the latest state.
    pub fn apply(f: impl FnOnce(Immutable<S>) -> Immutable<S> + Send + 'static) -> Self {
        Self {
            kind: MergeKind::Apply(Box::new(f)),
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self.kind, MergeKind::Keep)
    }

    pub fn merge_into(self, latest: Immutable<S>) -> Immutable<S> {
        match self.kind {
            MergeKind::Keep => latest,
            MergeKind::Replace(state) => state,
            MergeKind::Apply(f) => f(latest),
        }
    }

    /// Re-target a child merge at the child's slice of a parent state.
    pub fn lift<P>(self, lens: Lens<P, S>) -> Merge<P>
    where
        P: Clone + Send + Sync + 'static,
    {
        match self.kind {
            MergeKind::Keep => Merge::keep(),
            MergeKind::Replace(child) => Merge::apply(move |parent: Immutable<P>| lens.set(&parent, child)),
            MergeKind::Apply(f) => Merge::apply(move |parent: Immutable<P>| lens.modify(&parent, f)),
        }
    }

    /// Re-target a merge through a partial projection. `project` returns the
    /// slice to transform, or `None` when the slice no longer exists; `embed`
    /// writes the transformed slice back. When the slice is gone the merge is
    /// dropped.
    pub fn lift_partial<P>(
        self,
        project: fn(&P) -> Option<Immutable<S>>,
        embed: fn(&Immutable<P>, Immutable<S>) -> Immutable<P>,
    ) -> Merge<P>
    where
        P: Send + Sync + 'static,
    {
        match self.kind {
            MergeKind::Keep => Merge::keep(),
            MergeKind::Replace(child) => Merge::apply(move |parent: Immutable<P>| {
                match project(&parent) {
                    Some(_) => embed(&parent, child),
                    None => parent,
                }
            }),
            MergeKind::Apply(f) => Merge::apply(move |parent: Immutable<P>| {
                match project(&parent) {
                    Some(current) => embed(&parent, f(current)),
                    None => parent,
                }
            }),
        }
    }
}

impl<S> fmt::Debug for Merge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MergeKind::Keep => "Keep",
            MergeKind::Replace(_) => "Replace",
            MergeKind::Apply(_) => "Apply",
        };
        f.debug_tuple("Merge").field(&kind).finish()
    }
}

type Run<S, M, G> = Box<dyn FnOnce(Immutable<S>, Dispatcher<M, G>) -> BoxFuture<Merge<S>> + Send>;

/// A side effect to run after an update step has been applied.
///
/// The task receives the state as of the moment it starts and a dispatcher;
/// it owns the snapshot only until its future resolves.
pub struct Task<S, M, G = NoGlobal> {
    run: Run<S, M, G>,
}

impl<S, M, G> Task<S, M, G>
where
    S: Send + Sync + 'static,
    M: Send + 'static,
    G: Send + 'static,
{
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: FnOnce(Immutable<S>, Dispatcher<M, G>) -> Fut + Send + 'static,
        Fut: Future<Output = Merge<S>> + Send + 'static,
    {
        Self {
            run: Box::new(move |state, dispatcher| {
                Box::pin(f(state, dispatcher)) as BoxFuture<Merge<S>>
            }),
        }
    }

    /// Task that only transforms whatever state is current when it runs.
    pub fn apply(f: impl FnOnce(Immutable<S>) -> Immutable<S> + Send + 'static) -> Self {
        Self::new(move |_state, _dispatcher| async move { Merge::apply(f) })
    }

    pub fn run(self, state: Immutable<S>, dispatcher: Dispatcher<M, G>) -> BoxFuture<Merge<S>> {
        (self.run)(state, dispatcher)
    }

    /// Lift a child task into a parent sharing the same global channel.
    pub fn lift<P, PM>(self, lens: Lens<P, S>, wrap: fn(M) -> PM) -> Task<P, PM, G>
    where
        P: Clone + Send + Sync + 'static,
        PM: 'static + Send,
    {
        Task::new(move |parent: Immutable<P>, dispatcher: Dispatcher<PM, G>| {
            let child = lens.get(&parent);
            drop(parent);
            let pending = self.run(child, dispatcher.map(wrap));
            async move { pending.await.lift(lens) }
        })
    }
}

impl<S, M> Task<S, M, NoGlobal>
where
    S: Send + Sync + 'static,
    M: Send + 'static,
{
    /// Lift a child task that has no global channel into any parent.
    pub fn lift_local<P, PM, PG>(self, lens: Lens<P, S>, wrap: fn(M) -> PM) -> Task<P, PM, PG>
    where
        P: Clone + Send + Sync + 'static,
        PM: Send + 'static,
        PG: Send + 'static,
    {
        Task::new(move |parent: Immutable<P>, dispatcher: Dispatcher<PM, PG>| {
            let child = lens.get(&parent);
            drop(parent);
            let pending = self.run(child, dispatcher.map(wrap).local_only());
            async move { pending.await.lift(lens) }
        })
    }
}

impl<S, M, G> fmt::Debug for Task<S, M, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").finish_non_exhaustive()
    }
}
