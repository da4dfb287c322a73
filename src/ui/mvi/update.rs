//! Result of one update step.

use std::fmt;

use super::intent::NoGlobal;
use super::state::Immutable;
use super::task::Task;

/// The next state plus the tasks to run once it has been applied, in order.
pub struct Update<S, M, G = NoGlobal> {
    pub state: Immutable<S>,
    pub tasks: Vec<Task<S, M, G>>,
}

impl<S, M, G> Update<S, M, G> {
    pub fn new(state: Immutable<S>) -> Self {
        Self {
            state,
            tasks: Vec::new(),
        }
    }

    pub fn with_task(state: Immutable<S>, task: Task<S, M, G>) -> Self {
        Self {
            state,
            tasks: vec![task],
        }
    }

    /// Append a task after the ones already queued.
    pub fn and_then(mut self, task: Task<S, M, G>) -> Self {
        self.tasks.push(task);
        self
    }

    /// Transform the next state, keeping the tasks.
    pub fn map_state(mut self, f: impl FnOnce(Immutable<S>) -> Immutable<S>) -> Self {
        self.state = f(self.state);
        self
    }

    pub fn into_parts(self) -> (Immutable<S>, Vec<Task<S, M, G>>) {
        (self.state, self.tasks)
    }
}

impl<S, M, G> From<Immutable<S>> for Update<S, M, G> {
    fn from(state: Immutable<S>) -> Self {
        Self::new(state)
    }
}

impl<S: fmt::Debug, M, G> fmt::Debug for Update<S, M, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Update")
            .field("state", &self.state)
            .field("tasks", &self.tasks.len())
            .finish()
    }
}
