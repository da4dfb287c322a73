//! Two-channel dispatch handle handed to tasks and child components.

use std::fmt;
use std::sync::Arc;

use super::intent::NoGlobal;

type Channel<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Enqueues messages for the runtime.
///
/// `dispatch` feeds the component's own intent type; `dispatch_global` feeds
/// the app-wide channel (navigation and the like). Neither call runs an
/// update: the message is queued and processed after the current step.
pub struct Dispatcher<M, G = NoGlobal> {
    local: Channel<M>,
    global: Channel<G>,
}

impl<M: 'static, G: 'static> Dispatcher<M, G> {
    pub fn new(
        local: impl Fn(M) + Send + Sync + 'static,
        global: impl Fn(G) + Send + Sync + 'static,
    ) -> Self {
        Self {
            local: Arc::new(local),
            global: Arc::new(global),
        }
    }

    /// A dispatcher that drops everything it is given.
    pub fn detached() -> Self {
        Self::new(|_| {}, |_| {})
    }

    pub fn dispatch(&self, msg: M) {
        (self.local)(msg)
    }

    pub fn dispatch_global(&self, msg: G) {
        (self.global)(msg)
    }

    /// Child dispatcher whose local messages are wrapped into this one's.
    pub fn map<C: 'static>(&self, wrap: impl Fn(C) -> M + Send + Sync + 'static) -> Dispatcher<C, G> {
        let local = Arc::clone(&self.local);
        Dispatcher {
            local: Arc::new(move |msg| local(wrap(msg))),
            global: Arc::clone(&self.global),
        }
    }

    /// Dispatcher whose global messages are converted into this one's.
    pub fn map_global<H: 'static>(
        &self,
        wrap: impl Fn(H) -> G + Send + Sync + 'static,
    ) -> Dispatcher<M, H> {
        let global = Arc::clone(&self.global);
        Dispatcher {
            local: Arc::clone(&self.local),
            global: Arc::new(move |msg| global(wrap(msg))),
        }
    }

    /// Same local channel, no global channel.
    pub fn local_only(&self) -> Dispatcher<M, NoGlobal> {
        self.map_global(NoGlobal::absurd)
    }
}

impl<M, G> Clone for Dispatcher<M, G> {
    fn clone(&self) -> Self {
        Self {
            local: Arc::clone(&self.local),
            global: Arc::clone(&self.global),
        }
    }
}

impl<M, G> fmt::Debug for Dispatcher<M, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
