//! Single-writer loop that owns a component's state.
//!
//! Every intent, local or global, goes through one queue. The runtime pops a
//! message, runs the update synchronously, publishes the new snapshot and only
//! then starts the update's tasks. Tasks of one update step form a chain: the
//! next one starts after the previous one has resolved and its merge has been
//! applied. Chains of different steps run concurrently.

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinSet};

use super::dispatch::Dispatcher;
use super::intent::NoGlobal;
use super::state::Immutable;
use super::task::{Merge, Task};
use super::update::Update;
use crate::config::RuntimeConfig;
use crate::shutdown::ShutdownHandle;

const TARGET: &str = "marketframe::runtime";

/// Receiver of app-wide messages emitted through `dispatch_global`.
pub trait GlobalSink<G>: Send {
    fn deliver(&mut self, msg: G);
}

impl<G, F> GlobalSink<G> for F
where
    F: FnMut(G) + Send,
{
    fn deliver(&mut self, msg: G) {
        self(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Queue empty and no task in flight.
    Idle,
    ShutDown,
}

enum Envelope<M, G> {
    Local(M),
    Global(G),
}

struct Settled<S, M, G> {
    merge: Merge<S>,
    rest: VecDeque<Task<S, M, G>>,
}

enum Event<S, M, G> {
    Shutdown,
    Message(Envelope<M, G>),
    Settled(Result<Settled<S, M, G>, JoinError>),
}

type UpdateFn<S, M, G> = Box<dyn Fn(Immutable<S>, M) -> Update<S, M, G> + Send>;

pub struct Runtime<S, M, G = NoGlobal> {
    state: Immutable<S>,
    update: UpdateFn<S, M, G>,
    sink: Box<dyn GlobalSink<G>>,
    tx: mpsc::UnboundedSender<Envelope<M, G>>,
    rx: mpsc::UnboundedReceiver<Envelope<M, G>>,
    in_flight: JoinSet<Settled<S, M, G>>,
    /// Chains waiting for an in-flight slot, in start order.
    waiting: VecDeque<VecDeque<Task<S, M, G>>>,
    max_in_flight: usize,
    log_messages: bool,
    published: watch::Sender<Immutable<S>>,
    shutdown: ShutdownHandle,
}

impl<S, M, G> Runtime<S, M, G>
where
    S: Send + Sync + 'static,
    M: Send + fmt::Debug + 'static,
    G: Send + fmt::Debug + 'static,
{
    pub fn new(
        initial: Immutable<S>,
        update: impl Fn(Immutable<S>, M) -> Update<S, M, G> + Send + 'static,
        sink: impl GlobalSink<G> + 'static,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (published, _) = watch::channel(initial.clone());
        Self {
            state: initial,
            update: Box::new(update),
            sink: Box::new(sink),
            tx,
            rx,
            in_flight: JoinSet::new(),
            waiting: VecDeque::new(),
            max_in_flight: usize::MAX,
            log_messages: true,
            published,
            shutdown: ShutdownHandle::never(),
        }
    }

    /// Build a runtime from an async init step.
    ///
    /// `init` gets a dispatcher already wired to this runtime, so anything it
    /// dispatches (a redirect, say) is processed by the first
    /// [`run_until_idle`](Self::run_until_idle). Tasks returned by `init`
    /// are started right away; must be called inside a tokio runtime.
    pub async fn boot<F, Fut>(
        init: F,
        update: impl Fn(Immutable<S>, M) -> Update<S, M, G> + Send + 'static,
        sink: impl GlobalSink<G> + 'static,
    ) -> Self
    where
        F: FnOnce(Dispatcher<M, G>) -> Fut,
        Fut: Future<Output = Update<S, M, G>>,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let (initial, tasks) = init(dispatcher_for(&tx)).await.into_parts();
        let (published, _) = watch::channel(initial.clone());
        let mut runtime = Self {
            state: initial,
            update: Box::new(update),
            sink: Box::new(sink),
            tx,
            rx,
            in_flight: JoinSet::new(),
            waiting: VecDeque::new(),
            max_in_flight: usize::MAX,
            log_messages: true,
            published,
            shutdown: ShutdownHandle::never(),
        };
        runtime.start_chain(tasks.into());
        runtime
    }

    pub fn with_shutdown(mut self, shutdown: ShutdownHandle) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Apply the `[runtime]` config section. Takes effect for chains started
    /// afterwards.
    pub fn with_config(mut self, config: &RuntimeConfig) -> Self {
        self.max_in_flight = config.max_in_flight_tasks.max(1);
        self.log_messages = config.log_messages;
        self
    }

    pub fn dispatcher(&self) -> Dispatcher<M, G> {
        dispatcher_for(&self.tx)
    }

    /// Queue a message. Nothing runs until the loop is driven.
    pub fn dispatch(&self, msg: M) {
        let _ = self.tx.send(Envelope::Local(msg));
    }

    pub fn state(&self) -> Immutable<S> {
        self.state.clone()
    }

    /// Snapshots as they are published, starting with the current one.
    pub fn subscribe(&self) -> watch::Receiver<Immutable<S>> {
        self.published.subscribe()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Chains held back by the in-flight limit.
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Process messages and settle tasks until nothing is left to do.
    ///
    /// On shutdown the tasks still in flight are aborted and their merges
    /// are never applied.
    pub async fn run_until_idle(&mut self) -> RunOutcome {
        let shutdown = self.shutdown.clone();
        loop {
            if shutdown.is_shutting_down() {
                return self.stop();
            }
            if let Ok(envelope) = self.rx.try_recv() {
                self.handle(envelope);
                continue;
            }
            if self.in_flight.is_empty() {
                return RunOutcome::Idle;
            }

            let event = tokio::select! {
                biased;
                _ = shutdown.wait() => Event::Shutdown,
                Some(envelope) = self.rx.recv() => Event::Message(envelope),
                Some(joined) = self.in_flight.join_next() => Event::Settled(joined),
            };
            match event {
                Event::Shutdown => return self.stop(),
                Event::Message(envelope) => self.handle(envelope),
                Event::Settled(joined) => self.settle(joined),
            }
        }
    }

    fn stop(&mut self) -> RunOutcome {
        if !self.in_flight.is_empty() {
            tracing::info!(target: TARGET, aborted = self.in_flight.len(), "runtime shutting down");
        }
        self.in_flight.abort_all();
        self.in_flight.detach_all();
        self.waiting.clear();
        RunOutcome::ShutDown
    }

    fn handle(&mut self, envelope: Envelope<M, G>) {
        match envelope {
            Envelope::Local(msg) => {
                if self.log_messages {
                    tracing::debug!(target: TARGET, intent = ?msg, "update");
                }
                let (next, tasks) = (self.update)(self.state.clone(), msg).into_parts();
                self.commit(next);
                self.start_chain(tasks.into());
            }
            Envelope::Global(msg) => {
                if self.log_messages {
                    tracing::debug!(target: TARGET, global = ?msg, "global");
                }
                self.sink.deliver(msg);
            }
        }
    }

    fn settle(&mut self, joined: Result<Settled<S, M, G>, JoinError>) {
        match joined {
            Ok(Settled { merge, rest }) => {
                if !merge.is_keep() {
                    tracing::trace!(target: TARGET, ?merge, "task settled");
                }
                let next = merge.merge_into(self.state.clone());
                self.commit(next);
                self.start_chain(rest);
            }
            Err(err) => {
                tracing::error!(target: TARGET, error = %err, "task failed, rest of its chain dropped");
            }
        }
        while self.in_flight.len() < self.max_in_flight {
            let Some(chain) = self.waiting.pop_front() else {
                break;
            };
            self.start_chain(chain);
        }
    }

    fn commit(&mut self, next: Immutable<S>) {
        if Immutable::ptr_eq(&self.state, &next) {
            return;
        }
        self.state = next;
        self.published.send_replace(self.state.clone());
    }

    fn start_chain(&mut self, mut chain: VecDeque<Task<S, M, G>>) {
        if chain.is_empty() {
            return;
        }
        if self.in_flight.len() >= self.max_in_flight {
            self.waiting.push_back(chain);
            return;
        }
        let Some(task) = chain.pop_front() else {
            return;
        };
        let pending = task.run(self.state.clone(), self.dispatcher());
        self.in_flight.spawn(async move {
            Settled {
                merge: pending.await,
                rest: chain,
            }
        });
    }
}

fn dispatcher_for<M, G>(tx: &mpsc::UnboundedSender<Envelope<M, G>>) -> Dispatcher<M, G>
where
    M: Send + 'static,
    G: Send + 'static,
{
    let local = tx.clone();
    let global = tx.clone();
    Dispatcher::new(
        move |msg| {
            let _ = local.send(Envelope::Local(msg));
        },
        move |msg| {
            let _ = global.send(Envelope::Global(msg));
        },
    )
}

impl<S, M, G> fmt::Debug for Runtime<S, M, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("in_flight", &self.in_flight.len())
            .finish_non_exhaustive()
    }
}
