//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the building blocks for unidirectional data flow
//! across composed page components.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ update ──→ State ──→ view
//!    ↑          │
//!    │          └──→ Task ──→ Merge (applied to the latest state)
//!    └──────────────────┘
//! ```
//!
//! - **State**: immutable snapshots behind [`Immutable`], shared structurally
//! - **Intent**: user actions or task results, plus an app-wide global channel
//! - **Update**: next state plus ordered [`Task`]s
//! - **Runtime**: single writer that serializes every state change

mod compose;
mod dispatch;
mod error;
mod intent;
mod lens;
mod loading;
mod path;
mod reducer;
mod runtime;
mod sequence;
mod state;
mod task;
mod tree;
mod update;
mod validation;

pub use compose::{update_component_child, update_global_component_child};
pub use dispatch::Dispatcher;
pub use error::StateError;
pub use intent::{Intent, NoGlobal};
pub use lens::Lens;
pub use loading::{start_loading, stop_loading, Loading, LoadingField};
pub use path::{Path, Seg};
pub use reducer::{Component, Reducer};
pub use runtime::{GlobalSink, RunOutcome, Runtime};
pub use sequence::{Sequence, Ticket};
pub use state::{Immutable, UiState};
pub use task::{BoxFuture, Merge, Task};
pub use tree::Node;
pub use update::Update;
pub use validation::{update_valid, view_valid, with_valid, ValidState, Validation};
