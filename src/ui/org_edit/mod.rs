//! "Edit organization" page.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Page state, loading counters and child lenses
//! - `intent.rs` - Page intents, child intents wrapped
//! - `init.rs` - Session gate and initial fetch
//! - `reducer.rs` - Update step and its async tasks
//! - `view.rs` - View model
//! - `component.rs` - Page handle wiring it all to a runtime

mod component;
mod init;
mod intent;
mod reducer;
mod state;
mod view;

pub use component::{OrgEditPage, OrgEditRuntime};
pub use init::RouteParams;
pub use intent::OrgEditIntent;
pub use state::{OrgEditPageState, OrgEditState};
pub use view::{ButtonView, OrgEditView, SaveBarView};
