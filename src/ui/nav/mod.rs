//! Main navigation bar.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Collapsed-menu flag
//! - `intent.rs` - Toggle
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Links for the active route and session

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::NavState;
pub use view::{click, nav_view, NavLink, NavProps, NavView, BRAND};
