//! Menu sidebar component.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Links plus the collapsed-menu flag
//! - `intent.rs` - Toggle / SetOpen
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `profile.rs` - Vendor profile menu
//! - `view.rs` - View model

mod intent;
mod profile;
mod reducer;
mod state;
mod view;

pub use intent::SidebarIntent;
pub use profile::make_sidebar;
pub use reducer::{update, MenuSidebar, SidebarReducer};
pub use state::{SidebarLink, SidebarState};
pub use view::{sidebar_view, SidebarView};
