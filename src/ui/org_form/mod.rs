//! Organization form component.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - One value/errors pair per organization attribute
//! - `intent.rs` - Field edits and blur validation
//! - `reducer.rs` - Component impl and update
//! - `persist.rs` - Async save through the organization API
//! - `view.rs` - View model

mod intent;
mod persist;
mod reducer;
mod state;
mod view;

pub use intent::OrgFormIntent;
pub use persist::{persist, ExtraBody, PersistAction, PersistResult};
pub use reducer::{update, OrgForm};
pub use state::{FormField, OrgFormState};
pub use view::{org_form_view, FieldView, OrgFormView};
