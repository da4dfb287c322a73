pub mod mvi;
pub mod nav;
pub mod org_edit;
pub mod org_form;
pub mod page;
pub mod sidebar;
