use crate::ui::mvi::Intent;
use crate::ui::org_form::OrgFormIntent;
use crate::ui::sidebar::SidebarIntent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgEditIntent {
    OrgForm(OrgFormIntent),
    /// Refetch the organization, then open the form.
    StartEditing,
    /// Close the form and discard unsaved edits.
    CancelEditing,
    SaveChanges,
    Deactivate,
    Sidebar(SidebarIntent),
}

impl Intent for OrgEditIntent {}
