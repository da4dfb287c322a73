use serde::Serialize;

use crate::ui::sidebar::state::{SidebarLink, SidebarState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView {
    pub links: Vec<SidebarLink>,
    pub is_open: bool,
    /// Text shown on the collapsed dropdown toggle.
    pub toggle_label: String,
}

pub fn sidebar_view(state: &SidebarState) -> SidebarView {
    SidebarView {
        links: state.links.clone(),
        is_open: state.is_open,
        toggle_label: state
            .active_link()
            .map(|link| link.text.clone())
            .unwrap_or_else(|| "Menu".to_string()),
    }
}
