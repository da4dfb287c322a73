use serde::Serialize;

use crate::route::Route;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarLink {
    pub text: String,
    pub icon: &'static str,
    pub route: Route,
    pub active: bool,
}

/// Menu sidebar. `is_open` only matters on narrow layouts, where the menu
/// collapses into a dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarState {
    pub links: Vec<SidebarLink>,
    pub is_open: bool,
}

impl UiState for SidebarState {}

impl SidebarState {
    pub fn new(links: Vec<SidebarLink>) -> Self {
        Self {
            links,
            is_open: false,
        }
    }

    pub fn active_link(&self) -> Option<&SidebarLink> {
        self.links.iter().find(|link| link.active)
    }
}
