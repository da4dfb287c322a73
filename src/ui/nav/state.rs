use serde::Serialize;

use crate::ui::mvi::UiState;

/// Main navigation bar. `is_open` drives the collapsed menu on narrow
/// layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub is_open: bool,
}

impl UiState for NavState {}
