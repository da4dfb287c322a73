use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarIntent {
    Toggle,
    SetOpen(bool),
}

impl Intent for SidebarIntent {}
