use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// `None` flips the menu, `Some(open)` sets it.
    Toggle(Option<bool>),
}

impl Intent for NavIntent {}
