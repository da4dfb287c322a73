//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, form edits)
/// - System events (API responses)
/// - Navigation events (on the global channel)
///
/// Intents are closed enums: a component can only receive the variants it
/// declares.
pub trait Intent: Send + 'static {}

/// Global-channel type for components that never emit app-wide messages.
///
/// It has no values, so a `Dispatcher<M, NoGlobal>` cannot send anything on
/// its global channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoGlobal {}

impl NoGlobal {
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

impl Intent for NoGlobal {}
