//! App-wide state shared with every page at init.

use serde::Serialize;

use crate::api::{User, UserType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SharedState {
    pub session: Option<Session>,
}

impl SharedState {
    pub fn signed_in(user: User) -> Self {
        Self {
            session: Some(Session { user }),
        }
    }

    pub fn session_user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }
}

/// The session user, if there is one and their type is among `allowed`.
pub fn is_user_type<'a>(shared: &'a SharedState, allowed: &[UserType]) -> Option<&'a User> {
    shared
        .session_user()
        .filter(|user| allowed.contains(&user.user_type))
}
