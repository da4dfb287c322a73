//! Sidebar for the vendor profile pages.

use crate::api::User;
use crate::route::{ProfileTab, Route};
use crate::ui::sidebar::state::{SidebarLink, SidebarState};

fn link(user: &User, tab: ProfileTab, active: ProfileTab) -> SidebarLink {
    let (text, icon) = match tab {
        ProfileTab::Profile => ("Profile", "user"),
        ProfileTab::Organizations => ("Organizations", "building"),
        ProfileTab::Notifications => ("Notifications", "bell"),
        ProfileTab::AcceptedPolicies => ("Accepted Policies, Terms & Agreements", "balance-scale"),
    };
    SidebarLink {
        text: text.to_string(),
        icon,
        route: Route::UserProfile { user_id: user.id, tab },
        active: tab == active,
    }
}

/// Menu for `user`'s profile as seen by `viewer`. Notifications and
/// accepted policies are only listed on the viewer's own profile.
pub fn make_sidebar(user: &User, viewer: &User, active: ProfileTab) -> SidebarState {
    let own_profile = user.id == viewer.id;
    let tabs = [
        ProfileTab::Profile,
        ProfileTab::Organizations,
        ProfileTab::Notifications,
        ProfileTab::AcceptedPolicies,
    ];
    let links = tabs
        .into_iter()
        .filter(|tab| {
            own_profile || matches!(tab, ProfileTab::Profile | ProfileTab::Organizations)
        })
        .map(|tab| link(user, tab, active))
        .collect();
    SidebarState::new(links)
}
