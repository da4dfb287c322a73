use serde::Serialize;

use crate::route::Route;
use crate::session::Session;
use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::reducer::NavReducer;
use crate::ui::nav::state::NavState;

pub const BRAND: &str = "Digital Marketplace";

/// What the navigation bar is rendered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavProps {
    pub active_route: Route,
    pub session: Option<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub text: String,
    /// `None` for the inert user-name label.
    pub route: Option<Route>,
    pub active: bool,
    pub disabled: bool,
    /// Rendered as a button rather than a plain link.
    pub button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavView {
    pub brand: &'static str,
    pub brand_route: Route,
    pub is_open: bool,
    pub contextual_links: Vec<NavLink>,
    pub auth_links: Vec<NavLink>,
}

fn link(text: impl Into<String>, route: Route, active: bool) -> NavLink {
    NavLink {
        text: text.into(),
        route: Some(route),
        active,
        disabled: false,
        button: false,
    }
}

fn contextual_links(props: &NavProps) -> Vec<NavLink> {
    vec![link("Home", Route::Landing, props.active_route == Route::Landing)]
}

fn auth_links(props: &NavProps) -> Vec<NavLink> {
    match &props.session {
        Some(session) => vec![
            NavLink {
                text: session.user.name.clone(),
                route: None,
                active: false,
                disabled: true,
                button: false,
            },
            link("Sign Out", Route::SignOut, false),
        ],
        None => vec![NavLink {
            button: true,
            ..link("Sign In", Route::SignIn, false)
        }],
    }
}

pub fn nav_view(state: &NavState, props: &NavProps) -> NavView {
    NavView {
        brand: BRAND,
        brand_route: Route::Landing,
        is_open: state.is_open,
        contextual_links: contextual_links(props),
        auth_links: auth_links(props),
    }
}

/// Follow a link: the collapsed menu closes and the link's route, if any,
/// is where to go next. Disabled links do nothing.
pub fn click(state: NavState, link: &NavLink) -> (NavState, Option<Route>) {
    if link.disabled {
        return (state, None);
    }
    (
        NavReducer::reduce(state, NavIntent::Toggle(Some(false))),
        link.route.clone(),
    )
}
