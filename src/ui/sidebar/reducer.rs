use crate::ui::mvi::{Component, Immutable, NoGlobal, Reducer, Update};
use crate::ui::sidebar::intent::SidebarIntent;
use crate::ui::sidebar::state::{SidebarLink, SidebarState};
use crate::ui::sidebar::view::{sidebar_view, SidebarView};

pub struct SidebarReducer;

impl Reducer for SidebarReducer {
    type State = SidebarState;
    type Intent = SidebarIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let is_open = match intent {
            SidebarIntent::Toggle => !state.is_open,
            SidebarIntent::SetOpen(open) => open,
        };
        SidebarState { is_open, ..state }
    }
}

/// Update step for composition. Keeps the input snapshot when the intent
/// changes nothing.
pub fn update(
    state: Immutable<SidebarState>,
    intent: SidebarIntent,
) -> Update<SidebarState, SidebarIntent> {
    let next = SidebarReducer::reduce(SidebarState::clone(&state), intent);
    if next == *state {
        Update::new(state)
    } else {
        Update::new(Immutable::new(next))
    }
}

/// Menu sidebar component. Never emits global messages.
pub struct MenuSidebar;

impl Component for MenuSidebar {
    type Params = Vec<SidebarLink>;
    type State = SidebarState;
    type Intent = SidebarIntent;
    type Global = NoGlobal;
    type View = SidebarView;

    fn init(&self, links: Vec<SidebarLink>) -> SidebarState {
        SidebarState::new(links)
    }

    fn update(
        &self,
        state: Immutable<SidebarState>,
        intent: SidebarIntent,
    ) -> Update<SidebarState, SidebarIntent> {
        update(state, intent)
    }

    fn view(&self, state: &SidebarState) -> SidebarView {
        sidebar_view(state)
    }
}
