use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Toggle(None) => NavState {
                is_open: !state.is_open,
            },
            NavIntent::Toggle(Some(is_open)) => NavState { is_open },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_without_value_flips() {
        let open = NavReducer::reduce(NavState::default(), NavIntent::Toggle(None));
        assert!(open.is_open);
        assert!(!NavReducer::reduce(open, NavIntent::Toggle(None)).is_open);
    }

    #[test]
    fn toggle_with_value_sets() {
        let state = NavState { is_open: true };
        assert!(NavReducer::reduce(state, NavIntent::Toggle(Some(true))).is_open);
        assert!(!NavReducer::reduce(state, NavIntent::Toggle(Some(false))).is_open);
    }
}
