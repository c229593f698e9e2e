use crate::modules::hall_pass::core::events::PassEvent;
use crate::modules::hall_pass::core::state::PassState;

pub fn evolve(state: PassState, event: PassEvent) -> PassState {
    match (state, event) {
        (PassState::Vacant, PassEvent::PassStarted(e)) => PassState::Occupied(e.session),
        (PassState::Occupied(_), PassEvent::PassEnded(_)) => PassState::Vacant,
        (state, _) => state,
    }
}
