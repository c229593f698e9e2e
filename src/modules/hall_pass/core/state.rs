use crate::modules::hall_pass::core::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PassState {
    #[default]
    Vacant,
    Occupied(Session),
}

impl PassState {
    pub fn from_session(session: Option<Session>) -> Self {
        session.map_or(PassState::Vacant, PassState::Occupied)
    }

    pub fn active_session(&self) -> Option<&Session> {
        match self {
            PassState::Vacant => None,
            PassState::Occupied(session) => Some(session),
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, PassState::Occupied(_))
    }
}
