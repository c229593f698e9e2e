// Pure decision function for taking the pass.
//
// Rules, checked in order
// - The pass must be vacant.
// - The identifier must be present.
// - A location token must be present when the station requires one.
// Any identifier may start, known to the roster or not. Unknown ones are labelled `Unknown`.

use crate::modules::hall_pass::core::events::PassStarted;
use crate::modules::hall_pass::core::roster::Roster;
use crate::modules::hall_pass::core::session::Session;
use crate::modules::hall_pass::core::settings::Settings;
use crate::modules::hall_pass::core::state::PassState;
use crate::modules::hall_pass::use_cases::start_pass::command::StartPass;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StartError {
    #[error("the pass is already out")]
    AlreadyOccupied,
    #[error("an identifier is required")]
    MissingIdentifier,
    #[error("this station requires a location scan")]
    MissingLocationToken,
}

pub fn decide_start_pass(
    state: &PassState,
    settings: &Settings,
    roster: &Roster,
    command: StartPass,
    now: i64,
) -> Result<PassStarted, StartError> {
    if state.is_occupied() {
        return Err(StartError::AlreadyOccupied);
    }
    if command.id.is_empty() {
        return Err(StartError::MissingIdentifier);
    }
    if settings.require_location_token && command.location_token.is_none() {
        return Err(StartError::MissingLocationToken);
    }
    let name = roster.resolve_name(&command.id).to_string();
    Ok(PassStarted {
        session: Session {
            id: command.id,
            name,
            location_token: command.location_token,
            start_time: now,
        },
    })
}
