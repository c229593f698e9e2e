// Pure decision function for returning the pass.
//
// Rules, checked in order
// - The pass must be out.
// - The identifier must be present and equal the active session's identifier.
// - When tokens are required and both the stored and presented tokens exist, they must match.
//   A session started without a token is never location-checked.
// On success the log entry is stamped with the station's current location name.

use crate::modules::hall_pass::core::events::PassEnded;
use crate::modules::hall_pass::core::ledger::LogEntry;
use crate::modules::hall_pass::core::settings::Settings;
use crate::modules::hall_pass::core::state::PassState;
use crate::modules::hall_pass::use_cases::end_pass::command::EndPass;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EndError {
    #[error("the pass is not out")]
    NotOccupied,
    #[error("an identifier is required")]
    MissingIdentifier,
    #[error("this pass was taken by a different identifier")]
    IdentifierMismatch,
    #[error("the location scan does not match where the pass was taken")]
    LocationMismatch,
}

pub fn decide_end_pass(
    state: &PassState,
    settings: &Settings,
    command: EndPass,
    now: i64,
) -> Result<PassEnded, EndError> {
    let Some(session) = state.active_session() else {
        return Err(EndError::NotOccupied);
    };
    if command.id.is_empty() {
        return Err(EndError::MissingIdentifier);
    }
    if command.id != session.id {
        return Err(EndError::IdentifierMismatch);
    }
    if settings.require_location_token {
        if let (Some(stored), Some(presented)) = (&session.location_token, &command.location_token)
        {
            if stored != presented {
                return Err(EndError::LocationMismatch);
            }
        }
    }
    Ok(PassEnded {
        entry: LogEntry {
            id: session.id.clone(),
            name: session.name.clone(),
            start_time: session.start_time,
            end_time: now,
            duration_ms: now.saturating_sub(session.start_time),
            location_name: settings.location_name.clone(),
        },
    })
}
