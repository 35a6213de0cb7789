pub mod achievements;
pub mod athletes;
pub mod notifications;
pub mod performance_tests;
pub mod scouts;
pub mod verification;

use storage::models::Athlete;

use crate::error::WebError;
use crate::middleware::session::SessionContext;

/// Only the owning account may act on an athlete's profile.
pub fn ensure_owner(athlete: &Athlete, session: &SessionContext) -> Result<(), WebError> {
    if athlete.user_id == session.user_id {
        Ok(())
    } else {
        Err(WebError::Forbidden(
            "Athlete profile belongs to another account".to_string(),
        ))
    }
}
