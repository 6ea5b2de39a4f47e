pub mod handlers;

use uuid::Uuid;

use crate::errors::AppError;
use crate::fallback::with_fallback;
use crate::models::profile::Profile;
use crate::state::AppState;
use crate::store::placeholder;

/// Loads a profile. A failed read substitutes the stand-in profile; a
/// profile that does not exist is a 404.
pub async fn load_profile(state: &AppState, id: Uuid) -> Result<Profile, AppError> {
    with_fallback("profile store", state.profiles.get_profile(id).await, || {
        Some(placeholder::profile(id))
    })
    .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))
}
