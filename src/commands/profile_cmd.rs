//! Profile Commands
//!
//! Load, edit and persist the user's profile; logout wipes local state.

use crate::domain::{is_valid_phone, Profile};
use crate::error::{PrefsError, PrefsResult};
use crate::session::AppSession;

pub async fn load_profile(session: &AppSession) -> PrefsResult<Profile> {
    session.profiles().load().await
}

/// Persist `profile`. Rejected without writing anything when the phone
/// number is not a valid US number.
pub async fn save_profile(session: &AppSession, profile: &Profile) -> PrefsResult<()> {
    if !is_valid_phone(&profile.phone) {
        return Err(PrefsError::InvalidPhone);
    }
    session.profiles().save(profile).await?;
    log::info!("Profile changes saved");
    Ok(())
}

/// Throw away unsaved edits by reloading what is stored
pub async fn discard_changes(session: &AppSession) -> PrefsResult<Profile> {
    load_profile(session).await
}

pub async fn remove_avatar(session: &AppSession) -> PrefsResult<()> {
    session.profiles().remove_avatar().await
}

/// Clear every preference and the cached menu, and drop the category
/// selection. The next launch starts at onboarding.
pub async fn logout(session: &AppSession) -> PrefsResult<()> {
    session.prefs().clear().await?;
    session.pipeline().reset().await?;
    session.selection().clear();
    log::info!("Logged out; local data cleared");
    Ok(())
}
