//! Onboarding Commands
//!
//! First-launch capture of the user's name and email.

use crate::domain::{is_valid_email, is_valid_first_name};
use crate::error::{PrefsError, PrefsResult};
use crate::repository::{KEY_EMAIL, KEY_FIRST_NAME, KEY_LOGGED_IN, KEY_ONBOARDING_COMPLETED};
use crate::session::AppSession;

/// Check the onboarding form; the "Next" button is enabled only when this passes
pub fn validate_onboarding(first_name: &str, email: &str) -> PrefsResult<()> {
    if !is_valid_first_name(first_name) {
        return Err(PrefsError::InvalidFirstName);
    }
    if !is_valid_email(email) {
        return Err(PrefsError::InvalidEmail);
    }
    Ok(())
}

/// Whether the app should start on the home screen
pub async fn is_onboarding_completed(session: &AppSession) -> PrefsResult<bool> {
    let flag = session.prefs().get(KEY_ONBOARDING_COMPLETED).await?;
    Ok(flag.as_deref() == Some("true"))
}

/// Store the onboarding answers and mark onboarding as done
pub async fn complete_onboarding(
    session: &AppSession,
    first_name: &str,
    email: &str,
) -> PrefsResult<()> {
    validate_onboarding(first_name, email)?;

    let prefs = session.prefs();
    prefs.set(KEY_FIRST_NAME, first_name).await?;
    prefs.set(KEY_EMAIL, email).await?;
    prefs.set(KEY_LOGGED_IN, "true").await?;
    prefs.set(KEY_ONBOARDING_COMPLETED, "true").await?;

    log::info!("Onboarding completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_session, FakeRemote};
    use std::sync::Arc;

    #[test]
    fn test_validate_onboarding() {
        assert!(validate_onboarding("Tilly", "tilly@littlelemon.com").is_ok());
        assert_eq!(
            validate_onboarding(" ", "tilly@littlelemon.com"),
            Err(PrefsError::InvalidFirstName)
        );
        assert_eq!(validate_onboarding("Tilly", "tilly"), Err(PrefsError::InvalidEmail));
    }

    #[tokio::test]
    async fn test_complete_onboarding_sets_flag() {
        let session = test_session(Arc::new(FakeRemote::failing())).await;
        assert!(!is_onboarding_completed(&session).await.unwrap());

        complete_onboarding(&session, "Tilly", "tilly@littlelemon.com")
            .await
            .unwrap();

        assert!(is_onboarding_completed(&session).await.unwrap());
        let profile = session.profiles().load().await.unwrap();
        assert_eq!(profile.first_name, "Tilly");
        assert_eq!(profile.email, "tilly@littlelemon.com");
    }

    #[tokio::test]
    async fn test_invalid_onboarding_stores_nothing() {
        let session = test_session(Arc::new(FakeRemote::failing())).await;

        let result = complete_onboarding(&session, "Tilly", "not-an-email").await;
        assert_eq!(result, Err(PrefsError::InvalidEmail));
        assert!(!is_onboarding_completed(&session).await.unwrap());
        assert_eq!(session.prefs().get(KEY_FIRST_NAME).await.unwrap(), None);
    }
}
