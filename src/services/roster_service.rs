use tracing::{debug, info};

use crate::database::RosterStore;
use crate::error::{RosterError, RosterResult};
use crate::models::{ActivityCatalog, MessageResponse};

pub fn list_activities(store: &RosterStore) -> ActivityCatalog {
    store.list_activities()
}

pub fn signup_for_activity(
    store: &RosterStore,
    activity_name: &str,
    email: Option<&str>,
) -> RosterResult<MessageResponse> {
    let email = require_email(email)?;

    match store.enroll(activity_name, email) {
        Ok(enrollment) => {
            info!(
                activity = %activity_name,
                email = %email,
                participants = enrollment.participant_count,
                max_participants = enrollment.max_participants,
                "participant signed up"
            );
            Ok(MessageResponse::new(format!(
                "Signed up {} for {}",
                email, activity_name
            )))
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub fn unregister_participant(
    store: &RosterStore,
    activity_name: &str,
    email: Option<&str>,
) -> RosterResult<MessageResponse> {
    let email = require_email(email)?;

    match store.withdraw(activity_name, email) {
        Ok(enrollment) => {
            info!(
                activity = %activity_name,
                email = %email,
                participants = enrollment.participant_count,
                "participant unregistered"
            );
            Ok(MessageResponse::new(format!(
                "Unregistered {} from {}",
                email, activity_name
            )))
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}

// Presence is the only check; the address is stored exactly as given.
fn require_email(email: Option<&str>) -> RosterResult<&str> {
    email
        .filter(|e| !e.trim().is_empty())
        .ok_or(RosterError::MissingEmail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::CapacityPolicy;

    fn store() -> RosterStore {
        RosterStore::from_seed(CapacityPolicy::Enforce)
    }

    #[test]
    fn signup_message_names_email_and_activity() {
        let store = store();
        let resp = signup_for_activity(&store, "Chess Club", Some("new@x.edu")).unwrap();
        assert_eq!(resp.message, "Signed up new@x.edu for Chess Club");
        assert_eq!(list_activities(&store)["Chess Club"].participants.len(), 3);
    }

    #[test]
    fn unregister_message_names_email_and_activity() {
        let store = store();
        let resp =
            unregister_participant(&store, "Chess Club", Some("daniel@mergington.edu")).unwrap();
        assert_eq!(
            resp.message,
            "Unregistered daniel@mergington.edu from Chess Club"
        );
    }

    #[test]
    fn missing_or_blank_email_is_rejected_before_lookup() {
        let store = store();
        for email in [None, Some(""), Some("   ")] {
            assert_eq!(
                signup_for_activity(&store, "Unknown Club", email),
                Err(RosterError::MissingEmail)
            );
            assert_eq!(
                unregister_participant(&store, "Chess Club", email),
                Err(RosterError::MissingEmail)
            );
        }
        assert_eq!(list_activities(&store)["Chess Club"].participants.len(), 2);
    }

    #[test]
    fn email_is_stored_verbatim() {
        let store = store();
        signup_for_activity(&store, "Art Studio", Some(" Padded@X.edu ")).unwrap();
        assert!(store
            .get_activity("Art Studio")
            .unwrap()
            .is_enrolled(" Padded@X.edu "));
    }

    #[test]
    fn store_errors_pass_through() {
        let store = store();
        assert_eq!(
            signup_for_activity(&store, "Chess Club", Some("michael@mergington.edu")),
            Err(RosterError::AlreadyEnrolled)
        );
        assert_eq!(
            unregister_participant(&store, "Chess Club", Some("nobody@x.edu")),
            Err(RosterError::ParticipantNotFound)
        );
        assert_eq!(
            signup_for_activity(&store, "Unknown Club", Some("x@x.edu")),
            Err(RosterError::NotFound)
        );
    }
}
