use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// Roster entry. `participants` is kept in signup order and holds each email once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Adds initial participants, skipping repeats.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            let email = email.into();
            if !self.is_enrolled(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

/// One activity as returned by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }
}

/// Activity name -> view, in catalog order.
pub type ActivityCatalog = IndexMap<String, ActivityView>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_participants_skips_repeats() {
        let activity = Activity::new("Chess", "Fridays", 3).with_participants([
            "a@mergington.edu",
            "b@mergington.edu",
            "a@mergington.edu",
        ]);
        assert_eq!(
            activity.participants,
            vec!["a@mergington.edu", "b@mergington.edu"]
        );
        assert_eq!(activity.spots_left(), 1);
        assert!(!activity.is_full());
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let activity = Activity::new("Closed", "Never", 0);
        assert!(activity.is_full());
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn view_serializes_with_wire_field_names() {
        let activity =
            Activity::new("Learn chess", "Fridays", 12).with_participants(["m@mergington.edu"]);
        let json = serde_json::to_value(ActivityView::from(&activity)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Learn chess",
                "schedule": "Fridays",
                "max_participants": 12,
                "participants": ["m@mergington.edu"]
            })
        );
    }
}
