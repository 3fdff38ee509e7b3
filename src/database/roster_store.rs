use indexmap::IndexMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::seed;
use crate::error::{RosterError, RosterResult};
use crate::models::{Activity, ActivityCatalog, ActivityView};

/// Whether `enroll` rejects signups once an activity reaches `max_participants`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    #[default]
    Enforce,
    Unbounded,
}

/// State of an activity right after a successful enroll or withdraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity_name: String,
    pub email: String,
    pub participant_count: usize,
    pub max_participants: u32,
}

impl Enrollment {
    fn new(activity_name: &str, email: &str, activity: &Activity) -> Self {
        Self {
            activity_name: activity_name.to_string(),
            email: email.to_string(),
            participant_count: activity.participants.len(),
            max_participants: activity.max_participants,
        }
    }
}

/// In-memory activity catalog.
///
/// The set of activity names is fixed at construction, so lookups take no
/// lock. Each activity sits behind its own `RwLock`; enroll and withdraw hold
/// the write lock across the membership check and the mutation.
#[derive(Debug)]
pub struct RosterStore {
    activities: IndexMap<String, RwLock<Activity>>,
    capacity: CapacityPolicy,
}

impl RosterStore {
    /// Builds a store from `(name, activity)` pairs. A repeated name replaces
    /// the earlier entry but keeps its position.
    pub fn with_activities<I, S>(activities: I, capacity: CapacityPolicy) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        let activities = activities
            .into_iter()
            .map(|(name, activity)| (name.into(), RwLock::new(activity)))
            .collect();
        Self {
            activities,
            capacity,
        }
    }

    pub fn from_seed(capacity: CapacityPolicy) -> Self {
        Self::with_activities(seed::seed_activities(), capacity)
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn list_activities(&self) -> ActivityCatalog {
        self.activities
            .iter()
            .map(|(name, entry)| (name.clone(), ActivityView::from(&*read(entry))))
            .collect()
    }

    pub fn get_activity(&self, activity_name: &str) -> Option<Activity> {
        self.activities
            .get(activity_name)
            .map(|entry| read(entry).clone())
    }

    pub fn enroll(&self, activity_name: &str, email: &str) -> RosterResult<Enrollment> {
        let entry = self
            .activities
            .get(activity_name)
            .ok_or(RosterError::NotFound)?;
        let mut activity = write(entry);

        if activity.is_enrolled(email) {
            return Err(RosterError::AlreadyEnrolled);
        }
        if self.capacity == CapacityPolicy::Enforce && activity.is_full() {
            return Err(RosterError::Full);
        }

        activity.participants.push(email.to_string());
        Ok(Enrollment::new(activity_name, email, &activity))
    }

    pub fn withdraw(&self, activity_name: &str, email: &str) -> RosterResult<Enrollment> {
        let entry = self
            .activities
            .get(activity_name)
            .ok_or(RosterError::NotFound)?;
        let mut activity = write(entry);

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::ParticipantNotFound)?;

        activity.participants.remove(position);
        Ok(Enrollment::new(activity_name, email, &activity))
    }
}

// A panicking holder can't leave the participant list half-written: push and
// remove are the only mutations and both happen after every check.
fn read(entry: &RwLock<Activity>) -> RwLockReadGuard<'_, Activity> {
    entry.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(entry: &RwLock<Activity>) -> RwLockWriteGuard<'_, Activity> {
    entry.write().unwrap_or_else(PoisonError::into_inner)
}
