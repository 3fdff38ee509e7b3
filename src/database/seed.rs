use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Join the varsity basketball team and compete in league games",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["alex@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Develop tennis skills and participate in friendly matches",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: &["jessica@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore painting, drawing, and sculpture techniques",
        schedule: "Mondays and Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["lucy@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act in plays and musicals, develop performance skills",
        schedule: "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["james@mergington.edu", "grace@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop argumentation and public speaking skills in competitive debates",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["marcus@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Explore experiments and scientific concepts through hands-on activities",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["nina@mergington.edu", "ryan@mergington.edu"],
    },
];

/// The startup catalog, in display order.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            let activity = Activity::new(seed.description, seed.schedule, seed.max_participants)
                .with_participants(seed.participants.iter().copied());
            (seed.name.to_string(), activity)
        })
        .collect()
}
