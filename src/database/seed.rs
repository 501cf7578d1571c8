use crate::models::Activity;

// (name, description, schedule, max_participants, participants)
type SeedRow = (&'static str, &'static str, &'static str, u32, &'static [&'static str]);

const SEED_ACTIVITIES: &[SeedRow] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &[],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

/// The fixed directory loaded at startup.
pub fn seed_activities() -> Vec<Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(
            |(name, description, schedule, max_participants, participants)| Activity {
                name: name.to_string(),
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
        .collect()
}
