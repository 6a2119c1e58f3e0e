//! Newcomer companion survey: settling in Canada.

use bridgeai_types::survey::{
    Choice, ChoiceTag, Condition, NewcomerStatus, Question, Section, Survey, SurveyId,
};

/// Rated challenge areas as `(question id, display name)`.
pub const CHALLENGE_AREAS: [(&str, &str); 6] = [
    ("housing", "Housing"),
    ("job", "Employment"),
    ("health", "Healthcare"),
    ("community", "Community"),
    ("language", "Language"),
    ("mental", "Wellbeing"),
];

fn status_is(status: NewcomerStatus) -> Condition {
    Condition::new("status", ChoiceTag::Status(status))
}

pub(super) fn build() -> Survey {
    Survey {
        id: SurveyId::Newcomer,
        title: "BridgeAI: Your Newcomer Companion".to_string(),
        intro: "Hi! I'm BridgeAI, your friendly companion for settling in Canada. Answer a \
                few quick questions so I can understand your situation and personalize \
                support for you."
            .to_string(),
        file_name: "survey_responses.csv".to_string(),
        sections: vec![
            about_you(),
            students(),
            workers(),
            families(),
            refugees(),
            planning(),
            challenges(),
            reflection(),
        ],
    }
}

fn about_you() -> Section {
    Section::new(
        "Step 1 · About You",
        vec![
            Question::single_with(
                "status",
                "What best describes your current situation?",
                vec![
                    Choice::tagged(
                        "🎓 International student",
                        ChoiceTag::Status(NewcomerStatus::Student),
                    ),
                    Choice::tagged("💼 Skilled worker", ChoiceTag::Status(NewcomerStatus::Worker)),
                    Choice::tagged("👨‍👩‍👧 Family member", ChoiceTag::Status(NewcomerStatus::Family)),
                    Choice::tagged(
                        "🛠️ Refugee / protected person",
                        ChoiceTag::Status(NewcomerStatus::Refugee),
                    ),
                    Choice::tagged(
                        "🧳 Planning to immigrate soon",
                        ChoiceTag::Status(NewcomerStatus::Planning),
                    ),
                ],
            ),
            Question::dropdown(
                "province",
                "Which province or city are you in (or planning to move to)?",
                &[
                    "Ontario",
                    "Quebec",
                    "British Columbia",
                    "Alberta",
                    "Manitoba",
                    "Saskatchewan",
                    "Nova Scotia",
                    "New Brunswick",
                    "Other",
                ],
            ),
            Question::single(
                "timeline",
                "How long have you been in Canada (or when will you arrive)?",
                &[
                    "Less than 3 months",
                    "3–12 months",
                    "Over a year",
                    "Not yet arrived",
                ],
            ),
        ],
    )
}

fn students() -> Section {
    Section::new(
        "Step 2 · For Students",
        vec![
            Question::text("study_field", "What are you studying (or planning to study)?"),
            Question::single(
                "housing_type",
                "Do you live on campus or off campus?",
                &["On-campus", "Off-campus", "Not yet decided"],
            ),
            Question::single(
                "part_time",
                "Are you currently working part-time in Canada?",
                &["Yes", "No"],
            ),
        ],
    )
    .caption("Many students struggle with balancing studies and living costs. You're not alone!")
    .when(status_is(NewcomerStatus::Student))
}

fn workers() -> Section {
    Section::new(
        "Step 2 · For Workers",
        vec![
            Question::text("profession", "What is your professional background or field?"),
            Question::single(
                "credential",
                "Have you had your credentials recognized in Canada?",
                &["Yes", "No", "Not applicable"],
            ),
            Question::scale(
                "job_search",
                "How confident do you feel finding a job in your field?",
                1,
                5,
                3,
            ),
        ],
    )
    .caption("BridgeAI will soon connect you to local employment resources and skill-matching tools.")
    .when(status_is(NewcomerStatus::Worker))
}

fn families() -> Section {
    Section::new(
        "Step 2 · For Families",
        vec![
            Question::single("children", "Do you have school-aged children?", &["Yes", "No"]),
            Question::single(
                "childcare",
                "Do you currently have access to childcare or schooling?",
                &["Yes", "No", "Not needed"],
            ),
            Question::single(
                "partner",
                "Is your partner currently employed in Canada?",
                &["Yes", "No", "Not applicable"],
            ),
        ],
    )
    .caption("Family settlement often involves multiple systems. BridgeAI can help organize them.")
    .when(status_is(NewcomerStatus::Family))
}

fn refugees() -> Section {
    Section::new(
        "Step 2 · For Refugees / Protected Persons",
        vec![
            Question::single(
                "housing_support",
                "Do you have temporary or permanent housing?",
                &["Temporary", "Permanent", "Not yet"],
            ),
            Question::single(
                "language_training",
                "Are you currently enrolled in any language or settlement programs?",
                &["Yes", "No"],
            ),
        ],
    )
    .caption("BridgeAI will connect you to verified community and government support resources.")
    .when(status_is(NewcomerStatus::Refugee))
}

fn planning() -> Section {
    Section::new("Step 2 · Planning Ahead", Vec::new())
        .caption("You're planning ahead. Let's prepare your checklist for when you arrive!")
        .when(status_is(NewcomerStatus::Planning))
}

fn challenges() -> Section {
    Section::new(
        "Step 3 · Your Main Challenges",
        vec![
            Question::scale("housing", "Finding affordable housing", 1, 5, 3),
            Question::scale(
                "job",
                "Finding employment or getting credentials recognized",
                1,
                5,
                3,
            ),
            Question::scale("health", "Accessing healthcare", 1, 5, 3),
            Question::scale("community", "Building social connections", 1, 5, 3),
            Question::scale("language", "Communicating in English or French", 1, 5, 3),
            Question::scale("mental", "Managing stress and mental wellbeing", 1, 5, 3),
        ],
    )
    .caption("Rate each area from 1 (easy) to 5 (very challenging).")
}

fn reflection() -> Section {
    Section::new(
        "Step 4 · Reflection",
        vec![
            Question::text_area("challenge_text", "What has been your biggest challenge so far?"),
            Question::text_area(
                "help_text",
                "What kind of support would make your settlement journey easier?",
            ),
        ],
    )
}
