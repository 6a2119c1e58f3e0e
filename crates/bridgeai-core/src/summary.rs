//! Thank-you messages shown after a submission is stored.

use std::path::Path;

use serde::Serialize;

use bridgeai_types::submission::Submission;
use bridgeai_types::survey::SurveyId;

use crate::catalog::CHALLENGE_AREAS;

/// What the respondent sees once their row is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub headline: String,
    /// `(label, value)` pairs echoed back from the answers.
    pub details: Vec<(String, String)>,
    pub notes: Vec<String>,
}

/// Highest-rated newcomer challenge area.
///
/// Ties go to the alphabetically greatest area name. Unrated areas are
/// skipped; `None` when nothing was rated.
pub fn top_challenge(submission: &Submission) -> Option<&'static str> {
    CHALLENGE_AREAS
        .iter()
        .filter_map(|(id, name)| {
            let rating = submission.get(id)?.as_rating()?;
            Some((rating, *name))
        })
        .max()
        .map(|(_, name)| name)
}

/// Build the confirmation for a stored submission.
pub fn confirmation(submission: &Submission, saved_to: &Path) -> Confirmation {
    let saved = format!("Responses saved to {}", saved_to.display());
    match submission.survey {
        SurveyId::Business => Confirmation {
            headline: "Thank you for completing the survey!".to_string(),
            details: Vec::new(),
            notes: vec![
                "Your insights will help shape how businesses and immigrants connect in Canada. \
                 If you requested updates, we'll contact you when we have something to share."
                    .to_string(),
                saved,
            ],
        },
        SurveyId::Newcomer => {
            let province = submission.cell("province");
            let mut details = vec![
                ("Status".to_string(), submission.cell("status")),
                ("Province".to_string(), province.clone()),
                ("Arrival timeline".to_string(), submission.cell("timeline")),
            ];
            let mut notes = Vec::new();
            if let Some(area) = top_challenge(submission) {
                details.push(("Top challenge area".to_string(), area.to_string()));
                notes.push(format!(
                    "BridgeAI will soon offer you curated guidance for {} and {province}. \
                     Our mission is to make your first year in Canada easier.",
                    area.to_lowercase()
                ));
            }
            notes.push(saved);
            Confirmation {
                headline: "Thank you! Here's your summary:".to_string(),
                details,
                notes,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bridgeai_types::answer::Answer;

    use super::*;

    fn rated(ratings: [i64; 6]) -> Submission {
        let mut submission = Submission::new(SurveyId::Newcomer);
        for ((id, _), rating) in CHALLENGE_AREAS.iter().zip(ratings) {
            submission.set(*id, Answer::Rating(rating));
        }
        submission
    }

    #[test]
    fn test_top_challenge_picks_highest_rating() {
        let submission = rated([2, 5, 1, 3, 3, 4]);
        assert_eq!(top_challenge(&submission), Some("Employment"));
    }

    #[test]
    fn test_top_challenge_tie_goes_to_greatest_name() {
        // Housing, Healthcare and Wellbeing all rated 4.
        let submission = rated([4, 1, 4, 2, 2, 4]);
        assert_eq!(top_challenge(&submission), Some("Wellbeing"));
    }

    #[test]
    fn test_top_challenge_none_without_ratings() {
        assert_eq!(top_challenge(&Submission::new(SurveyId::Newcomer)), None);
    }

    #[test]
    fn test_newcomer_confirmation_is_personalized() {
        let mut submission = rated([5, 1, 1, 1, 1, 1]);
        submission.set("status", Answer::Choice("💼 Skilled worker".into()));
        submission.set("province", Answer::Choice("Alberta".into()));
        submission.set("timeline", Answer::Choice("Over a year".into()));

        let c = confirmation(&submission, Path::new("data/survey_responses.csv"));
        assert!(c.details.contains(&("Province".to_string(), "Alberta".to_string())));
        assert!(c.details.contains(&("Top challenge area".to_string(), "Housing".to_string())));
        assert!(c.notes[0].contains("guidance for housing and Alberta"));
        assert!(c.notes.last().unwrap().contains("data/survey_responses.csv"));
    }

    #[test]
    fn test_business_confirmation() {
        let submission = Submission::new(SurveyId::Business);
        let c = confirmation(&submission, Path::new("out.csv"));
        assert_eq!(c.headline, "Thank you for completing the survey!");
        assert!(c.details.is_empty());
        assert_eq!(c.notes.len(), 2);
    }
}
