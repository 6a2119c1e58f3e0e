//! Conditional question rendering.
//!
//! Decides which sections and questions are shown for the answers collected
//! so far. Visibility is a lookup: take the current answer to the condition's
//! source question, map each selected label to the tag its choice was given
//! in the catalog, and compare tags.

use bridgeai_types::submission::Submission;
use bridgeai_types::survey::{Condition, Question, Section, Survey};

/// Whether `condition` holds for the answers in `submission`.
///
/// An unanswered source question never satisfies a condition.
pub fn condition_holds(survey: &Survey, condition: &Condition, submission: &Submission) -> bool {
    let Some(source) = survey.question(condition.on) else {
        return false;
    };
    let Some(answer) = submission.get(condition.on) else {
        return false;
    };
    answer
        .selected_labels()
        .into_iter()
        .any(|label| source.tag_of(label) == Some(condition.tag))
}

fn shown(survey: &Survey, condition: Option<&Condition>, submission: &Submission) -> bool {
    condition.is_none_or(|c| condition_holds(survey, c, submission))
}

/// Sections currently on screen, in catalog order.
pub fn visible_sections<'a>(survey: &'a Survey, submission: &Submission) -> Vec<&'a Section> {
    survey
        .sections
        .iter()
        .filter(|s| shown(survey, s.condition.as_ref(), submission))
        .collect()
}

/// Questions currently on screen, in catalog order.
pub fn visible_questions<'a>(survey: &'a Survey, submission: &Submission) -> Vec<&'a Question> {
    visible_sections(survey, submission)
        .into_iter()
        .flat_map(|s| s.questions.iter())
        .filter(|q| shown(survey, q.condition.as_ref(), submission))
        .collect()
}

/// Whether a single question is currently on screen.
pub fn is_visible(survey: &Survey, question_id: &str, submission: &Submission) -> bool {
    visible_questions(survey, submission)
        .iter()
        .any(|q| q.id == question_id)
}

/// First visible question without an answer.
pub fn next_unanswered<'a>(survey: &'a Survey, submission: &Submission) -> Option<&'a Question> {
    visible_questions(survey, submission)
        .into_iter()
        .find(|q| !submission.contains(&q.id))
}

/// Drop answers to questions that are no longer shown.
///
/// Repeats until stable, since clearing one answer can hide questions that
/// depended on it. Returns the cleared ids in catalog order per pass.
pub fn prune_hidden(survey: &Survey, submission: &mut Submission) -> Vec<String> {
    let mut cleared = Vec::new();
    loop {
        let visible = visible_questions(survey, submission);
        let hidden: Vec<String> = survey
            .questions()
            .filter(|q| submission.contains(&q.id) && !visible.iter().any(|v| v.id == q.id))
            .map(|q| q.id.clone())
            .collect();
        if hidden.is_empty() {
            return cleared;
        }
        for id in hidden {
            tracing::debug!(question = %id, "clearing answer to hidden question");
            submission.remove(&id);
            cleared.push(id);
        }
    }
}

/// The section a question belongs to.
pub fn section_of<'a>(survey: &'a Survey, question_id: &str) -> Option<&'a Section> {
    survey
        .sections
        .iter()
        .find(|s| s.questions.iter().any(|q| q.id == question_id))
}

#[cfg(test)]
mod tests {
    use bridgeai_types::answer::Answer;
    use bridgeai_types::survey::SurveyId;

    use super::*;
    use crate::catalog;

    fn ids(questions: &[&Question]) -> Vec<String> {
        questions.iter().map(|q| q.id.clone()).collect()
    }

    #[test]
    fn test_other_follow_up_hidden_until_other_selected() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);

        assert!(!is_visible(survey, "industry_other", &submission));

        submission.set("industry", Answer::Choice("Real Estate".into()));
        assert!(!is_visible(survey, "industry_other", &submission));

        submission.set("industry", Answer::Choice("Other".into()));
        assert!(is_visible(survey, "industry_other", &submission));
    }

    #[test]
    fn test_multi_select_other_reveals_follow_up() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);

        submission.set(
            "finding_methods",
            Answer::Choices(vec!["Community events".into(), "Other".into()]),
        );
        assert!(is_visible(survey, "finding_other", &submission));

        submission.set(
            "finding_methods",
            Answer::Choices(vec!["Community events".into()]),
        );
        assert!(!is_visible(survey, "finding_other", &submission));
    }

    #[test]
    fn test_label_containing_other_does_not_trigger() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);
        submission.set(
            "trust_factors",
            Answer::Choices(vec!["Other reputable businesses using it".into()]),
        );
        assert!(!is_visible(survey, "trust_other", &submission));
    }

    #[test]
    fn test_opt_in_reveals_email() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);
        submission.set("stay_updated", Answer::Choice("No thanks".into()));
        assert!(!is_visible(survey, "email", &submission));

        submission.set(
            "stay_updated",
            Answer::Choice("Yes, keep me updated (provide email below)".into()),
        );
        assert!(is_visible(survey, "email", &submission));
    }

    #[test]
    fn test_status_dispatches_to_one_branch() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let mut submission = Submission::new(SurveyId::Newcomer);
        submission.set("status", Answer::Choice("💼 Skilled worker".into()));

        let visible = ids(&visible_questions(survey, &submission));
        assert!(visible.contains(&"profession".to_string()));
        assert!(visible.contains(&"job_search".to_string()));
        assert!(!visible.contains(&"study_field".to_string()));
        assert!(!visible.contains(&"children".to_string()));
        assert!(!visible.contains(&"housing_support".to_string()));
    }

    #[test]
    fn test_no_branch_before_status_answered() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let submission = Submission::new(SurveyId::Newcomer);
        let sections: Vec<&str> = visible_sections(survey, &submission)
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert!(sections.iter().all(|t| !t.starts_with("Step 2")));
    }

    #[test]
    fn test_planning_shows_caption_only_section() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let mut submission = Submission::new(SurveyId::Newcomer);
        submission.set("status", Answer::Choice("🧳 Planning to immigrate soon".into()));

        let planning = visible_sections(survey, &submission)
            .into_iter()
            .find(|s| s.title.contains("Planning"))
            .expect("planning section visible");
        assert!(planning.questions.is_empty());
        assert!(planning.caption.is_some());
    }

    #[test]
    fn test_next_unanswered_walks_in_order() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let mut submission = Submission::new(SurveyId::Newcomer);
        assert_eq!(next_unanswered(survey, &submission).unwrap().id, "status");

        submission.set("status", Answer::Choice("👨‍👩‍👧 Family member".into()));
        submission.set("province", Answer::Choice("Quebec".into()));
        submission.set("timeline", Answer::Choice("Over a year".into()));
        assert_eq!(next_unanswered(survey, &submission).unwrap().id, "children");
    }

    #[test]
    fn test_prune_hidden_forgets_stale_follow_up() {
        let survey = catalog::survey(SurveyId::Business);
        let mut submission = Submission::new(SurveyId::Business);
        submission.set("industry", Answer::Choice("Other".into()));
        submission.set("industry_other", Answer::Text("Bakery".into()));
        assert!(prune_hidden(survey, &mut submission).is_empty());

        submission.set("industry", Answer::Choice("Real Estate".into()));
        assert_eq!(prune_hidden(survey, &mut submission), vec!["industry_other"]);

        submission.set("industry", Answer::Choice("Other".into()));
        assert!(!submission.contains("industry_other"));
        assert_eq!(next_unanswered(survey, &submission).unwrap().id, "industry_other");
    }

    #[test]
    fn test_prune_hidden_drops_whole_branch_section() {
        let survey = catalog::survey(SurveyId::Newcomer);
        let mut submission = Submission::new(SurveyId::Newcomer);
        submission.set("status", Answer::Choice("🎓 International student".into()));
        submission.set("study_field", Answer::Text("Nursing".into()));
        submission.set("province", Answer::Choice("Ontario".into()));

        submission.set("status", Answer::Choice("💼 Skilled worker".into()));
        assert_eq!(prune_hidden(survey, &mut submission), vec!["study_field"]);
        assert!(submission.contains("province"));
    }

    #[test]
    fn test_section_of() {
        let survey = catalog::survey(SurveyId::Business);
        assert_eq!(
            section_of(survey, "email").unwrap().title,
            "Final Questions"
        );
        assert!(section_of(survey, "nope").is_none());
    }
}
