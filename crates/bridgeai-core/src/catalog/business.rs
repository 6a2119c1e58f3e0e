//! Business survey: reaching immigrant customers in Canada.

use bridgeai_types::survey::{
    Choice, ChoiceTag, Condition, Question, QuestionKind, Section, Survey, SurveyId,
};

/// Most options a respondent may pick for `trust_factors` (Q12).
pub const TRUST_FACTORS_MAX: usize = 3;

fn plain(labels: &[&str]) -> Vec<Choice> {
    labels.iter().map(|l| Choice::plain(*l)).collect()
}

fn with_other(labels: &[&str]) -> Vec<Choice> {
    let mut choices = plain(labels);
    choices.push(Choice::tagged("Other", ChoiceTag::Other));
    choices
}

fn other_of(on: &'static str) -> Condition {
    Condition::new(on, ChoiceTag::Other)
}

pub(super) fn build() -> Survey {
    Survey {
        id: SurveyId::Business,
        title: "Business Survey: Reaching Immigrant Customers in Canada".to_string(),
        intro: "Quick 5-minute survey to understand how businesses connect with newcomers \
                to Canada. All responses are anonymous and confidential. Most questions \
                are multiple choice; a few are open-ended."
            .to_string(),
        file_name: "business_survey_responses.csv".to_string(),
        sections: vec![
            about_your_business(),
            finding_customers(),
            paying_for_referrals(),
            value_and_timing(),
            demographics(),
            final_questions(),
        ],
    }
}

fn about_your_business() -> Section {
    Section::new(
        "Section 1 · About Your Business",
        vec![
            Question::single_with(
                "industry",
                "Q1. What industry are you in?",
                with_other(&[
                    "Banking/Financial Services",
                    "Insurance (Home, Auto, Life, Health)",
                    "Telecommunications (Phone/Internet)",
                    "Real Estate",
                    "Legal Services",
                    "Employment/Recruitment",
                    "Education/Training",
                    "Healthcare",
                    "Transportation (Driving school, Car sales, etc.)",
                ]),
            ),
            Question::text("industry_other", "Please specify your industry:")
                .when(other_of("industry")),
            Question::multi_with(
                "cities",
                "Q2. Which cities do you operate in? (Select all that apply)",
                plain(&[
                    "Toronto/GTA",
                    "Vancouver/Lower Mainland",
                    "Calgary",
                    "Edmonton",
                    "Montreal",
                    "Ottawa",
                    "Winnipeg",
                    "Halifax",
                    "Other major city",
                    "All of Canada",
                ]),
                None,
            ),
            Question::single(
                "immigrant_share",
                "Q3. What percentage of your customers are immigrants (arrived within last 5 years)?",
                &["0-10%", "11-25%", "26-50%", "51-75%", "76-100%", "Don't know"],
            ),
            Question::single(
                "more_immigrants",
                "Q4. Would you like to have MORE immigrant customers?",
                &[
                    "Yes, definitely - it's a priority",
                    "Yes, somewhat interested",
                    "Neutral - happy with current mix",
                    "No, not our target market",
                ],
            ),
        ],
    )
}

fn finding_customers() -> Section {
    Section::new(
        "Section 2 · Finding Immigrant Customers",
        vec![
            Question::scale(
                "difficulty",
                "Q5. How difficult is it to reach immigrant customers?",
                1,
                5,
                3,
            )
            .hint("1 = Very easy, 5 = Very difficult"),
            Question::single_with(
                "challenge",
                "Q6. What's your BIGGEST challenge in attracting immigrant customers? (Pick ONE)",
                with_other(&[
                    "Don't know where to find them",
                    "They don't know about my business",
                    "Hard to build trust with newcomers",
                    "Language barriers",
                    "They don't understand Canadian systems (credit, insurance, etc.)",
                    "Too expensive to reach them (advertising costs)",
                    "Long sales cycle",
                    "No specific challenges",
                ]),
            ),
            Question::text("challenge_other", "Please describe your other challenge:")
                .when(other_of("challenge")),
            Question::single(
                "cac_cost",
                "Q7. How much does it typically cost you to acquire ONE new immigrant customer?",
                &[
                    "$0-50",
                    "$51-100",
                    "$101-200",
                    "$201-500",
                    "$500+",
                    "Don't know / Don't track this",
                ],
            ),
            Question::multi_with(
                "finding_methods",
                "Q8. How do you currently find immigrant customers? (Select all that apply)",
                with_other(&[
                    "Word of mouth/referrals",
                    "Google Ads / Online advertising",
                    "Social media ads (Facebook, Instagram, etc.)",
                    "Community events",
                    "Partnerships with immigration consultants/lawyers",
                    "Real estate agents",
                    "Settlement agencies (YMCA, ISSofBC, etc.)",
                    "Ethnic media/newspapers",
                    "We don't actively target them",
                ]),
                None,
            ),
            Question::text("finding_other", "Please describe other methods you use:")
                .when(other_of("finding_methods")),
            Question::scale(
                "satisfaction",
                "Q9. On a scale of 1-10, how satisfied are you with your current methods of reaching immigrants?",
                1,
                10,
                5,
            )
            .hint("1 = Very unsatisfied, 10 = Very satisfied"),
        ],
    )
}

fn paying_for_referrals() -> Section {
    let nothing = "Nothing - wouldn't pay";
    Section::new(
        "Section 3 · Paying for Customer Referrals",
        vec![
            Question::single(
                "paid_referrals",
                "Q10. Have you ever PAID for customer referrals or leads?",
                &[
                    "Yes, currently do this",
                    "Yes, did in the past",
                    "No, but open to it",
                    "No, not interested in paying for referrals",
                ],
            ),
            Question::single(
                "referral_interest",
                "Q11. If a trusted platform could send you QUALIFIED immigrant customers, would you be interested?",
                &[
                    "Very interested - tell me more",
                    "Somewhat interested",
                    "Maybe, depends on details",
                    "Not really interested",
                    "Not interested at all",
                ],
            ),
            Question::multi_with(
                "trust_factors",
                "Q12. What would make you trust a referral platform? (Select up to 3)",
                with_other(&[
                    "Verified customer information (real immigrants with real needs)",
                    "Track record / proven results from other businesses",
                    "Only pay for actual customers (not just clicks or leads)",
                    "Clear, transparent pricing",
                    "No long-term contract or commitment",
                    "Ability to track where customers came from",
                    "Other reputable businesses using it",
                    "Free trial period",
                ]),
                Some(TRUST_FACTORS_MAX),
            ),
            Question::text(
                "trust_other",
                "Please describe any other factor that builds trust:",
            )
            .when(other_of("trust_factors")),
            Question::single(
                "payment_model",
                "Q13. Which payment model would you prefer? (Pick your TOP choice)",
                &[
                    "Pay per LEAD: Small fee for each potential customer (e.g., $25-50 per lead)",
                    "Pay per CUSTOMER: Only pay when someone becomes a paying customer (e.g., $100-200)",
                    "Commission: Pay percentage of what the customer spends (e.g., 10-15%)",
                    "Monthly subscription: Fixed monthly fee for unlimited referrals (e.g., $500-1000/month)",
                    "None of these - not interested in paying for referrals",
                ],
            ),
            Question::dropdown(
                "q14_lead",
                "Q14a. Willing to pay per lead (for each contact/lead)",
                &["$10-25", "$26-50", "$51-100", nothing],
            ),
            Question::dropdown(
                "q14_customer",
                "Q14b. Willing to pay per customer (for each paying customer)",
                &["$50-100", "$101-200", "$201-500", nothing],
            ),
            Question::dropdown(
                "q14_commission",
                "Q14c. Commission rate you would pay (% of sale value)",
                &["5-10%", "11-20%", "21%+", nothing],
            ),
            Question::single(
                "referral_volume",
                "Q15. How many NEW immigrant customers per month would make paying for referrals worthwhile?",
                &[
                    "5-10 per month",
                    "11-25 per month",
                    "26-50 per month",
                    "50+ per month",
                    "Any amount helps",
                    "Wouldn't pay for referrals",
                ],
            ),
            Question::multi_with(
                "refusal_reasons",
                "Q16. What would make you say NO to a referral service? (Select all that apply)",
                with_other(&[
                    "Too expensive",
                    "Don't trust the quality of leads",
                    "Prefer organic/natural growth",
                    "Bad past experience with referral services",
                    "Don't need more customers right now",
                    "Complicated setup or long contracts",
                    "My competitors would also be on the platform",
                    "Worried about data privacy",
                    "Nothing - I'd be open to trying it",
                ]),
                None,
            ),
            Question::text(
                "refusal_other",
                "Please describe any other reason you'd say no:",
            )
            .when(other_of("refusal_reasons")),
        ],
    )
    .caption("Q14: select one option for each payment model.")
}

fn value_and_timing() -> Section {
    Section::new(
        "Section 4 · Value & Timing",
        vec![
            Question::single(
                "timing_value",
                "Q17. A service that connects you with immigrants exactly when they need you \
                 (e.g., just arrived & need a phone plan) would be:",
                &[
                    "Extremely valuable - would definitely pay for this",
                    "Very valuable - would likely pay for this",
                    "Somewhat valuable - would consider it",
                    "Not very valuable",
                    "Not valuable at all",
                ],
            ),
            Question::single(
                "discount",
                "Q18. Would you offer a special discount to attract immigrant customers?",
                &[
                    "Yes, 10-20% discount",
                    "Yes, 5-10% discount",
                    "Maybe, depends on expected volume",
                    "No, standard pricing only",
                    "Not sure",
                ],
            ),
            Question::multi_with(
                "customer_info",
                "Q19. What information about referred customers would you want? (Select all that apply)",
                with_other(&[
                    "Name and phone number",
                    "Email address",
                    "When they arrived in Canada",
                    "Their country of origin",
                    "What they specifically need from me",
                    "Their location/city",
                    "Language preference",
                    "Immigration category (student, worker, PR, etc.)",
                    "Just basic contact info is fine",
                ]),
                None,
            ),
            Question::text(
                "customer_info_other",
                "Please describe any other information you'd like:",
            )
            .when(other_of("customer_info")),
            Question::single(
                "risk_free_trial",
                "Q20. If there was a risk-free way to test getting immigrant referrals \
                 (no long-term commitment, cancel anytime), would you try it?",
                &[
                    "Yes, definitely would try it",
                    "Probably yes",
                    "Maybe - need more details",
                    "Probably not",
                    "No",
                ],
            ),
        ],
    )
}

fn demographics() -> Section {
    Section::new(
        "Section 5 · Quick Demographics",
        vec![
            Question::single(
                "business_age",
                "Q21. How long have you been in business?",
                &[
                    "Less than 1 year",
                    "1-3 years",
                    "3-5 years",
                    "5-10 years",
                    "10+ years",
                ],
            ),
            Question::single_with(
                "role",
                "Q22. What's your role?",
                with_other(&[
                    "Owner/Founder",
                    "Manager/Director",
                    "Marketing/Sales",
                    "Operations",
                ]),
            ),
            Question::text("role_other", "Please specify your role:").when(other_of("role")),
            Question::single(
                "company_size",
                "Q23. Company size:",
                &[
                    "Just me (solo entrepreneur)",
                    "2-10 employees",
                    "11-50 employees",
                    "51-200 employees",
                    "200+ employees",
                ],
            ),
        ],
    )
}

fn final_questions() -> Section {
    Section::new(
        "Final Questions",
        vec![
            Question::text_area(
                "extra_thoughts",
                "Q24. Any other thoughts on reaching immigrant customers or paying for referrals?",
            )
            .hint("Share any additional insights, concerns, or ideas..."),
            Question::new(
                "stay_updated",
                "Q25. If we build a platform to connect businesses with immigrant customers, \
                 would you like to be notified?",
                QuestionKind::SingleChoice {
                    choices: vec![
                        Choice::tagged(
                            "Yes, keep me updated (provide email below)",
                            ChoiceTag::OptIn,
                        ),
                        Choice::plain("No thanks"),
                    ],
                    dropdown: false,
                },
            ),
            Question::text("email", "Q26. Your email (optional):")
                .hint("name@example.com")
                .when(Condition::new("stay_updated", ChoiceTag::OptIn)),
        ],
    )
}
