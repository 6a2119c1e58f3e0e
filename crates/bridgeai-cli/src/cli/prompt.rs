//! Terminal prompts for each question kind.
//!
//! Single choices use `Select`, multi choices `MultiSelect` followed by a
//! `Sort` so the stored order is the respondent's, scales a
//! range-checked numeric `Input`, and free text an `Input` that accepts
//! blank answers. A previous answer, when given, is pre-selected so edits
//! start from what the respondent already entered.

use anyhow::Result;
use console::style;
use dialoguer::{Input, MultiSelect, Select, Sort};

use bridgeai_core::validate::check_answer;
use bridgeai_types::answer::Answer;
use bridgeai_types::survey::{Choice, Question, QuestionKind};

/// Ask one question and return the respondent's answer.
///
/// Multi-selects with a cap are re-asked until the selection fits, keeping the
/// respondent's picks checked.
pub fn ask(question: &Question, previous: Option<&Answer>) -> Result<Answer> {
    match &question.kind {
        QuestionKind::SingleChoice { choices, .. } => ask_single(question, choices, previous),
        QuestionKind::MultiChoice { choices, .. } => ask_multi(question, choices, previous),
        QuestionKind::Scale {
            min,
            max,
            default,
            hint,
        } => ask_scale(question, *min, *max, *default, hint.as_deref(), previous),
        QuestionKind::FreeText { placeholder, .. } => {
            ask_text(question, placeholder.as_deref(), previous)
        }
    }
}

fn labels(choices: &[Choice]) -> Vec<&str> {
    choices.iter().map(|c| c.label.as_str()).collect()
}

fn ask_single(question: &Question, choices: &[Choice], previous: Option<&Answer>) -> Result<Answer> {
    let items = labels(choices);
    let default = previous
        .and_then(|a| a.selected_labels().first().copied())
        .and_then(|prev| items.iter().position(|l| *l == prev))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(&question.prompt)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Answer::Choice(items[selection].to_string()))
}

fn ask_multi(question: &Question, choices: &[Choice], previous: Option<&Answer>) -> Result<Answer> {
    let items = labels(choices);
    let earlier: Vec<&str> = previous.map(Answer::selected_labels).unwrap_or_default();
    let mut checked: Vec<bool> = items.iter().map(|l| earlier.contains(l)).collect();

    loop {
        let picked = MultiSelect::new()
            .with_prompt(format!("{} {}", question.prompt, style("(space to toggle)").dim()))
            .items(&items)
            .defaults(&checked)
            .interact()?;

        let selection = carry_order(&items, &picked, &earlier);
        if let Err(err) = check_answer(question, &Answer::Choices(selection.clone())) {
            println!("  {} {}", style("✗").red().bold(), style(err).red());
            checked = (0..items.len()).map(|i| picked.contains(&i)).collect();
            continue;
        }
        if selection.len() < 2 {
            return Ok(Answer::Choices(selection));
        }

        let order = Sort::new()
            .with_prompt(format!(
                "Order your picks {}",
                style("(space to grab, arrows to move, enter when done)").dim()
            ))
            .items(&selection)
            .interact()?;
        return Ok(Answer::Choices(apply_order(selection, &order)));
    }
}

/// Labels at `picked`, keeping the order of `earlier`; new picks follow in option order.
fn carry_order(items: &[&str], picked: &[usize], earlier: &[&str]) -> Vec<String> {
    let mut chosen: Vec<&str> = picked.iter().filter_map(|&i| items.get(i).copied()).collect();
    chosen.sort_by_key(|label| earlier.iter().position(|e| e == label).unwrap_or(usize::MAX));
    chosen.into_iter().map(str::to_string).collect()
}

/// Rearrange `labels` into the index order returned by a `Sort` prompt.
fn apply_order(labels: Vec<String>, order: &[usize]) -> Vec<String> {
    let mut slots: Vec<Option<String>> = labels.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .collect()
}

fn ask_scale(
    question: &Question,
    min: i64,
    max: i64,
    default: i64,
    hint: Option<&str>,
    previous: Option<&Answer>,
) -> Result<Answer> {
    if let Some(hint) = hint {
        println!("  {}", style(hint).dim());
    }
    let initial = previous.and_then(Answer::as_rating).unwrap_or(default);

    let rating: i64 = Input::new()
        .with_prompt(format!("{} [{min}-{max}]", question.prompt))
        .default(initial)
        .validate_with(move |value: &i64| -> Result<(), String> {
            if (min..=max).contains(value) {
                Ok(())
            } else {
                Err(format!("enter a number from {min} to {max}"))
            }
        })
        .interact_text()?;

    Ok(Answer::Rating(rating))
}

fn ask_text(question: &Question, placeholder: Option<&str>, previous: Option<&Answer>) -> Result<Answer> {
    if let Some(placeholder) = placeholder {
        println!("  {}", style(placeholder).dim());
    }

    let mut input = Input::<String>::new()
        .with_prompt(&question.prompt)
        .allow_empty(true);
    if let Some(Answer::Text(text)) = previous {
        input = input.with_initial_text(text.as_str());
    }

    Ok(Answer::Text(input.interact_text()?))
}
