//! Styled terminal output shared by the survey commands.

use std::collections::HashSet;

use console::style;

use bridgeai_core::render::{section_of, visible_sections};
use bridgeai_core::summary::Confirmation;
use bridgeai_types::submission::Submission;
use bridgeai_types::survey::{Question, Section, Survey};

/// Print the survey title and intro.
pub fn print_banner(survey: &Survey) {
    println!();
    println!("  {}", style(&survey.title).cyan().bold());
    println!();
    for line in wrap(&survey.intro, 76) {
        println!("  {line}");
    }
    println!();
}

fn print_section(section: &Section) {
    println!();
    println!("{}", style(&section.title).bold().underlined());
    if let Some(caption) = &section.caption {
        println!("{}", style(caption).dim());
    }
}

/// Tracks which section headers have been printed.
///
/// Before a question is asked, every visible section up to and including the
/// question's own is announced once. Sections with only a caption (no
/// questions) are announced on the way past.
#[derive(Default)]
pub struct SectionAnnouncer {
    shown: HashSet<String>,
}

impl SectionAnnouncer {
    pub fn before(&mut self, survey: &Survey, submission: &Submission, question: &Question) {
        let Some(target) = section_of(survey, &question.id) else {
            return;
        };
        for section in visible_sections(survey, submission) {
            if self.shown.insert(section.title.clone()) {
                print_section(section);
            }
            if section.title == target.title {
                break;
            }
        }
    }
}

/// Print the thank-you block after a row is stored.
pub fn print_confirmation(confirmation: &Confirmation) {
    println!();
    println!("  {} {}", style("✓").green().bold(), style(&confirmation.headline).green());
    if !confirmation.details.is_empty() {
        println!();
        for (label, value) in &confirmation.details {
            println!("  {}  {}", style(format!("{label}:")).bold(), value);
        }
    }
    println!();
    for note in &confirmation.notes {
        println!("  {}", style(note).dim());
    }
    println!();
}

/// Print an inline error without leaving the survey.
pub fn print_error(message: impl std::fmt::Display) {
    println!();
    println!("  {} {}", style("✗").red().bold(), style(message).red());
}

/// Greedy word wrap for intro paragraphs.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five six", 9);
        assert_eq!(lines, vec!["one two", "three", "four five", "six"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap("  a   b  ", 10), vec!["a b"]);
        assert!(wrap("", 10).is_empty());
    }
}
