//! Survey listing and column layout commands.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use bridgeai_core::appender::columns;
use bridgeai_core::catalog;
use bridgeai_types::survey::SurveyId;

use crate::state::AppState;

/// `bridgeai surveys`: ids, titles, question counts, and output files.
pub fn list_surveys(state: &AppState, json: bool) -> Result<()> {
    if json {
        let list: Vec<serde_json::Value> = catalog::all()
            .map(|survey| {
                serde_json::json!({
                    "id": survey.id.to_string(),
                    "title": survey.title,
                    "questions": survey.questions().count(),
                    "output": state.output_path(survey.id).display().to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(Color::Cyan),
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Questions").fg(Color::Cyan),
            Cell::new("Output").fg(Color::Cyan),
        ]);

    for survey in catalog::all() {
        let output = state.output_path(survey.id);
        let exists = output.exists();
        table.add_row(vec![
            Cell::new(survey.id.to_string()),
            Cell::new(&survey.title),
            Cell::new(survey.questions().count()),
            Cell::new(output.display()).fg(if exists { Color::Green } else { Color::DarkGrey }),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {}",
        style("Start one with: bridgeai take <id>").dim()
    );
    println!();
    Ok(())
}

/// `bridgeai columns <survey>`: the header row, one column per line.
pub fn show_columns(id: SurveyId, json: bool) -> Result<()> {
    let header = columns(catalog::survey(id));
    if json {
        println!("{}", serde_json::to_string_pretty(&header)?);
    } else {
        for column in header {
            println!("{column}");
        }
    }
    Ok(())
}
