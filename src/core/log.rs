use crate::errors::AppResult;
use crate::models::entry_kind::EntryKind;
use crate::models::task_entry::TaskEntry;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

/// ANSI colour of the type column
fn color_for_kind(kind: EntryKind) -> Colour {
    match kind {
        EntryKind::Login => Colour::Green,
        EntryKind::Logout => Colour::Red,
        EntryKind::Task => Colour::Cyan,
    }
}

/// Keep only the `last` most recent entries of `type_filter` (when given).
pub fn select_entries(
    entries: Vec<TaskEntry>,
    type_filter: Option<&str>,
    last: Option<usize>,
) -> Vec<TaskEntry> {
    let mut selected: Vec<TaskEntry> = entries
        .into_iter()
        .filter(|e| type_filter.is_none_or(|t| e.kind == t))
        .collect();

    if let Some(n) = last
        && selected.len() > n
    {
        selected.drain(..selected.len() - n);
    }
    selected
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_entries(entries: &[TaskEntry], color: bool) -> AppResult<()> {
        if entries.is_empty() {
            println!("No task entries.");
            return Ok(());
        }

        let type_w = entries
            .iter()
            .map(|e| e.kind.chars().count())
            .max()
            .unwrap_or(4)
            .clamp(4, 30);

        let mut table = Table::new(vec![
            Column {
                header: "TIMESTAMP".into(),
                width: 25,
            },
            Column {
                header: "TYPE".into(),
                width: type_w,
            },
            Column {
                header: "CONTENT".into(),
                width: 0,
            },
        ]);

        for e in entries {
            // padding first, colour after: escape codes would break the width
            let padded = format!("{:<type_w$}", e.kind);
            let kind = if color {
                color_for_kind(e.entry_kind()).paint(padded).to_string()
            } else {
                padded
            };
            table.add_row(vec![e.timestamp_str(), kind, e.content.clone()]);
        }

        print!("{}", table.render());
        Ok(())
    }

    pub fn print_json(entries: &[TaskEntry]) -> AppResult<()> {
        println!("{}", serde_json::to_string_pretty(entries)?);
        Ok(())
    }
}
