//! CSV reports, the tracker's output surface.
//!
//! One file per tab: `World.csv` for chest totals (biggest stacks first)
//! and `<player>.csv` for skills (alphabetical). Files are rewritten whole
//! on every update; consumers poll them the same way a spreadsheet tab
//! would be re-read.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;
use valheim_core::{ChestTotals, SkillTable};

/// Chest totals ordered by descending count, then name.
pub fn world_rows(totals: &ChestTotals) -> Vec<(String, i64)> {
    let mut rows: Vec<(String, i64)> = totals
        .iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Skill levels ordered by name.
pub fn skill_rows(skills: &SkillTable) -> Vec<(String, f32)> {
    let mut rows: Vec<(String, f32)> = skills
        .iter()
        .map(|(name, level)| (name.to_string(), level))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

pub fn write_world_csv(path: &Path, totals: &ChestTotals) -> io::Result<()> {
    let now = Utc::now().format("%H:%M:%S");
    let mut out = String::from("Item,Total Count,Last Updated (UTC)\n");
    for (name, count) in world_rows(totals) {
        out.push_str(&format!("{},{count},{now}\n", csv_field(&name)));
    }
    fs::write(path, out)
}

pub fn write_skills_csv(path: &Path, skills: &SkillTable) -> io::Result<()> {
    let now = Utc::now().format("%H:%M:%S");
    let mut out = String::from("Skill,Level,Last Updated (UTC)\n");
    for (name, level) in skill_rows(skills) {
        out.push_str(&format!("{},{level},{now}\n", csv_field(&name)));
    }
    fs::write(path, out)
}

/// Quote a field only when it needs it. Item names are plain words today,
/// but modded servers get to disagree.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
