//! The participants list.

use crate::model::InternRecord;

/// One line per intern: name padded to the longest, then the edit command.
/// Keeps the order the API returned.
pub fn render_roster(interns: &[InternRecord]) -> String {
    if interns.is_empty() {
        return "  no participants\n".to_string();
    }

    let names: Vec<&str> = interns
        .iter()
        .map(|i| if i.name.is_empty() { "(unnamed)" } else { i.name.as_str() })
        .collect();
    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(10);

    let mut out = String::new();
    for (intern, name) in interns.iter().zip(&names) {
        out.push_str(&format!("  {name:<width$}  interns edit {}\n", intern.id));
    }
    out
}
