//! Turn a roster into the lines the demo prints.
//!
//! Sections appear in a fixed order (ships, rectangles, books, people).
//! Every section except the last is closed by a separator line and a
//! blank line. Empty sections are skipped, separator included.

use crate::roster::Roster;

/// Number of `*` characters in a separator line.
pub const SEPARATOR_WIDTH: usize = 72;

pub fn separator() -> String {
    "*".repeat(SEPARATOR_WIDTH)
}

fn ship_lines(roster: &Roster) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in &roster.ships {
        let ship = entry.to_spaceship();
        lines.push(ship.captains_announcement());
        lines.push(ship.launch());
    }
    lines
}

fn rectangle_lines(roster: &Roster) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in &roster.rectangles {
        let rect = entry.to_rectangle();
        lines.push(format!(
            "The perimeter of the {} rectangle is {}",
            entry.label,
            rect.perimeter()
        ));
        lines.push(String::new());
        lines.push(rect.summary().to_string());
    }
    lines
}

fn book_lines(roster: &Roster) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in &roster.books {
        lines.push(entry.to_book().summary());
        lines.push(String::new());
    }
    lines
}

fn person_lines(roster: &Roster) -> Vec<String> {
    roster
        .people
        .iter()
        .map(|entry| entry.to_person().greet())
        .collect()
}

/// Render the full transcript, one element per printed line.
pub fn render(roster: &Roster) -> Vec<String> {
    let sections = [
        ship_lines(roster),
        rectangle_lines(roster),
        book_lines(roster),
        person_lines(roster),
    ];
    let mut sections: Vec<Vec<String>> = sections
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect();

    let mut lines = Vec::new();
    let last = sections.pop();
    for section in sections {
        lines.extend(section);
        lines.push(separator());
        lines.push(String::new());
    }
    if let Some(section) = last {
        lines.extend(section);
    }
    lines
}
