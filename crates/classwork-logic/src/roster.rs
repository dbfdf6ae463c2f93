//! Demo roster: the entities the harness builds and prints.
//!
//! A roster is plain data. It loads from JSON, and its default holds the
//! classic lineup: one ill-fated ship, an "epic" rectangle, two books
//! and two people.
//!
//! ```
//! use classwork_logic::roster::{validate_roster, Roster};
//!
//! let roster = Roster::default();
//! assert_eq!(roster.ships.len(), 1);
//! assert!(validate_roster(&roster).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::person::Person;
use crate::rectangle::Rectangle;
use crate::spaceship::Spaceship;

/// Everything the demo constructs, grouped by entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub ships: Vec<ShipEntry>,
    #[serde(default)]
    pub rectangles: Vec<RectangleEntry>,
    #[serde(default)]
    pub books: Vec<BookEntry>,
    #[serde(default)]
    pub people: Vec<PersonEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipEntry {
    pub name: String,
    pub captain: String,
    /// Gallons on board.
    pub fuel: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleEntry {
    /// Adjective used when printing ("the epic rectangle").
    pub label: String,
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonEntry {
    pub name: String,
}

impl ShipEntry {
    pub fn to_spaceship(&self) -> Spaceship {
        Spaceship::new(self.name.as_str(), self.captain.as_str(), self.fuel)
    }
}

impl RectangleEntry {
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(self.length, self.width)
    }
}

impl BookEntry {
    pub fn to_book(&self) -> Book {
        Book::new(
            self.title.as_str(),
            self.author.as_str(),
            self.category.as_str(),
        )
    }
}

impl PersonEntry {
    pub fn to_person(&self) -> Person {
        Person::new(self.name.as_str())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            ships: vec![ShipEntry {
                name: "Gatticca 3000".to_string(),
                captain: "Ethan Hawke".to_string(),
                fuel: 15.0,
            }],
            rectangles: vec![RectangleEntry {
                label: "epic".to_string(),
                length: 3.0,
                width: 4.0,
            }],
            books: vec![
                BookEntry {
                    title: "User Stories Applied".to_string(),
                    author: "Mike Cohn".to_string(),
                    category: "Technical".to_string(),
                },
                BookEntry {
                    title: "Pragmatic Thinking and Learning".to_string(),
                    author: "Andy Hunt".to_string(),
                    category: "Technical".to_string(),
                },
            ],
            people: vec![
                PersonEntry {
                    name: "Brianna".to_string(),
                },
                PersonEntry {
                    name: "Casi".to_string(),
                },
            ],
        }
    }
}

impl Roster {
    /// Whether the roster has nothing to print.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
            && self.rectangles.is_empty()
            && self.books.is_empty()
            && self.people.is_empty()
    }
}

/// Suspicious roster data. Advisory only: entities are still built.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterIssue {
    /// Ship at this index has a blank name.
    EmptyShipName(usize),
    /// Ship at this index has a blank captain.
    EmptyCaptain(usize),
    /// Ship carries negative (or NaN) fuel.
    InvalidFuel { index: usize, fuel: f64 },
    /// Rectangle side is zero, negative or not finite.
    NonPositiveDimension { label: String, length: f64, width: f64 },
    /// Book at this index has a blank title.
    EmptyTitle(usize),
    /// Person at this index has a blank name.
    EmptyPersonName(usize),
}

impl std::fmt::Display for RosterIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyShipName(i) => write!(f, "ship #{i} has an empty name"),
            Self::EmptyCaptain(i) => write!(f, "ship #{i} has an empty captain"),
            Self::InvalidFuel { index, fuel } => {
                write!(f, "ship #{index} has invalid fuel {fuel}")
            }
            Self::NonPositiveDimension {
                label,
                length,
                width,
            } => write!(
                f,
                "rectangle '{label}' has non-positive dimensions {length}x{width}"
            ),
            Self::EmptyTitle(i) => write!(f, "book #{i} has an empty title"),
            Self::EmptyPersonName(i) => write!(f, "person #{i} has an empty name"),
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Check a roster for suspicious values, returning every issue found.
pub fn validate_roster(roster: &Roster) -> Vec<RosterIssue> {
    let mut issues = Vec::new();

    for (i, ship) in roster.ships.iter().enumerate() {
        if ship.name.trim().is_empty() {
            issues.push(RosterIssue::EmptyShipName(i));
        }
        if ship.captain.trim().is_empty() {
            issues.push(RosterIssue::EmptyCaptain(i));
        }
        if ship.fuel.is_nan() || ship.fuel < 0.0 {
            issues.push(RosterIssue::InvalidFuel {
                index: i,
                fuel: ship.fuel,
            });
        }
    }

    for rect in &roster.rectangles {
        if !is_positive(rect.length) || !is_positive(rect.width) {
            issues.push(RosterIssue::NonPositiveDimension {
                label: rect.label.clone(),
                length: rect.length,
                width: rect.width,
            });
        }
    }

    for (i, book) in roster.books.iter().enumerate() {
        if book.title.trim().is_empty() {
            issues.push(RosterIssue::EmptyTitle(i));
        }
    }

    for (i, person) in roster.people.iter().enumerate() {
        if person.name.trim().is_empty() {
            issues.push(RosterIssue::EmptyPersonName(i));
        }
    }

    issues
}
