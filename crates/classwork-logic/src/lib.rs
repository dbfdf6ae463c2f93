//! Toy value types for Classwork.
//!
//! Each entity is an immutable record with a few derived values and a
//! textual summary. Nothing here touches I/O; the demo harness does the
//! printing.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`book`] | Catalog entries and their citation line |
//! | [`person`] | Names and greetings |
//! | [`rectangle`] | Perimeter, area and structured summary |
//! | [`roster`] | Demo data (JSON-loadable) and advisory validation |
//! | [`spaceship`] | Captain announcements and the fuel-tiered launch |
//! | [`transcript`] | Renders a roster into printed lines |

pub mod book;
pub mod person;
pub mod rectangle;
pub mod roster;
pub mod spaceship;
pub mod transcript;
