//! Spaceship launch logic.
//!
//! A ship's launch result depends only on how much fuel it carries.
//! Three tiers, checked from the top down with strict lower bounds.

use serde::{Deserialize, Serialize};

/// Fuel (gallons) above which a launch reaches orbit cleanly.
pub const ORBIT_FUEL_THRESHOLD: f64 = 50.0;

/// Fuel (gallons) above which a launch scrapes into orbit.
pub const BARELY_FUEL_THRESHOLD: f64 = 25.0;

/// Launch outcome tiers based on fuel on board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchOutcome {
    /// Fuel > 50.
    Orbit,
    /// Fuel in (25, 50].
    Barely,
    /// Fuel <= 25, or not a number.
    Crashed,
}

impl LaunchOutcome {
    pub fn from_fuel(fuel: f64) -> Self {
        if fuel > ORBIT_FUEL_THRESHOLD {
            Self::Orbit
        } else if fuel > BARELY_FUEL_THRESHOLD {
            Self::Barely
        } else {
            Self::Crashed
        }
    }

    /// Whether the ship made it off the ground.
    pub fn reached_orbit(self) -> bool {
        matches!(self, Self::Orbit | Self::Barely)
    }

    /// Short lowercase label, used in verbose harness output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::Barely => "barely",
            Self::Crashed => "crashed",
        }
    }
}

/// A named ship with a captain and a fixed amount of fuel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spaceship {
    name: String,
    captain: String,
    fuel: f64,
}

impl Spaceship {
    pub fn new(name: impl Into<String>, captain: impl Into<String>, fuel: f64) -> Self {
        Self {
            name: name.into(),
            captain: captain.into(),
            fuel,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn captain(&self) -> &str {
        &self.captain
    }

    /// Fuel on board, in gallons.
    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn captains_announcement(&self) -> String {
        format!(
            "{} will be captained by {} for today's flight",
            self.name, self.captain
        )
    }

    pub fn launch_outcome(&self) -> LaunchOutcome {
        LaunchOutcome::from_fuel(self.fuel)
    }

    /// Describe how the launch went.
    pub fn launch(&self) -> String {
        match self.launch_outcome() {
            LaunchOutcome::Orbit => format!("{} has launched into orbit!!", self.name),
            LaunchOutcome::Barely => format!(
                "{} barely had enough fuel to make it into orbit!!",
                self.name
            ),
            LaunchOutcome::Crashed => format!(
                "Captain {} forgot to fill up the tank and attempted to take off with just {} gallons in the tank. {} promptly crashed back to earth upon takeoff *explosion in background*.",
                self.captain, self.fuel, self.name
            ),
        }
    }
}
