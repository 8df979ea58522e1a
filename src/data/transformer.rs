//! Transformer records: one combatant per input line, immutable once parsed.

use std::fmt;

use serde::Serialize;

/// Which side a Transformer fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Allegiance {
    Autobot,
    Decepticon,
}

impl Allegiance {
    /// Team name used in battle reports.
    pub const fn team_name(self) -> &'static str {
        match self {
            Self::Autobot => "Autobots",
            Self::Decepticon => "Decepticons",
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::Autobot => Self::Decepticon,
            Self::Decepticon => Self::Autobot,
        }
    }
}

impl fmt::Display for Allegiance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.team_name())
    }
}

/// Map a faction code to an allegiance. Only an exact `A` is an Autobot.
pub fn faction_code_to_allegiance(code: &str) -> Allegiance {
    match code {
        "A" => Allegiance::Autobot,
        _ => Allegiance::Decepticon,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transformer {
    pub name: String,
    pub allegiance: Allegiance,
    pub strength: i32,
    pub intelligence: i32,
    pub speed: i32,
    pub endurance: i32,
    pub rank: i32,
    pub courage: i32,
    pub firepower: i32,
    pub skill: i32,
}

impl Transformer {
    /// Strength + intelligence + speed + endurance + firepower.
    pub fn overall_rating(&self) -> i64 {
        [
            self.strength,
            self.intelligence,
            self.speed,
            self.endurance,
            self.firepower,
        ]
        .iter()
        .map(|&stat| i64::from(stat))
        .sum()
    }

    /// Case-insensitive name match, compared char by char.
    pub fn is_named(&self, name: &str) -> bool {
        let mut ours = self.name.chars();
        let mut theirs = name.chars();
        loop {
            match (ours.next(), theirs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if chars_match_ignoring_case(a, b) => {}
                _ => return false,
            }
        }
    }
}

/// Upper-case mapping that keeps the char when it only upper-cases to several chars (`ß`).
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

/// Lower-case mapping reduced to its leading char (`İ` lowers to `i` plus a combining dot).
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn chars_match_ignoring_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}
