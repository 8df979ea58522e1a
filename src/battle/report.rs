use std::fmt::Write as _;

use crate::battle::engine::{BattleSummary, FactionResult};

fn push_roster(out: &mut String, label: &str, faction: &FactionResult) {
    let _ = write!(out, "{label} ({}):", faction.allegiance);
    for name in faction.survivor_names() {
        let _ = write!(out, " {name}");
    }
    let _ = writeln!(out);
}

/// Render the battle outcome: fight count, winning team, then the losing team's survivors.
pub fn format_summary(summary: &BattleSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} battle(s)", summary.fight_count());

    match summary.winner() {
        Some(winner) => {
            push_roster(&mut out, "Winning team", summary.faction(winner));
            push_roster(
                &mut out,
                "Survivors from the losing team",
                summary.faction(winner.opponent()),
            );
        }
        None => {
            let _ = writeln!(out, "Winning team : It's a draw");
        }
    }
    out
}
