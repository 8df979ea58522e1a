//! Battle resolution: rank-ordered pairing of Autobots against Decepticons
//! and the face-off rule chain.

use std::cmp::Reverse;

use serde::Serialize;

use crate::data::{Allegiance, Transformer};

pub const OPTIMUS_PRIME: &str = "Optimus Prime";
pub const PREDAKING: &str = "Predaking";

/// Courage lead needed (together with [`STRENGTH_MARGIN`]) to make an opponent run away.
pub const COURAGE_MARGIN: i64 = 4;
pub const STRENGTH_MARGIN: i64 = 3;
pub const SKILL_MARGIN: i64 = 3;

/// Which rule decided a one-sided face-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Optimus Prime or Predaking wins automatically.
    Leader,
    /// Opponent was down on both courage and strength and ran away.
    RanAway,
    Skill,
    OverallRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FightOutcome {
    Victory {
        winner: Allegiance,
        decision: Decision,
    },
    /// Equal on every criterion; both fighters are destroyed.
    Tie,
    /// Optimus Prime met Predaking: the battle ends with everyone destroyed.
    Annihilation,
}

impl FightOutcome {
    /// Whether a fighter of `side` is destroyed by this outcome.
    pub fn destroys(self, side: Allegiance) -> bool {
        match self {
            Self::Victory { winner, .. } => winner != side,
            Self::Tie | Self::Annihilation => true,
        }
    }
}

/// One face-off, in pairing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fight {
    pub autobot: String,
    pub decepticon: String,
    pub outcome: FightOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactionResult {
    pub allegiance: Allegiance,
    /// Opponents this faction's fighters destroyed.
    pub destroyed_opponents: usize,
    /// Remaining roster in rank order.
    pub survivors: Vec<Transformer>,
}

impl FactionResult {
    pub fn survivor_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.survivors.iter().map(|t| t.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleSummary {
    pub fights: Vec<Fight>,
    pub autobots: FactionResult,
    pub decepticons: FactionResult,
}

impl BattleSummary {
    pub fn fight_count(&self) -> usize {
        self.fights.len()
    }

    pub fn faction(&self, allegiance: Allegiance) -> &FactionResult {
        match allegiance {
            Allegiance::Autobot => &self.autobots,
            Allegiance::Decepticon => &self.decepticons,
        }
    }

    /// Faction with strictly more destroyed opponents, `None` on a draw.
    pub fn winner(&self) -> Option<Allegiance> {
        let autobot_wins = self.autobots.destroyed_opponents;
        let decepticon_wins = self.decepticons.destroyed_opponents;
        if autobot_wins > decepticon_wins {
            Some(Allegiance::Autobot)
        } else if decepticon_wins > autobot_wins {
            Some(Allegiance::Decepticon)
        } else {
            None
        }
    }

    pub fn loser(&self) -> Option<&FactionResult> {
        self.winner().map(|winner| self.faction(winner.opponent()))
    }
}

fn outclasses(stat: i32, opponent_stat: i32, margin: i64) -> bool {
    i64::from(stat) >= i64::from(opponent_stat) + margin
}

fn ran_away(coward: &Transformer, opponent: &Transformer) -> bool {
    outclasses(opponent.courage, coward.courage, COURAGE_MARGIN)
        && outclasses(opponent.strength, coward.strength, STRENGTH_MARGIN)
}

/// Apply the face-off rule chain; the first matching rule decides.
pub fn resolve_fight(autobot: &Transformer, decepticon: &Transformer) -> FightOutcome {
    let autobot_wins = |decision| FightOutcome::Victory {
        winner: Allegiance::Autobot,
        decision,
    };
    let decepticon_wins = |decision| FightOutcome::Victory {
        winner: Allegiance::Decepticon,
        decision,
    };

    let prime = autobot.is_named(OPTIMUS_PRIME);
    let predaking = decepticon.is_named(PREDAKING);
    if prime && predaking {
        return FightOutcome::Annihilation;
    }
    if prime {
        return autobot_wins(Decision::Leader);
    }
    if predaking {
        return decepticon_wins(Decision::Leader);
    }

    if ran_away(decepticon, autobot) {
        return autobot_wins(Decision::RanAway);
    }
    if ran_away(autobot, decepticon) {
        return decepticon_wins(Decision::RanAway);
    }

    if outclasses(autobot.skill, decepticon.skill, SKILL_MARGIN) {
        return autobot_wins(Decision::Skill);
    }
    if outclasses(decepticon.skill, autobot.skill, SKILL_MARGIN) {
        return decepticon_wins(Decision::Skill);
    }

    let autobot_rating = autobot.overall_rating();
    let decepticon_rating = decepticon.overall_rating();
    if autobot_rating > decepticon_rating {
        autobot_wins(Decision::OverallRating)
    } else if decepticon_rating > autobot_rating {
        decepticon_wins(Decision::OverallRating)
    } else {
        FightOutcome::Tie
    }
}

/// Split a faction out of the input, highest rank first. Equal ranks keep input order.
fn ranked_faction(transformers: &[Transformer], allegiance: Allegiance) -> Vec<Transformer> {
    let mut faction: Vec<Transformer> = transformers
        .iter()
        .filter(|t| t.allegiance == allegiance)
        .cloned()
        .collect();
    faction.sort_by_key(|t| Reverse(t.rank));
    faction
}

fn survivors(faction: Vec<Transformer>, destroyed: &[bool]) -> Vec<Transformer> {
    faction
        .into_iter()
        .zip(destroyed.iter().copied().chain(std::iter::repeat(false)))
        .filter_map(|(transformer, gone)| (!gone).then_some(transformer))
        .collect()
}

/// Run the whole battle over `transformers` (in file order).
pub fn resolve_battle(transformers: &[Transformer]) -> BattleSummary {
    let autobots = ranked_faction(transformers, Allegiance::Autobot);
    let decepticons = ranked_faction(transformers, Allegiance::Decepticon);

    let pairings = autobots.len().min(decepticons.len());
    let mut autobot_destroyed = vec![false; pairings];
    let mut decepticon_destroyed = vec![false; pairings];
    let mut fights = Vec::with_capacity(pairings);
    let mut annihilated = false;

    for (index, (autobot, decepticon)) in autobots.iter().zip(&decepticons).enumerate() {
        let outcome = resolve_fight(autobot, decepticon);
        tracing::debug!(
            fight = index + 1,
            autobot = %autobot.name,
            decepticon = %decepticon.name,
            ?outcome,
            "fight resolved"
        );
        fights.push(Fight {
            autobot: autobot.name.clone(),
            decepticon: decepticon.name.clone(),
            outcome,
        });

        if outcome == FightOutcome::Annihilation {
            annihilated = true;
            break;
        }
        autobot_destroyed[index] = outcome.destroys(Allegiance::Autobot);
        decepticon_destroyed[index] = outcome.destroys(Allegiance::Decepticon);
    }

    let autobot_wins = decepticon_destroyed.iter().filter(|&&gone| gone).count();
    let decepticon_wins = autobot_destroyed.iter().filter(|&&gone| gone).count();

    let (autobot_survivors, decepticon_survivors) = if annihilated {
        (Vec::new(), Vec::new())
    } else {
        (
            survivors(autobots, &autobot_destroyed),
            survivors(decepticons, &decepticon_destroyed),
        )
    };

    let summary = BattleSummary {
        fights,
        autobots: FactionResult {
            allegiance: Allegiance::Autobot,
            destroyed_opponents: autobot_wins,
            survivors: autobot_survivors,
        },
        decepticons: FactionResult {
            allegiance: Allegiance::Decepticon,
            destroyed_opponents: decepticon_wins,
            survivors: decepticon_survivors,
        },
    };
    tracing::info!(
        fights = summary.fight_count(),
        autobot_wins,
        decepticon_wins,
        annihilated,
        "battle resolved"
    );
    summary
}
