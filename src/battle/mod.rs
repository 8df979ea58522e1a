pub mod engine;
pub mod report;

pub use engine::{
    resolve_battle, resolve_fight, BattleSummary, Decision, FactionResult, Fight, FightOutcome,
    COURAGE_MARGIN, OPTIMUS_PRIME, PREDAKING, SKILL_MARGIN, STRENGTH_MARGIN,
};
pub use report::format_summary;
