pub mod roster;
pub mod transformer;

pub use roster::{load_roster, parse_record, parse_roster, RecordError, RosterError};
pub use transformer::{faction_code_to_allegiance, Allegiance, Transformer};
