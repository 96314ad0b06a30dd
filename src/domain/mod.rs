mod collection;
pub mod dates;
pub mod models;

pub use collection::TournamentCollection;
pub use dates::{format_date, parse_date};
pub use models::*;
