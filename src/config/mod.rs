pub mod aliases;
pub mod settings;

pub use aliases::{AliasEntry, AliasTable, get_aliases};
pub use settings::AppConfig;
