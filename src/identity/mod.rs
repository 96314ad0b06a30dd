mod normalizer;

pub use normalizer::{NameNormalizer, capitalize_first};
