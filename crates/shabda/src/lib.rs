mod pratyaya;
mod vibhakti;

pub use pratyaya::{DerivationMatch, analyze_derivation};
pub use vibhakti::{InflectionMatch, analyze_inflection};
