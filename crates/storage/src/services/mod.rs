pub mod achievements;
pub mod percentile;
pub mod store;
pub mod streak;
pub mod verification;
