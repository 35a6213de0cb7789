pub mod achievement;
pub mod athlete;
pub mod common;
pub mod performance_test;
pub mod scout;
pub mod verification;
