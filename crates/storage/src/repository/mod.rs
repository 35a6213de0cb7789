pub mod achievement;
pub mod athlete;
pub mod athlete_view;
pub mod check_in;
pub mod notification;
pub mod performance_test;
pub mod scout;
