pub mod achievement;
pub mod athlete;
pub mod athlete_view;
pub mod notification;
pub mod scout;
pub mod verification_level;

pub use achievement::{Achievement, AchievementTemplate, AchievementType};
pub use athlete::{Athlete, SkillsAssessment};
pub use athlete_view::AthleteView;
pub use notification::Notification;
pub use performance_test::{PerformanceTest, TestType};
pub use scout::Scout;
pub use verification_level::VerificationLevel;
