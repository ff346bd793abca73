pub mod goal;
pub mod week;

pub use goal::{GoalRow, RoadmapRow, UserGoalInput};
pub use week::{CuratedCourse, WeekPlan};
