pub mod scheduler;
pub mod state;

pub use scheduler::{
    Command, Intervals, RotationScheduler, RotationSnapshot, SchedulerHandle,
    DEFAULT_ADVANCE_INTERVAL, DEFAULT_REFRESH_INTERVAL, NO_STORIES, REFRESHING,
};
pub use state::Rotation;
