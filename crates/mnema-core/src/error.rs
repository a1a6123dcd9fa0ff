//! Error types for the scheduling engine

/// Scheduling error
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    /// Grade outside the 0-5 recall quality range
    #[error("Invalid grade: {0} (expected 0-5)")]
    InvalidGrade(u8),
}

/// Scheduler result type
pub type Result<T> = std::result::Result<T, SchedulerError>;
