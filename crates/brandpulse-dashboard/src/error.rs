use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The periodic refresh schedule was already started for this controller.
    #[error("dashboard controller already started")]
    AlreadyStarted,

    /// The refresh interval in [`ControllerSettings`](crate::ControllerSettings) is zero.
    #[error("refresh interval must be greater than zero")]
    InvalidInterval,

    #[error(transparent)]
    Client(#[from] brandpulse_client::ClientError),
}
