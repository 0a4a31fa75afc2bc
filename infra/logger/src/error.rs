use std::borrow::Cow;

/// Error types raised while assembling the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Invalid logger configuration: {0}")]
    InvalidConfiguration(Cow<'static, str>),

    #[error("Failed to install the global subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to build the rolling file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("Logger I/O error: {0}")]
    Io(#[from] std::io::Error),
}
