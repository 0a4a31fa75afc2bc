use aivo_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_only_logger_initializes_without_a_guard() -> Result<(), LoggerError> {
    let logger = Logger::builder().name("console-app").level(LevelFilter::DEBUG).init()?;

    tracing::debug!("console line");
    assert!(logger.guard().is_none(), "no file layer, no worker guard");
    Ok(())
}
