//! Module provides initialization of global application logger

use chrono::{Local, SecondsFormat};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log file creation failure: {0}")]
    File(#[from] std::io::Error),

    #[error("wrong logger configuration: {0}")]
    Config(String),

    #[error("logger has already been initialized: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Initializes the global logger for an application.
///
/// Records go to stderr so that stdout only carries the report.
///
/// # Errors
/// An error is returned if logger has already been initialized
/// or the log file could not be created.
///
pub fn init(config: &crate::config::Config) -> Result<Handle, LoggerError> {
    let pattern = "{d:<35} {l:<5} {t} >> {m}{n}";
    let encoder = Box::new(PatternEncoder::new(pattern));

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(encoder.clone())
        .build();
    let mut builder =
        Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if let Some(dir) = config.log_dir() {
        let file_name = format!(
            "logfile_{}.log",
            Local::now()
                .to_rfc3339_opts(SecondsFormat::Nanos, true)
                .replace(':', "-"),
        );
        let file = FileAppender::builder()
            .encoder(encoder)
            .build(dir.join(file_name))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder
        .build(root.build(config.log_level()))
        .map_err(|errors| LoggerError::Config(errors.to_string()))?;
    Ok(log4rs::init_config(log_config)?)
}
