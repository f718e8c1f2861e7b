use std::error::Error;
use std::fmt;
use tokio_cron_scheduler::JobSchedulerError;

/// Custom Error and Result types to unify errors from all sources.
pub type BotResult<T> = Result<T, BotError>;

#[derive(Debug)]
pub enum BotError {
    Http(String),
    // Non-success answer from a remote API, with the body it sent back.
    Upstream { status: u16, body: String },
    Parse(String),
    Config(String),
    Scheduler(String),
    Template(String),
    Signature(String),
    Io(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BotError::Http(s) => write!(f, "HTTP Error: {}", s),
            BotError::Upstream { status, body } => {
                write!(f, "Upstream Error: status {}, body: {}", status, body)
            }
            BotError::Parse(s) => write!(f, "Parse Error: {}", s),
            BotError::Config(s) => write!(f, "Config Error: {}", s),
            BotError::Scheduler(s) => write!(f, "Scheduler Error: {}", s),
            BotError::Template(s) => write!(f, "Template Error: {}", s),
            BotError::Signature(s) => write!(f, "Signature Error: {}", s),
            BotError::Io(s) => write!(f, "IO Error: {}", s),
        }
    }
}

impl Error for BotError {}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::Http(error.to_string())
    }
}

impl From<JobSchedulerError> for BotError {
    fn from(error: JobSchedulerError) -> Self {
        BotError::Scheduler(error.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(error: serde_json::Error) -> Self {
        BotError::Parse(error.to_string())
    }
}

impl From<figment::Error> for BotError {
    fn from(error: figment::Error) -> Self {
        BotError::Config(error.to_string())
    }
}

impl From<minijinja::Error> for BotError {
    fn from(error: minijinja::Error) -> Self {
        BotError::Template(error.to_string())
    }
}

impl From<std::io::Error> for BotError {
    fn from(error: std::io::Error) -> Self {
        BotError::Io(error.to_string())
    }
}
