use thiserror::Error;

/// Error returned when an agent or exploration policy is configured with invalid hyperparameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for `{name}`: {value} is not in the interval {interval}.")]
    OutOfInterval {
        name: &'static str,
        value: f64,
        interval: String,
    },
}
