/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::path::PathBuf;
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/

/// Failures that stop the simulator.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize trip report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Rejected user input. The message is shown to the user before re-prompting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("The input is not an integer.")]
    NotAnInteger(String),

    #[error("Please choose either u or d")]
    InvalidDirection(String),

    #[error("The input is not an array.")]
    NotAnArray(String),

    #[error("Input value: {0} is not an int. Please only enter integer values in your floors array.")]
    NotAnIntElement(String),

    #[error("Invalid input. Please enter a valid array.")]
    MalformedArray(String),
}
