/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::planner::TRAVEL_TIME_PER_FLOOR;
use crate::error::SimulatorError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulator: SimulatorConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub travel_time_per_floor: u32,
    pub rules_path: PathBuf,
    pub show_banner: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            travel_time_per_floor: TRAVEL_TIME_PER_FLOOR,
            rules_path: PathBuf::from("README.md"),
            show_banner: true,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, SimulatorError> {
    let config_str = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(SimulatorError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    parse_config(&config_str).map_err(|e| match e {
        ParseFailure::Toml(source) => SimulatorError::ConfigParse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Invalid(msg) => SimulatorError::InvalidConfig(msg),
    })
}

/***************************************/
/*          Private helpers            */
/***************************************/
enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(String),
}

fn parse_config(config_str: &str) -> Result<Config, ParseFailure> {
    let config: Config = toml::from_str(config_str).map_err(ParseFailure::Toml)?;

    if config.simulator.travel_time_per_floor == 0 {
        return Err(ParseFailure::Invalid(
            "travel_time_per_floor must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}

/***************************************/
/*             Unit tests              */
/***************************************/
