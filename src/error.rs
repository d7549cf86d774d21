use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("catalog must contain at least one country")]
    EmptyCatalog,
    #[error("country entry must have a name")]
    InvalidCountryEntry,
    #[error("country '{0}' must list at least one city")]
    EmptyCityList(String),
    #[error("country '{0}' contains an empty city name")]
    InvalidCityEntry(String),
    #[error("duplicate country '{0}'")]
    DuplicateCountry(String),
    #[error("duplicate city '{1}' in country '{0}'")]
    DuplicateCity(String, String),
    #[error("online ratio must be within [0, 1] (got {0})")]
    InvalidOnlineRatio(f64),
    #[error("snapshot generation failed: {0}")]
    Generation(String),
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
