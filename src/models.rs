use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ONLINE_RATIO: f64 = 0.85;
pub const DEFAULT_LATENCY_MS: u64 = 1500;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FleetConfig {
    pub countries: Vec<CountryConfig>,
    #[serde(default)]
    pub status_mix: StatusMix,
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CountryConfig {
    pub name: String,
    pub region: Region,
    pub cities: Vec<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct StatusMix {
    pub online_ratio: f64,
}

impl Default for StatusMix {
    fn default() -> Self {
        Self {
            online_ratio: DEFAULT_ONLINE_RATIO,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Europe,
    NorthAmerica,
    Asia,
    SouthAmerica,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Europe,
        Region::NorthAmerica,
        Region::Asia,
        Region::SouthAmerica,
        Region::Oceania,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Asia => "Asia",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Europe => "europe",
            Region::NorthAmerica => "north-america",
            Region::Asia => "asia",
            Region::SouthAmerica => "south-america",
            Region::Oceania => "oceania",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ServerStatus {
    Online,
    Offline,
    Maintenance,
}

impl ServerStatus {
    pub const ALL: [ServerStatus; 3] = [
        ServerStatus::Online,
        ServerStatus::Offline,
        ServerStatus::Maintenance,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ServerStatus::Online => "Online",
            ServerStatus::Offline => "Offline",
            ServerStatus::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServerStatus::Online => "online",
            ServerStatus::Offline => "offline",
            ServerStatus::Maintenance => "maintenance",
        };
        write!(f, "{}", name)
    }
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mix_defaults_to_dominant_online() {
        let mix = StatusMix::default();
        assert_eq!(mix.online_ratio, DEFAULT_ONLINE_RATIO);
    }

    #[test]
    fn region_serializes_kebab_case() {
        let json = serde_json::to_string(&Region::NorthAmerica).unwrap();
        assert_eq!(json, "\"north-america\"");
        let parsed: Region = serde_json::from_str("\"south-america\"").unwrap();
        assert_eq!(parsed, Region::SouthAmerica);
    }

    #[test]
    fn region_display_matches_serde_name() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region));
        }
    }

    #[test]
    fn status_display_matches_serde_name() {
        for status in ServerStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn config_defaults_apply_when_fields_missing() {
        let config: FleetConfig = toml::from_str(
            r#"
[[countries]]
name = "Japan"
region = "asia"
cities = ["Tokyo"]
"#,
        )
        .unwrap();
        assert_eq!(config.latency_ms, DEFAULT_LATENCY_MS);
        assert_eq!(config.status_mix.online_ratio, DEFAULT_ONLINE_RATIO);
        assert_eq!(config.seed, None);
    }
}
