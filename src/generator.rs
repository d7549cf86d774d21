use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::models::{CountryConfig, FleetConfig, ServerStatus, StatusMix};
use crate::state::{FleetSnapshot, ServerRecord};

pub const MAX_SERVERS_PER_CITY: u32 = 3;
const LAST_UPDATED_WINDOW_MS: i64 = 3_600_000;

pub trait SnapshotSource {
    fn load(&mut self, now: DateTime<Utc>) -> Result<FleetSnapshot>;
}

pub struct FleetGenerator {
    config: FleetConfig,
    rng: StdRng,
}

impl FleetGenerator {
    pub fn new(config: FleetConfig) -> Result<Self> {
        validate_catalog(&config)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn generate(&mut self, now: DateTime<Utc>) -> FleetSnapshot {
        let mut servers = Vec::new();
        for country in &self.config.countries {
            for city in &country.cities {
                let per_city = self.rng.gen_range(1..=MAX_SERVERS_PER_CITY);
                for index in 1..=per_city {
                    servers.push(spawn_record(
                        country,
                        city,
                        index,
                        &self.config.status_mix,
                        now,
                        &mut self.rng,
                    ));
                }
            }
        }
        debug!(
            "generated {} servers across {} countries",
            servers.len(),
            self.config.countries.len()
        );
        servers
    }
}

impl SnapshotSource for FleetGenerator {
    fn load(&mut self, now: DateTime<Utc>) -> Result<FleetSnapshot> {
        Ok(self.generate(now))
    }
}

fn spawn_record(
    country: &CountryConfig,
    city: &str,
    index: u32,
    mix: &StatusMix,
    now: DateTime<Utc>,
    rng: &mut StdRng,
) -> ServerRecord {
    let status = if rng.gen::<f64>() < mix.online_ratio {
        ServerStatus::Online
    } else if rng.gen_bool(0.5) {
        ServerStatus::Maintenance
    } else {
        ServerStatus::Offline
    };
    let (ping_ms, load_pct) = match status {
        ServerStatus::Online => (rng.gen_range(10u32..110), rng.gen_range(10u8..90)),
        _ => (0, 0),
    };
    let name = if index == 1 {
        city.to_string()
    } else {
        format!("{} {}", city, index)
    };
    ServerRecord {
        id: slug(&country.name, city, index),
        name,
        country: country.name.clone(),
        region: country.region,
        status,
        ping_ms,
        load_pct,
        last_updated: now - Duration::milliseconds(rng.gen_range(0..LAST_UPDATED_WINDOW_MS)),
    }
}

fn slug(country: &str, city: &str, index: u32) -> String {
    format!("{} {} {}", country, city, index)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn validate_catalog(config: &FleetConfig) -> Result<()> {
    if config.countries.is_empty() {
        return Err(Error::EmptyCatalog);
    }
    let mut names = HashSet::new();
    for country in &config.countries {
        if country.name.trim().is_empty() {
            return Err(Error::InvalidCountryEntry);
        }
        if !names.insert(country.name.as_str()) {
            return Err(Error::DuplicateCountry(country.name.clone()));
        }
        if country.cities.is_empty() {
            return Err(Error::EmptyCityList(country.name.clone()));
        }
        let mut cities = HashSet::new();
        for city in &country.cities {
            if city.trim().is_empty() {
                return Err(Error::InvalidCityEntry(country.name.clone()));
            }
            if !cities.insert(city.as_str()) {
                return Err(Error::DuplicateCity(country.name.clone(), city.clone()));
            }
        }
    }
    let ratio = config.status_mix.online_ratio;
    if !(0.0..=1.0).contains(&ratio) {
        return Err(Error::InvalidOnlineRatio(ratio));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::Region;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
    }

    fn seeded_config(seed: u64) -> FleetConfig {
        let mut config = catalog::default_fleet();
        config.seed = Some(seed);
        config
    }

    #[test]
    fn generated_ids_are_unique_and_non_empty() {
        let mut generator = FleetGenerator::new(seeded_config(42)).unwrap();
        let snapshot = generator.generate(fixed_now());
        let mut ids = HashSet::new();
        for record in &snapshot {
            assert!(!record.id.is_empty());
            assert!(ids.insert(record.id.clone()), "duplicate id {}", record.id);
        }
    }

    #[test]
    fn non_empty_catalog_yields_non_empty_snapshot() {
        let mut generator = FleetGenerator::new(seeded_config(7)).unwrap();
        assert!(!generator.generate(fixed_now()).is_empty());
    }

    #[test]
    fn same_seed_yields_identical_snapshot_sequences() {
        let mut first = FleetGenerator::new(seeded_config(99)).unwrap();
        let mut second = FleetGenerator::new(seeded_config(99)).unwrap();
        let now = fixed_now();
        assert_eq!(first.generate(now), second.generate(now));
        assert_eq!(first.generate(now), second.generate(now));
    }

    #[test]
    fn non_online_servers_carry_zero_metrics() {
        let mut generator = FleetGenerator::new(seeded_config(3)).unwrap();
        for record in generator.generate(fixed_now()) {
            if record.status != ServerStatus::Online {
                assert_eq!(record.ping_ms, 0);
                assert_eq!(record.load_pct, 0);
            }
        }
    }

    #[test]
    fn online_metrics_stay_within_bounds() {
        let mut generator = FleetGenerator::new(seeded_config(11)).unwrap();
        for record in generator.generate(fixed_now()) {
            if record.status == ServerStatus::Online {
                assert!((10..110).contains(&record.ping_ms));
                assert!((10..90).contains(&record.load_pct));
            }
        }
    }

    #[test]
    fn last_updated_falls_within_the_preceding_hour() {
        let mut generator = FleetGenerator::new(seeded_config(5)).unwrap();
        let now = fixed_now();
        for record in generator.generate(now) {
            assert!(record.last_updated <= now);
            assert!(now - record.last_updated < Duration::hours(1));
        }
    }

    #[test]
    fn servers_per_city_stay_within_bounds() {
        let mut generator = FleetGenerator::new(seeded_config(13)).unwrap();
        let snapshot = generator.generate(fixed_now());
        let catalog = catalog::default_countries();
        let city_count: usize = catalog.iter().map(|country| country.cities.len()).sum();
        assert!(snapshot.len() >= city_count);
        assert!(snapshot.len() <= city_count * MAX_SERVERS_PER_CITY as usize);
    }

    #[test]
    fn all_online_ratio_produces_only_online_servers() {
        let mut config = seeded_config(1);
        config.status_mix.online_ratio = 1.0;
        let mut generator = FleetGenerator::new(config).unwrap();
        assert!(generator
            .generate(fixed_now())
            .iter()
            .all(ServerRecord::is_online));
    }

    #[test]
    fn zero_online_ratio_produces_no_online_servers() {
        let mut config = seeded_config(1);
        config.status_mix.online_ratio = 0.0;
        let mut generator = FleetGenerator::new(config).unwrap();
        assert!(!generator
            .generate(fixed_now())
            .iter()
            .any(ServerRecord::is_online));
    }

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(slug("United States", "New York", 2), "united-states-new-york-2");
        assert_eq!(slug("Japan", "Tokyo", 1), "japan-tokyo-1");
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let config = FleetConfig {
            countries: Vec::new(),
            status_mix: StatusMix::default(),
            latency_ms: 0,
            seed: None,
        };
        assert!(matches!(
            FleetGenerator::new(config),
            Err(Error::EmptyCatalog)
        ));
    }

    #[test]
    fn duplicate_country_is_rejected() {
        let mut config = seeded_config(1);
        let copy = config.countries[0].clone();
        config.countries.push(copy);
        assert!(matches!(
            FleetGenerator::new(config),
            Err(Error::DuplicateCountry(_))
        ));
    }

    #[test]
    fn duplicate_city_is_rejected() {
        let mut config = seeded_config(1);
        let first_city = config.countries[0].cities[0].clone();
        config.countries[0].cities.push(first_city);
        assert!(matches!(
            FleetGenerator::new(config),
            Err(Error::DuplicateCity(_, _))
        ));
    }

    #[test]
    fn country_without_cities_is_rejected() {
        let config = FleetConfig {
            countries: vec![CountryConfig {
                name: "Japan".to_string(),
                region: Region::Asia,
                cities: Vec::new(),
            }],
            status_mix: StatusMix::default(),
            latency_ms: 0,
            seed: None,
        };
        assert!(matches!(
            FleetGenerator::new(config),
            Err(Error::EmptyCityList(_))
        ));
    }

    #[test]
    fn out_of_range_online_ratio_is_rejected() {
        for ratio in [-0.1, 1.5, f64::NAN] {
            let mut config = seeded_config(1);
            config.status_mix.online_ratio = ratio;
            assert!(matches!(
                FleetGenerator::new(config),
                Err(Error::InvalidOnlineRatio(_))
            ));
        }
    }

    #[test]
    fn city_suffix_disambiguates_shared_names() {
        let mut generator = FleetGenerator::new(seeded_config(21)).unwrap();
        for record in generator.generate(fixed_now()) {
            if record.id.ends_with("-1") {
                assert!(!record.name.ends_with(" 1"));
            } else {
                let suffix = record.id.rsplit('-').next().unwrap();
                assert!(record.name.ends_with(suffix));
            }
        }
    }
}
