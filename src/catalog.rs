use crate::models::{CountryConfig, FleetConfig, Region, StatusMix, DEFAULT_LATENCY_MS};

pub fn default_fleet() -> FleetConfig {
    FleetConfig {
        countries: default_countries(),
        status_mix: StatusMix::default(),
        latency_ms: DEFAULT_LATENCY_MS,
        seed: None,
    }
}

pub fn default_countries() -> Vec<CountryConfig> {
    vec![
        country(
            "United States",
            Region::NorthAmerica,
            &["New York", "Los Angeles", "Chicago", "Miami"],
        ),
        country(
            "United Kingdom",
            Region::Europe,
            &["London", "Manchester", "Edinburgh"],
        ),
        country("Japan", Region::Asia, &["Tokyo", "Osaka", "Kyoto"]),
        country("Germany", Region::Europe, &["Berlin", "Frankfurt", "Munich"]),
        country("France", Region::Europe, &["Paris", "Lyon", "Marseille"]),
        country(
            "Canada",
            Region::NorthAmerica,
            &["Toronto", "Vancouver", "Montreal"],
        ),
        country(
            "Australia",
            Region::Oceania,
            &["Sydney", "Melbourne", "Perth"],
        ),
        country(
            "Brazil",
            Region::SouthAmerica,
            &["São Paulo", "Rio de Janeiro", "Brasília"],
        ),
        country("Singapore", Region::Asia, &["Singapore City"]),
        country("Netherlands", Region::Europe, &["Amsterdam", "Rotterdam"]),
    ]
}

fn country(name: &str, region: Region, cities: &[&str]) -> CountryConfig {
    CountryConfig {
        name: name.to_string(),
        region,
        cities: cities.iter().map(|city| city.to_string()).collect(),
    }
}
