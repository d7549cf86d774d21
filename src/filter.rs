use crate::models::{Region, ServerStatus};
use crate::state::ServerRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub region: Option<Region>,
    pub status: Option<ServerStatus>,
}

impl FilterCriteria {
    pub fn is_unset(&self) -> bool {
        self.search.is_empty() && self.region.is_none() && self.status.is_none()
    }

    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }

    pub fn matches(&self, record: &ServerRecord) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            record.name.to_lowercase().contains(&needle)
                || record.country.to_lowercase().contains(&needle)
        };
        let matches_region = self.region.map_or(true, |region| record.region == region);
        let matches_status = self.status.map_or(true, |status| record.status == status);
        matches_search && matches_region && matches_status
    }
}

pub fn apply_filters(snapshot: &[ServerRecord], criteria: &FilterCriteria) -> Vec<ServerRecord> {
    snapshot
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

// Distinct regions in first-appearance order, for filter affordances.
pub fn regions_present(snapshot: &[ServerRecord]) -> Vec<Region> {
    let mut seen = Vec::new();
    for record in snapshot {
        if !seen.contains(&record.region) {
            seen.push(record.region);
        }
    }
    seen
}
