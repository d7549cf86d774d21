use serde::Serialize;

use crate::models::ServerStatus;
use crate::state::ServerRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub online: usize,
    pub maintenance: usize,
    pub offline: usize,
}

impl Counters {
    pub fn summarize(snapshot: &[ServerRecord]) -> Self {
        let mut counters = Counters::default();
        for record in snapshot {
            match record.status {
                ServerStatus::Online => counters.online += 1,
                ServerStatus::Maintenance => counters.maintenance += 1,
                ServerStatus::Offline => counters.offline += 1,
            }
        }
        counters
    }

    pub fn total(&self) -> usize {
        self.online + self.maintenance + self.offline
    }

    pub fn count(&self, status: ServerStatus) -> usize {
        match status {
            ServerStatus::Online => self.online,
            ServerStatus::Maintenance => self.maintenance,
            ServerStatus::Offline => self.offline,
        }
    }

    // An empty snapshot reports 0.0 rather than dividing by zero.
    pub fn fraction(&self, status: ServerStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(status) as f64 / total as f64
    }
}
