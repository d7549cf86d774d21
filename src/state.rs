use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Region, ServerStatus};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServerRecord {
    pub id: String,
    pub name: String,
    pub country: String,
    pub region: Region,
    pub status: ServerStatus,
    pub ping_ms: u32,
    pub load_pct: u8,
    pub last_updated: DateTime<Utc>,
}

impl ServerRecord {
    pub fn is_online(&self) -> bool {
        self.status == ServerStatus::Online
    }
}

pub type FleetSnapshot = Vec<ServerRecord>;
