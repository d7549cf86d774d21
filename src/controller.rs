use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::events::{Notice, Notifier, PendingLoad, RefreshKind};
use crate::filter::{apply_filters, FilterCriteria};
use crate::generator::SnapshotSource;
use crate::state::{FleetSnapshot, ServerRecord};
use crate::summary::Counters;

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Loading(PendingLoad),
    Ready,
    Failed(String),
}

pub struct RefreshController<S, N> {
    source: S,
    notifier: N,
    latency: Duration,
    phase: Phase,
    snapshot: FleetSnapshot,
    criteria: FilterCriteria,
}

impl<S: SnapshotSource, N: Notifier> RefreshController<S, N> {
    pub fn new(source: S, notifier: N, latency_ms: u64) -> Self {
        Self {
            source,
            notifier,
            latency: Duration::milliseconds(latency_ms as i64),
            phase: Phase::Idle,
            snapshot: Vec::new(),
            criteria: FilterCriteria::default(),
        }
    }

    // Initial load; silent, unlike a manual refresh.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Loading(PendingLoad {
            due_at: now + self.latency,
            kind: RefreshKind::Initial,
        });
    }

    // Returns false while a load is already in flight: at most one at a time.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_loading() {
            debug!("refresh ignored: load already in flight");
            return false;
        }
        self.notifier.notify(Notice::RefreshStarted);
        self.phase = Phase::Loading(PendingLoad {
            due_at: now + self.latency,
            kind: RefreshKind::Manual,
        });
        true
    }

    pub fn tick(&mut self, now: DateTime<Utc>) {
        let pending = match self.phase {
            Phase::Loading(pending) if pending.is_due(now) => pending,
            _ => return,
        };
        match self.source.load(now) {
            Ok(snapshot) => {
                debug!("load complete: {} servers", snapshot.len());
                self.snapshot = snapshot;
                self.phase = Phase::Ready;
                if pending.kind == RefreshKind::Manual {
                    let counters = Counters::summarize(&self.snapshot);
                    self.notifier.notify(Notice::RefreshCompleted {
                        total: counters.total(),
                        online: counters.online,
                    });
                }
            }
            Err(err) => {
                // The last-good snapshot survives a failed load.
                let reason = err.to_string();
                debug!("load failed: {}", reason);
                self.phase = Phase::Failed(reason.clone());
                self.notifier.notify(Notice::RefreshFailed { reason });
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> &[ServerRecord] {
        &self.snapshot
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn reset_criteria(&mut self) {
        self.criteria.reset();
    }

    pub fn current_view(&self) -> Vec<ServerRecord> {
        apply_filters(&self.snapshot, &self.criteria)
    }

    pub fn counters(&self) -> Counters {
        Counters::summarize(&self.snapshot)
    }
}
