use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefreshKind {
    Initial,
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingLoad {
    pub due_at: DateTime<Utc>,
    pub kind: RefreshKind,
}

impl PendingLoad {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at <= now
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    RefreshStarted,
    RefreshCompleted { total: usize, online: usize },
    RefreshFailed { reason: String },
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notice: Notice) {}
}
