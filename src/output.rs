use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::events::{Notice, Notifier};
use crate::models::ServerStatus;
use crate::state::ServerRecord;
use crate::summary::Counters;

pub struct StatusReport<'a> {
    pub counters: Counters,
    // Post-filter view; `total` is the pre-filter snapshot size.
    pub servers: &'a [ServerRecord],
    pub total: usize,
    pub now: DateTime<Utc>,
}

pub trait Formatter {
    fn write(&self, report: &StatusReport) -> String;
}

pub struct HumanFormatter;
pub struct SummaryFormatter;
pub struct JsonFormatter;

impl Formatter for SummaryFormatter {
    fn write(&self, report: &StatusReport) -> String {
        summary_block(&report.counters)
    }
}

impl Formatter for HumanFormatter {
    fn write(&self, report: &StatusReport) -> String {
        let mut out = summary_block(&report.counters);
        let _ = writeln!(
            out,
            "Showing {} of {} servers",
            report.servers.len(),
            report.total
        );
        if report.servers.is_empty() && report.total > 0 {
            out.push_str(
                "No servers match the current filters; drop --search/--region/--status to reset.\n",
            );
            return out;
        }
        for record in report.servers {
            let age_secs = (report.now - record.last_updated).num_seconds().max(0);
            match record.status {
                ServerStatus::Online => {
                    let _ = writeln!(
                        out,
                        "{}: {} (ping {}ms, load {}%) [{}, {}] updated {}s ago",
                        record.name,
                        record.status,
                        record.ping_ms,
                        record.load_pct,
                        record.country,
                        record.region.label(),
                        age_secs
                    );
                }
                _ => {
                    let _ = writeln!(
                        out,
                        "{}: {} [{}, {}] updated {}s ago",
                        record.name,
                        record.status,
                        record.country,
                        record.region.label(),
                        age_secs
                    );
                }
            }
        }
        out
    }
}

impl Formatter for JsonFormatter {
    fn write(&self, report: &StatusReport) -> String {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            counters: Counters,
            total: usize,
            shown: usize,
            servers: &'a [ServerRecord],
        }

        let json = JsonReport {
            counters: report.counters,
            total: report.total,
            shown: report.servers.len(),
            servers: report.servers,
        };
        let mut out = serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}

fn summary_block(counters: &Counters) -> String {
    let mut out = String::from("Summary:\n");
    for status in [
        ServerStatus::Online,
        ServerStatus::Maintenance,
        ServerStatus::Offline,
    ] {
        let _ = writeln!(
            out,
            "{}: {} ({}%)",
            status,
            counters.count(status),
            percent(counters, status)
        );
    }
    let _ = writeln!(out, "total: {}", counters.total());
    out
}

fn percent(counters: &Counters, status: ServerStatus) -> u32 {
    (counters.fraction(status) * 100.0).round() as u32
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::RefreshStarted => println!("Refreshing server status..."),
            Notice::RefreshCompleted { total, online } => {
                println!("Server status updated: {} servers ({} online)", total, online);
            }
            Notice::RefreshFailed { reason } => println!("Refresh failed: {}", reason),
        }
    }
}
