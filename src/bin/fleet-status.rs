use chrono::{DateTime, Duration, Utc};

use fleet_status::cli::{self, Command, ConfigArgs, FormatArg, SimulateArgs, StatusArgs};
use fleet_status::config;
use fleet_status::controller::RefreshController;
use fleet_status::error::{Error, Result};
use fleet_status::events::{Notifier, NullNotifier};
use fleet_status::filter::FilterCriteria;
use fleet_status::generator::{FleetGenerator, SnapshotSource};
use fleet_status::models::Region;
use fleet_status::output::{
    ConsoleNotifier, Formatter, HumanFormatter, JsonFormatter, StatusReport, SummaryFormatter,
};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args()?;
    match cli.command {
        Command::Status(args) => run_status(args),
        Command::Simulate(args) => run_simulate(args),
        Command::ListRegions => {
            for region in Region::ALL {
                println!("{}", region);
            }
            Ok(())
        }
        Command::ShowConfig(args) => run_show_config(args),
    }
}

fn run_status(args: StatusArgs) -> Result<()> {
    let config = config::resolve(&args.config)?;
    let latency_ms = config.latency_ms;
    let generator = FleetGenerator::new(config)?;
    let mut controller = RefreshController::new(generator, NullNotifier, latency_ms);

    let started = Utc::now();
    let done = drive_load(&mut controller, started, latency_ms, |c, now| {
        c.start(now);
    });

    controller.set_criteria(FilterCriteria {
        search: args.search,
        region: args.region.map(Into::into),
        status: args.status.map(Into::into),
    });
    let view = controller.current_view();
    let report = StatusReport {
        counters: controller.counters(),
        servers: &view,
        total: controller.snapshot().len(),
        now: done,
    };
    print!("{}", formatter_for(&args.format).write(&report));
    Ok(())
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
    if args.refreshes == 0 {
        return Err(Error::Cli("refreshes must be greater than 0".to_string()));
    }
    let config = config::resolve(&args.config)?;
    let latency_ms = config.latency_ms;
    let generator = FleetGenerator::new(config)?;
    let mut controller = RefreshController::new(generator, ConsoleNotifier, latency_ms);

    let mut now = drive_load(&mut controller, Utc::now(), latency_ms, |c, at| {
        c.start(at);
    });
    for _ in 0..args.refreshes {
        now = drive_load(&mut controller, now, latency_ms, |c, at| {
            c.refresh(at);
        });
    }

    let report = StatusReport {
        counters: controller.counters(),
        servers: controller.snapshot(),
        total: controller.snapshot().len(),
        now,
    };
    print!("{}", SummaryFormatter.write(&report));
    Ok(())
}

fn run_show_config(args: ConfigArgs) -> Result<()> {
    let config = config::resolve(&args)?;
    let generator = FleetGenerator::new(config)?;
    let config = generator.config();

    println!("Latency: {}ms", config.latency_ms);
    println!("Online ratio: {}", config.status_mix.online_ratio);
    match config.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: none"),
    }
    println!("Countries:");
    for country in &config.countries {
        println!(
            "- {} ({}): {}",
            country.name,
            country.region,
            country.cities.join(", ")
        );
    }
    Ok(())
}

// Kicks off a load and advances the virtual clock past the simulated latency.
fn drive_load<S, N, F>(
    controller: &mut RefreshController<S, N>,
    now: DateTime<Utc>,
    latency_ms: u64,
    kick: F,
) -> DateTime<Utc>
where
    S: SnapshotSource,
    N: Notifier,
    F: FnOnce(&mut RefreshController<S, N>, DateTime<Utc>),
{
    kick(controller, now);
    let done = now + Duration::milliseconds(latency_ms as i64);
    controller.tick(done);
    done
}

fn formatter_for(format: &FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Summary => Box::new(SummaryFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}
