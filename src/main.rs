use std::process::ExitCode;
use std::sync::Arc;

use a365::config::{self, CURRENT_VERSION, Config};
use a365::environment::{AutomationProbe, CiDetector, StaticProbe};
use a365::output::{render_human, render_json};
use a365::version::checker::UpdateChecker;
use a365::version::error::CheckError;
use a365::version::feeds::NuGetFeed;
use a365::version::semver::parse_version;
use a365::version::types::VersionCheckResult;
use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Exit code reported when the user interrupts a check
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser)]
#[command(name = "a365")]
#[command(version, about = "Agent 365 command-line tool")]
struct Cli {
    /// Write debug-level diagnostics to the log file
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the package feed for a newer a365 release
    CheckUpdate(CheckUpdateArgs),
    /// Compare two version strings using update-check ordering
    Compare { left: String, right: String },
}

#[derive(Args)]
struct CheckUpdateArgs {
    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Version to compare against instead of the running binary's
    #[arg(long, value_name = "VERSION")]
    current: Option<String>,

    /// Override the NuGet flat-container base URL
    #[arg(long, value_name = "URL")]
    feed_url: Option<String>,

    /// Override the package identifier
    #[arg(long, value_name = "ID")]
    package_id: Option<String>,

    /// Run the check even when a CI environment is detected
    #[arg(long)]
    include_ci: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = a365::logging::init(&config::log_path(), cli.verbose);

    match cli.command {
        Command::CheckUpdate(args) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(check_update(args)),
        Command::Compare { left, right } => Ok(compare(&left, &right)),
    }
}

fn load_config() -> Config {
    let path = config::config_path();
    config::load_config(&path).unwrap_or_else(|e| {
        warn!("Ignoring config: {}", e);
        Config::default()
    })
}

async fn check_update(args: CheckUpdateArgs) -> anyhow::Result<ExitCode> {
    let mut settings = load_config().update_check;
    if let Some(feed_url) = args.feed_url {
        settings.feed_url = feed_url;
    }
    if let Some(package_id) = args.package_id {
        settings.package_id = package_id;
    }
    let current = args.current.unwrap_or_else(|| CURRENT_VERSION.to_string());

    let result = if settings.enabled {
        run_check(&settings, &current, args.include_ci).await
    } else {
        debug!("Update check disabled by config");
        Ok(VersionCheckResult::no_update(&current))
    };

    let result = match result {
        Ok(result) => result,
        Err(CheckError::Cancelled) => {
            eprintln!("Update check cancelled");
            return Ok(ExitCode::from(EXIT_CANCELLED));
        }
    };

    if args.json {
        println!("{}", render_json(&result)?);
    } else {
        println!("{}", render_human(&result));
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_check(
    settings: &config::UpdateCheckConfig,
    current: &str,
    include_ci: bool,
) -> Result<VersionCheckResult, CheckError> {
    let feed = match NuGetFeed::new(&settings.feed_url, settings.timeout()) {
        Ok(feed) => feed,
        Err(e) => {
            debug!("Cannot build feed client: {}", e);
            return Ok(VersionCheckResult::no_update(current));
        }
    };
    let probe: Arc<dyn AutomationProbe> = if include_ci {
        Arc::new(StaticProbe(false))
    } else {
        Arc::new(CiDetector::new())
    };
    let checker = UpdateChecker::new(current, Arc::new(feed), probe)
        .with_package_id(settings.package_id.clone());

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    checker.check_for_updates(&cancel).await
}

fn compare(left: &str, right: &str) -> ExitCode {
    let (Some(l), Some(r)) = (parse_version(left), parse_version(right)) else {
        for (raw, parsed) in [(left, parse_version(left)), (right, parse_version(right))] {
            if parsed.is_none() {
                eprintln!("Not a valid version: {:?}", raw);
            }
        }
        return ExitCode::from(2);
    };

    let symbol = match l.cmp(&r) {
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "=",
        std::cmp::Ordering::Greater => ">",
    };
    println!("{} {} {}", left, symbol, right);
    ExitCode::SUCCESS
}
