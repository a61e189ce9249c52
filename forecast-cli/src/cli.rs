use anyhow::{Context, bail};
use chrono::{Local, Timelike};
use clap::{Args, Parser, Subcommand, ValueEnum};
use forecast_core::{
    ClockSource, Config, DerivedView, ForecastPayload, ForecastSession, Outcome, WindowStrategy,
    derive::{
        location_hour,
        window::{DEFAULT_NEXT_DAY_HOURS, DEFAULT_ROLLING_HOURS},
    },
    provider_from_config,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use tracing::{debug, warn};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Three-day weather forecast in the terminal")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key and display preferences.
    Configure,

    /// Show the forecast for a location.
    Show {
        /// City name, postcode or "lat,lon".
        location: String,

        #[command(flatten)]
        display: DisplayArgs,

        /// Print the derived view as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for locations repeatedly; an empty entry or Esc quits.
    Search {
        #[command(flatten)]
        display: DisplayArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    /// Rest of today plus the first hours of tomorrow.
    TodayPlusNextDay,
    /// A fixed number of hours starting now.
    Rolling,
}

impl std::fmt::Display for WindowArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowArg::TodayPlusNextDay => f.write_str("rest of today + first 12 hours of tomorrow"),
            WindowArg::Rolling => f.write_str("next 24 hours"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClockArg {
    Device,
    Location,
}

impl std::fmt::Display for ClockArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockArg::Device => f.write_str("this machine's clock"),
            ClockArg::Location => f.write_str("local time at the forecast location"),
        }
    }
}

impl From<ClockSource> for ClockArg {
    fn from(value: ClockSource) -> Self {
        match value {
            ClockSource::Device => ClockArg::Device,
            ClockSource::Location => ClockArg::Location,
        }
    }
}

impl From<ClockArg> for ClockSource {
    fn from(value: ClockArg) -> Self {
        match value {
            ClockArg::Device => ClockSource::Device,
            ClockArg::Location => ClockSource::Location,
        }
    }
}

/// Per-invocation overrides of the configured display settings.
#[derive(Debug, Clone, Default, Args)]
pub struct DisplayArgs {
    /// How the hourly strip is selected.
    #[arg(long, value_enum)]
    pub window: Option<WindowArg>,

    /// Length of a rolling window; implies `--window rolling`.
    #[arg(long, conflicts_with = "next_day_hours")]
    pub hours: Option<usize>,

    /// Hours of tomorrow appended to the rest of today; implies `--window today-plus-next-day`.
    #[arg(long)]
    pub next_day_hours: Option<usize>,

    /// Which clock decides the current hour.
    #[arg(long, value_enum)]
    pub clock: Option<ClockArg>,
}

impl DisplayArgs {
    fn strategy(&self, configured: WindowStrategy) -> anyhow::Result<WindowStrategy> {
        let implied = match (self.hours, self.next_day_hours) {
            (Some(_), _) => Some(WindowArg::Rolling),
            (_, Some(_)) => Some(WindowArg::TodayPlusNextDay),
            _ => None,
        };

        let kind = match (self.window, implied) {
            (Some(window), Some(implied)) if window != implied => {
                let (flag, name) = match implied {
                    WindowArg::Rolling => ("--hours", "today-plus-next-day"),
                    WindowArg::TodayPlusNextDay => ("--next-day-hours", "rolling"),
                };
                bail!("{flag} cannot be combined with `--window {name}`");
            }
            (Some(window), _) => window,
            (None, Some(implied)) => implied,
            (None, None) => match configured {
                WindowStrategy::TodayPlusNextDay { .. } => WindowArg::TodayPlusNextDay,
                WindowStrategy::Rolling { .. } => WindowArg::Rolling,
            },
        };

        let strategy = match (kind, configured) {
            (WindowArg::TodayPlusNextDay, WindowStrategy::TodayPlusNextDay { next_day_hours }) => {
                WindowStrategy::TodayPlusNextDay {
                    next_day_hours: self.next_day_hours.unwrap_or(next_day_hours),
                }
            }
            (WindowArg::TodayPlusNextDay, _) => WindowStrategy::TodayPlusNextDay {
                next_day_hours: self.next_day_hours.unwrap_or(DEFAULT_NEXT_DAY_HOURS),
            },
            (WindowArg::Rolling, WindowStrategy::Rolling { hours }) => {
                WindowStrategy::Rolling { hours: self.hours.unwrap_or(hours) }
            }
            (WindowArg::Rolling, _) => {
                WindowStrategy::Rolling { hours: self.hours.unwrap_or(DEFAULT_ROLLING_HOURS) }
            }
        };

        Ok(strategy)
    }

    fn clock(&self, configured: ClockSource) -> ClockSource {
        self.clock.map(ClockSource::from).unwrap_or(configured)
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, display, json } => show(&location, &display, json).await,
            Command::Search { display } => search(&display).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);

    let window = Select::new(
        "Hourly strip:",
        vec![WindowArg::TodayPlusNextDay, WindowArg::Rolling],
    )
    .prompt()?;
    config.display.window = DisplayArgs { window: Some(window), ..Default::default() }
        .strategy(config.display.window)?;

    let clocks = vec![ClockArg::Device, ClockArg::Location];
    let current = clocks
        .iter()
        .position(|clock| *clock == ClockArg::from(config.display.clock))
        .unwrap_or_default();
    let clock = Select::new("Current hour from:", clocks).with_starting_cursor(current).prompt()?;
    config.display.clock = clock.into();

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(location: &str, display: &DisplayArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let strategy = display.strategy(config.display.window)?;
    let session = ForecastSession::new(provider_from_config(&config)?);

    if let Outcome::Failed(message) = session.query(location).await {
        bail!("Could not fetch the forecast for '{location}': {message}");
    }

    let payload = session.payload().await.context("No forecast data available")?;
    let view = derive_view(&payload, strategy, display.clock(config.display.clock));

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render(&payload, &view));
    }

    Ok(())
}

async fn search(display: &DisplayArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let strategy = display.strategy(config.display.window)?;
    let clock = display.clock(config.display.clock);
    let session = ForecastSession::new(provider_from_config(&config)?);

    loop {
        let location = match Text::new("Search city:").prompt_skippable() {
            Ok(Some(location)) if !location.trim().is_empty() => location,
            Ok(_) | Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match session.query(&location).await {
            Outcome::Updated => {
                if let Some(payload) = session.payload().await {
                    let view = derive_view(&payload, strategy, clock);
                    println!("\n{}", render(&payload, &view));
                }
            }
            Outcome::Failed(message) => {
                // Previous forecast stays on screen.
                warn!(%location, "no update: {message}");
                eprintln!("No update for '{}'.", location.trim());
            }
            Outcome::Stale => debug!(%location, "superseded query"),
        }
    }

    Ok(())
}

fn derive_view(
    payload: &ForecastPayload,
    strategy: WindowStrategy,
    clock: ClockSource,
) -> DerivedView {
    let hour = now_hour(clock, payload);
    debug!(hour, ?strategy, "deriving view");

    DerivedView::derive(payload, hour, strategy)
}

fn now_hour(clock: ClockSource, payload: &ForecastPayload) -> u32 {
    let device_hour = || Local::now().hour();

    match clock {
        ClockSource::Device => device_hour(),
        ClockSource::Location => location_hour(payload).unwrap_or_else(|| {
            warn!(
                local_time = %payload.location.local_time,
                "unreadable location time, using device clock"
            );
            device_hour()
        }),
    }
}
