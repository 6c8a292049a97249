use anyhow::{bail, Context};
use chrono::{Datelike, Days, NaiveDate};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use wildfire_risk_core::{
    assess, forecast_naive_with, ForecastConfig, ForecastDay, ForecastMethod, LocationContext,
    NoiseBounds, Observation, RiskAssessment, TrainerConfig,
};

/// Wildfire risk forecast demo over a synthetic daily history
#[derive(Parser, Debug)]
#[command(name = "wildfire-risk-demo")]
#[command(about = "Seven-day wildfire risk forecast for a location", long_about = None)]
struct Args {
    /// Location name shown in the report
    #[arg(short, long, default_value = "Perth")]
    location: String,

    /// Latitude in decimal degrees (negative = southern hemisphere)
    #[arg(long, default_value_t = -31.95, allow_hyphen_values = true)]
    latitude: f64,

    /// Longitude in decimal degrees
    #[arg(long, default_value_t = 115.86, allow_hyphen_values = true)]
    longitude: f64,

    /// Number of days of history to synthesise
    #[arg(short, long, default_value_t = 90)]
    days: u64,

    /// Date of the most recent observation (YYYY-MM-DD)
    #[arg(long, default_value = "2024-01-31")]
    end_date: NaiveDate,

    /// Annual mean temperature in °C
    #[arg(short, long, default_value_t = 24.0, allow_hyphen_values = true)]
    temperature: f64,

    /// Seasonal swing either side of the mean in °C
    #[arg(long, default_value_t = 8.0)]
    amplitude: f64,

    /// Mean wind speed in km/h
    #[arg(short, long, default_value_t = 16.0)]
    wind_speed: f64,

    /// Seed for the synthetic history and the naive forecaster
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Skip the regression models and use the naive forecaster
    #[arg(long)]
    naive: bool,

    /// Share of feature rows held out from training
    #[arg(long, default_value_t = 0.2)]
    holdout_fraction: f64,

    /// Seed for the train/held-out split
    #[arg(long, default_value_t = 42)]
    split_seed: u64,

    /// Ridge penalty on the standardised coefficients
    #[arg(long, default_value_t = 1e-3)]
    ridge_penalty: f64,

    /// Number of recent days to list
    #[arg(long, default_value_t = 7)]
    history_days: usize,
}

impl Args {
    fn config(&self) -> ForecastConfig {
        ForecastConfig {
            trainer: TrainerConfig {
                holdout_fraction: self.holdout_fraction,
                split_seed: self.split_seed,
                ridge_penalty: self.ridge_penalty,
            },
            noise: NoiseBounds::default(),
            history_days: self.history_days,
        }
    }
}

/// Seasonal temperature cycle with daily noise and gusty wind
///
/// Stands in for a dataset lookup: the warmest day falls mid-January in the
/// southern hemisphere and mid-July in the northern.
fn synthesise_history(args: &Args, rng: &mut StdRng) -> anyhow::Result<Vec<Observation>> {
    let span = args.days.saturating_sub(1);
    let start = args
        .end_date
        .checked_sub_days(Days::new(span))
        .context("history start date is out of range")?;
    let warmest_day = if args.latitude < 0.0 { 15.0 } else { 196.0 };

    let mut history = Vec::with_capacity(args.days as usize);
    for offset in 0..args.days {
        let date = start + Days::new(offset);
        let phase = (f64::from(date.ordinal()) - warmest_day) / 365.0 * std::f64::consts::TAU;
        let temperature =
            args.temperature + args.amplitude * phase.cos() + rng.random_range(-1.5..=1.5);

        let gust = if rng.random_bool(0.15) {
            rng.random_range(5.0..=15.0)
        } else {
            0.0
        };
        let wind = (args.wind_speed + rng.random_range(-4.0..=4.0) + gust).max(0.0);

        history.push(Observation::new(date, temperature, wind));
    }
    Ok(history)
}

fn print_forecast(days: &[ForecastDay]) {
    println!("\n7-Day Wildfire Risk Forecast");
    for day in days {
        println!("  {day}");
    }
}

fn print_assessment(assessment: &RiskAssessment) {
    let location = &assessment.location;
    println!(
        "Location: {} ({:.2}, {:.2})",
        location.name, location.latitude, location.longitude
    );

    println!("\nCurrent Weather Data ({})", assessment.current.date);
    println!("  {}", assessment.current);
    println!(
        "\nThe wildfire risk level for {} is: {}",
        location.name, assessment.current.risk
    );

    println!("\nHistorical Trends (last {} days)", assessment.recent.len());
    for entry in &assessment.recent {
        let obs = &entry.observation;
        println!(
            "  {}  {}  {}  {}",
            obs.date, obs.temperature, obs.wind_speed, entry.risk
        );
    }

    let method = match assessment.method {
        ForecastMethod::Regression => "lagged regression",
        ForecastMethod::Naive => "naive (insufficient history)",
    };
    println!("\nForecast method: {method}");
    print_forecast(&assessment.forecast);
    println!("\nPeak forecast risk: {}", assessment.peak_risk());
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.days == 0 {
        bail!("--days must be at least 1");
    }

    println!("=== Wildfire Risk Dashboard ===\n");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let history = synthesise_history(&args, &mut rng)?;
    let location = LocationContext::new(args.location.trim(), args.latitude, args.longitude);
    let config = args.config();

    if args.naive {
        config.validate().context("invalid forecast configuration")?;
        let latest = history.last().context("synthetic history is empty")?;
        println!("Location: {}", location.name);
        println!(
            "Latest: {} at {}, {}",
            latest.date, latest.temperature, latest.wind_speed
        );
        let days = forecast_naive_with(
            latest.temperature,
            latest.wind_speed,
            &config.noise,
            &mut rng,
        );
        print_forecast(&days);
        return Ok(());
    }

    let assessment = assess(location, &history, &config, &mut rng)
        .with_context(|| format!("failed to assess {} days of history", history.len()))?;
    print_assessment(&assessment);

    Ok(())
}
