// scripts/bs_lab.rs
//! Terminal front end for the lessons: prints every value and series a page
//! would chart, and replays the animated simulations frame by frame.

use bs_lab::analytics::curves::{greek_curve, normal_density_curve, price_curve};
use bs_lab::analytics::payoff::{payoff_at_expiry, PayoffDiagram};
use bs_lab::assets::{load_asset, AssetKind, AssetStatus};
use bs_lab::output::{write_forced_path_csv, write_series_csv, write_summary_csv};
use bs_lab::paths::ensemble::force_drift_stats;
use bs_lab::paths::{BrownianPath, ForceDrivenPath};
use bs_lab::{Greek, GreekSet, LabConfig, LabResult, OptionKind, OptionParams};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "bs-lab", about = "Black-Scholes and Brownian motion lessons in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Clone, Copy)]
struct ContractArgs {
    /// Spot price S
    #[arg(long, default_value_t = 100.0)]
    spot: f64,
    /// Strike K
    #[arg(long, default_value_t = 100.0)]
    strike: f64,
    /// Time to maturity T in years
    #[arg(long, default_value_t = 1.0)]
    maturity: f64,
    /// Risk-free rate r
    #[arg(long, default_value_t = 0.05)]
    rate: f64,
    /// Volatility σ
    #[arg(long, default_value_t = 0.2)]
    sigma: f64,
    /// Call or Put
    #[arg(long, default_value = "call")]
    kind: OptionKind,
}

#[derive(Subcommand)]
enum Command {
    /// d1, d2 and the option price
    Price(ContractArgs),
    /// All five Greeks
    Greeks(ContractArgs),
    /// One Greek and the price against spot, as CSV
    GreekCurve {
        #[command(flatten)]
        contract: ContractArgs,
        #[arg(long, default_value = "delta")]
        greek: Greek,
    },
    /// Profit/loss at expiry, as CSV
    Payoff {
        #[arg(long, default_value = "call")]
        kind: OptionKind,
        #[arg(long, default_value_t = 100.0)]
        spot: f64,
        #[arg(long, default_value_t = 100.0)]
        strike: f64,
        #[arg(long, default_value_t = 10.0)]
        premium: f64,
    },
    /// Normal density, as CSV
    Normal {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mu: f64,
        #[arg(long, default_value_t = 1.0)]
        sigma: f64,
    },
    /// Animated Brownian price path
    Brownian {
        #[arg(long, default_value_t = 0.2)]
        sigma: f64,
        #[arg(long, default_value_t = 100.0)]
        initial_price: f64,
    },
    /// Animated buyer/seller force path
    Force {
        /// Force in [-1, 1]; repeat to change it during the run
        #[arg(long = "force", default_value = "0.0", allow_negative_numbers = true, num_args = 1..)]
        schedule: Vec<f64>,
        /// Also report the average net move over this many runs
        #[arg(long)]
        ensemble: Option<usize>,
        /// Write the finished path (price and force) to this CSV file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Static media used by the introduction pages
    About,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = match LabConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &cfg) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn contract(args: ContractArgs, cfg: &LabConfig) -> LabResult<OptionParams> {
    let ranges = &cfg.pricing;
    OptionParams::new(
        ranges.spot.clamp(args.spot),
        ranges.strike.clamp(args.strike),
        ranges.maturity.clamp(args.maturity),
        ranges.rate.clamp(args.rate),
        ranges.sigma.clamp(args.sigma),
        args.kind,
    )
}

fn run(command: Command, cfg: &LabConfig) -> LabResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Price(args) => {
            let params = contract(args, cfg)?;
            let b = params.breakdown();
            write_summary_csv(
                &mut out,
                &[
                    ("kind", params.kind.to_string()),
                    ("d1", format!("{:.4}", b.d1)),
                    ("d2", format!("{:.4}", b.d2)),
                    ("price", format!("{:.4}", b.price)),
                ],
            )?;
        }
        Command::Greeks(args) => {
            let params = contract(args, cfg)?;
            let rows: Vec<(Greek, String)> = params
                .greeks_table(GreekSet::all())
                .into_iter()
                .map(|(g, v)| (g, format!("{:.6}", v)))
                .collect();
            write_summary_csv(&mut out, &rows)?;
        }
        Command::GreekCurve { contract: args, greek } => {
            let params = contract(args, cfg)?;
            let values = greek_curve(&params, greek, cfg.greek_curve_points)?;
            let prices = price_curve(&params, cfg.greek_curve_points)?;
            writeln!(out, "spot,price,{}", greek.to_string().to_lowercase())?;
            for ((s, v), (_, p)) in values.points().into_iter().zip(prices.points()) {
                writeln!(out, "{},{},{}", s, p, v)?;
            }
        }
        Command::Payoff {
            kind,
            spot,
            strike,
            premium,
        } => {
            let ranges = &cfg.payoff;
            let strike = ranges.strike.clamp(strike);
            let premium = ranges.premium.clamp(premium);
            let spot = ranges.spot.clamp(spot);
            let diagram = PayoffDiagram::new(kind, strike, premium, cfg.payoff_points)?;
            let (lo, hi) = diagram.payoff_range();
            tracing::info!(
                breakeven = diagram.breakeven(),
                at_spot = payoff_at_expiry(kind, spot, strike, premium),
                lo,
                hi,
                "payoff diagram"
            );
            write_series_csv(&mut out, "terminal_price", "payoff", &diagram.points())?;
        }
        Command::Normal { mu, sigma } => {
            let ranges = &cfg.simulation;
            let curve = normal_density_curve(
                ranges.normal_mu.clamp(mu),
                ranges.normal_sigma.clamp(sigma),
                cfg.normal_points,
            )?;
            write_series_csv(&mut out, "x", "density", &curve.points())?;
        }
        Command::Brownian { sigma, initial_price } => {
            let ranges = &cfg.simulation;
            let path = BrownianPath::new(
                ranges.initial_price.clamp(initial_price),
                ranges.brownian_sigma.clamp(sigma),
                cfg.steps,
                cfg.seed,
            )?;
            writeln!(out, "step,price")?;
            for point in path {
                writeln!(out, "{},{}", point.step, point.price)?;
                out.flush()?;
                pause(cfg);
            }
            tracing::info!("simulation finished");
        }
        Command::Force {
            schedule,
            ensemble,
            save,
        } => {
            let force = cfg.simulation.force;
            let schedule: Vec<f64> = schedule.into_iter().map(|f| force.clamp(f)).collect();
            let steps = cfg.steps;
            // each scheduled value holds for an equal share of the run
            let slot = steps.div_ceil(schedule.len().max(1)).max(1);
            let source = |step: usize| {
                schedule
                    .get(step / slot)
                    .or(schedule.last())
                    .copied()
                    .unwrap_or(force.default)
            };

            let mut points = Vec::with_capacity(steps);
            for point in ForceDrivenPath::new(100.0, steps, cfg.seed)?.with_force_source(source) {
                let point = point?;
                writeln!(out, "{},{},{}", point.step, point.price, point.force)?;
                out.flush()?;
                points.push(point);
                pause(cfg);
            }
            tracing::info!("simulation finished");

            if let Some(runs) = ensemble {
                let first = schedule.first().copied().unwrap_or(force.default);
                let stats = force_drift_stats(first, runs, steps, cfg.seed.unwrap_or(0))?;
                tracing::info!(
                    force = first,
                    runs = stats.runs,
                    mean = stats.mean,
                    std_error = stats.std_error(),
                    "average net move"
                );
            }

            if let Some(path) = save {
                let mut file = BufWriter::new(File::create(&path)?);
                write_forced_path_csv(&mut file, &points)?;
                file.flush()?;
                tracing::info!(path = %path.display(), "path saved");
            }
        }
        Command::About => {
            for (path, kind) in [(&cfg.image_path, AssetKind::Image), (&cfg.video_path, AssetKind::Video)] {
                match load_asset(path, kind) {
                    AssetStatus::Loaded { bytes, .. } => {
                        writeln!(out, "{:?}: {} bytes from {}", kind, bytes.len(), path.display())?
                    }
                    AssetStatus::Missing { notice, .. } => writeln!(out, "{}", notice)?,
                }
            }
        }
    }
    Ok(())
}

fn pause(cfg: &LabConfig) {
    if cfg.frame_delay_ms > 0 {
        thread::sleep(Duration::from_millis(cfg.frame_delay_ms));
    }
}
