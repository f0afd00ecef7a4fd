use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use polywalk::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;

use output::{write_artifact, PolygonDoc};

#[derive(Parser)]
#[command(name = "polywalk")]
#[command(about = "Polygons from angle sequences via side-length gradient descent")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate angles, solve side lengths, center, and emit the polygon
    Draw {
        #[command(flatten)]
        params: ParamArgs,
        #[command(flatten)]
        solve: SolveArgs,
        #[arg(long, default_value_t = 500.0)]
        width: f64,
        #[arg(long, default_value_t = 500.0)]
        height: f64,
        /// `.svg` writes a stroked path, anything else JSON. Stdout JSON if omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Only generate and print the interior angles
    Angles {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Print the provenance header
    Report,
}

/// Raw polygon inputs. Absent, non-numeric, or zero values use the defaults
/// (3 sides, 30°, 150°, no progression).
#[derive(Args)]
struct ParamArgs {
    #[arg(long, allow_hyphen_values = true)]
    sides: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    min_angle: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    max_angle: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    common_diff: Option<String>,
    /// Seed for random-constrained angles; entropy if omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl ParamArgs {
    fn params(&self) -> PolygonParams {
        PolygonParams::from_raw(
            self.sides.as_deref(),
            self.min_angle.as_deref(),
            self.max_angle.as_deref(),
            self.common_diff.as_deref(),
        )
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Args)]
struct SolveArgs {
    #[arg(long, default_value_t = SolveCfg::default().iterations)]
    iterations: usize,
    #[arg(long, default_value_t = SolveCfg::default().learning_rate)]
    learning_rate: f64,
    #[arg(long, default_value_t = SolveCfg::default().epsilon)]
    epsilon: f64,
    /// Clamp side lengths to at least this value after each step
    #[arg(long)]
    min_length: Option<f64>,
}

impl SolveArgs {
    fn cfg(&self) -> SolveCfg {
        SolveCfg {
            iterations: self.iterations,
            learning_rate: self.learning_rate,
            epsilon: self.epsilon,
            min_length: self.min_length,
            ..SolveCfg::default()
        }
    }
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries the JSON/message payload.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Draw {
            params,
            solve,
            width,
            height,
            out,
        } => draw(&params, &solve, Canvas { width, height }, out),
        Action::Angles { params } => angles(&params),
        Action::Report => report(),
    }
}

fn draw(args: &ParamArgs, solve: &SolveArgs, canvas: Canvas, out: Option<PathBuf>) -> Result<ExitCode> {
    let params = args.params();
    let cfg = solve.cfg();
    tracing::info!(
        sides = params.sides,
        min_angle = params.min_angle,
        max_angle = params.max_angle,
        common_diff = params.common_diff,
        seed = ?args.seed,
        iterations = cfg.iterations,
        learning_rate = cfg.learning_rate,
        "draw"
    );
    let poly = match render_polygon(&params, canvas, cfg, &mut args.rng()) {
        Ok(p) => p,
        Err(err) => {
            tracing::warn!(%err, "render_failed");
            println!("{err}");
            return Ok(ExitCode::from(2));
        }
    };
    tracing::info!(loss = poly.loss, iterations = poly.iterations, "solved");

    let doc = PolygonDoc::new(&params, canvas, &poly);
    match out {
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
        Some(path) => {
            write_artifact(&path, &doc)?;
            let payload = provenance::Payload::new(
                json!({
                    "params": &doc.params,
                    "canvas": doc.canvas,
                    "iterations": cfg.iterations,
                    "learning_rate": cfg.learning_rate,
                    "epsilon": cfg.epsilon,
                    "min_length": cfg.min_length,
                }),
                args.seed,
            );
            let prov = provenance::write_sidecar(&path, payload)?;
            tracing::info!(out = %path.display(), provenance = %prov.display(), "written");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn angles(args: &ParamArgs) -> Result<ExitCode> {
    let params = args.params();
    tracing::info!(sides = params.sides, seed = ?args.seed, "angles");
    match polygon_angles(&params, &mut args.rng()) {
        Ok(a) => {
            println!("{}", serde_json::to_string(&a)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(%err, "angles_failed");
            println!("{err}");
            Ok(ExitCode::from(2))
        }
    }
}

fn report() -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(&provenance::header())?);
    Ok(ExitCode::SUCCESS)
}
