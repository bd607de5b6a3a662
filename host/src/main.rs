use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use snake_host::{glyph_report, load_config, run_script, DEFAULT_FRAME_DT};

#[derive(Parser, Debug)]
#[command(name = "snake-host")]
#[command(about = "Deterministic Snake session runner and display debugger")]
struct Cli {
    /// JSON game config; missing fields fall back to defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a move script (e.g. "R.30U.15") and print the final state
    Run {
        #[arg(long)]
        script: Option<String>,
        #[arg(long)]
        script_file: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_FRAME_DT)]
        frame_dt: f64,
        /// Check every invariant after each frame
        #[arg(long, default_value_t = false)]
        strict: bool,
        /// Print the full world snapshot as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Decode text into sixteen-segment glyphs
    Glyphs {
        text: String,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        x: f32,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        y: f32,
    },
    /// Play a move script and dump the draw calls of its last frame
    Render {
        #[arg(long)]
        script: Option<String>,
        #[arg(long)]
        script_file: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_FRAME_DT)]
        frame_dt: f64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            script,
            script_file,
            frame_dt,
            strict,
            json,
            output,
        } => {
            let script = read_script(script, script_file.as_deref())?;
            let artifact = run_script(config, &script, frame_dt, strict)?;
            let snapshot = &artifact.snapshot;

            if json {
                emit_json(snapshot, output.as_deref())?;
            } else {
                println!("frames={}", snapshot.frame_count);
                println!("steps={}", snapshot.steps);
                println!("pickups={}", snapshot.pickups);
                println!("deaths={}", snapshot.deaths);
                println!("alive={}", snapshot.alive);
                println!("head={},{}", snapshot.head.x, snapshot.head.y);
                println!("direction={}", snapshot.direction.as_str());
                println!("tail={}", snapshot.tail.len());
                println!("game_speed={:.3}", snapshot.game_speed);
            }
        }
        Commands::Glyphs { text, x, y } => {
            emit_json(&glyph_report(&text, x, y), None)?;
        }
        Commands::Render {
            script,
            script_file,
            frame_dt,
            output,
        } => {
            let script = read_script(script, script_file.as_deref())?;
            let artifact = run_script(config, &script, frame_dt, false)?;
            emit_json(&artifact.last_frame, output.as_deref())?;
        }
    }

    Ok(())
}

fn read_script(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(script), None) => Ok(script),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script: {}", path.display())),
        (None, None) => Ok(String::new()),
        (Some(_), Some(_)) => Err(anyhow::anyhow!(
            "use either --script or --script-file, not both"
        )),
    }
}

fn emit_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>) -> Result<()> {
    let encoded = serde_json::to_vec_pretty(value)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &encoded)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote={}", path.display());
        }
        None => println!("{}", String::from_utf8_lossy(&encoded)),
    }
    Ok(())
}
