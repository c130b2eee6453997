use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::input::parse_tokens;
use zcalc::{Calculator, Config, Render};

#[derive(Parser)]
#[command(name = "zcalc")]
#[command(version)]
#[command(about = "A keyboard-driven arithmetic calculator")]
#[command(long_about = None)]
struct Cli {
    /// Keys to press, e.g. `12 + 3 Enter`. Reads lines from stdin if omitted.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    keys: Vec<String>,

    /// Config file (default: $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print each render as JSON
    #[arg(long)]
    json: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::info!(?config, "Starting calculator");

    let mut calculator = Calculator::new(config);
    let mut stdout = io::stdout().lock();

    if !cli.keys.is_empty() {
        let render = feed(&mut calculator, &cli.keys.join(" "));
        return print_render(&mut stdout, &render, cli.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let render = feed(&mut calculator, &line);
        print_render(&mut stdout, &render, cli.json)?;
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("zcalc={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Press every key on a line and return the final render.
fn feed(calculator: &mut Calculator, line: &str) -> Render {
    for input in parse_tokens(line) {
        if calculator.handle_input(&input).is_none() {
            tracing::debug!(?input, "Ignored input");
        }
    }
    calculator.render()
}

fn print_render(out: &mut impl Write, render: &Render, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(render).context("Failed to serialize render")?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", render)?;
    }
    out.flush()?;
    Ok(())
}
