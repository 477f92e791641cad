use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use checkers_move::game::capture_path;
use checkers_move::{Board, Coord, MoveRequest, Player, Rules, RulesConfig, StepRule};

/// Check whether a checkers piece can move from one square to another.
#[derive(Parser)]
#[command(name = "checkers-move", about = "Check checkers move legality")]
struct Cli {
    /// Flat row-major list of cell tags, separated by commas or spaces
    #[arg(long)]
    board: String,

    /// Start square as "row,col"
    #[arg(long, allow_hyphen_values = true)]
    start: Coord,

    /// Target square as "row,col"
    #[arg(long, allow_hyphen_values = true)]
    end: Coord,

    /// Tag of the moving player (defaults to the configured player)
    #[arg(long)]
    player: Option<u8>,

    /// Board side length (defaults to the square root of the cell count)
    #[arg(long)]
    size: Option<usize>,

    /// Path to TOML rules file
    #[arg(long, default_value = "rules.toml")]
    config: PathBuf,

    /// Override how single diagonal steps are treated
    #[arg(long, value_enum)]
    step_rule: Option<StepRule>,

    /// Also print the capture chain that reaches the target
    #[arg(long)]
    path: bool,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Verdict {
    start: Coord,
    end: Coord,
    player: Player,
    #[serde(skip_serializing_if = "Option::is_none")]
    legal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<Coord>>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(3)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_from_file = cli.config.exists();
    let mut config = RulesConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let board: Board = cli.board.parse().context("parsing --board")?;
    if let Some(size) = cli.size {
        if size != board.size() {
            bail!("--size {} does not match a board of {} cells", size, board.size().pow(2));
        }
    }
    if config_from_file {
        config
            .check_board_size(board.size())
            .with_context(|| format!("checking --board against {}", cli.config.display()))?;
    } else {
        config.board_size = board.size();
    }
    if let Some(tag) = cli.player {
        config.player = Player::new(tag);
    }
    if let Some(rule) = cli.step_rule {
        config.step_rule = rule;
    }
    config.validate()?;

    let player = config.player;
    let rules = Rules::new(config);
    let request = MoveRequest::new(cli.start, cli.end, player);
    let outcome = rules.check(&board, &request);

    let path = match (&outcome, cli.path) {
        (Ok(true), true) => capture_path(&board, cli.start, cli.end, player),
        _ => None,
    };

    let mut verdict = Verdict {
        start: cli.start,
        end: cli.end,
        player,
        legal: None,
        reason: None,
        message: None,
        path,
    };
    let code = match &outcome {
        Ok(legal) => {
            verdict.legal = Some(*legal);
            if *legal {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            verdict.reason = Some(err.reason());
            verdict.message = Some(err.to_string());
            ExitCode::from(2)
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        match &outcome {
            Ok(true) => println!("legal: {} -> {}", cli.start, cli.end),
            Ok(false) => println!("illegal: {} -> {}", cli.start, cli.end),
            Err(err) => println!("rejected: {err}"),
        }
        if let Some(path) = &verdict.path {
            let hops: Vec<String> = path.iter().map(Coord::to_string).collect();
            println!("chain: {} -> {}", cli.start, hops.join(" -> "));
        }
    }

    Ok(code)
}
