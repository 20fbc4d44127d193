use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use four_in_a_row::ai::{Agent, HumanAgent, MinimaxAgent, RandomAgent};
use four_in_a_row::config::{AgentKind, AppConfig};
use four_in_a_row::game::{GameOutcome, GameSession, Mark};

/// Play a game of adjacency four-in-a-row.
#[derive(Parser)]
#[command(name = "four-in-a-row", about = "Play adjacency four-in-a-row")]
struct Cli {
    /// Agent for X: minimax, random or human
    #[arg(long)]
    x: Option<String>,

    /// Agent for O: minimax, random or human
    #[arg(long)]
    o: Option<String>,

    /// Override X's search depth in plies
    #[arg(long)]
    x_depth: Option<usize>,

    /// Override O's search depth in plies
    #[arg(long)]
    o_depth: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_default_config: bool,

    /// Suppress per-turn board printing
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(kind) = &cli.x {
        config.players.x = kind.parse::<AgentKind>().map_err(anyhow::Error::msg)?;
    }
    if let Some(kind) = &cli.o {
        config.players.o = kind.parse::<AgentKind>().map_err(anyhow::Error::msg)?;
    }
    if let Some(depth) = cli.x_depth {
        config.players.x_depth = depth;
    }
    if let Some(depth) = cli.o_depth {
        config.players.o_depth = depth;
    }
    config.validate()?;

    let x = build_agent(config.players.x, Mark::X, config.players.x_depth);
    let o = build_agent(config.players.o, Mark::O, config.players.o_depth);
    let mut session = GameSession::new(config.starting_board(), x, o);

    if !cli.quiet {
        println!("{}", session.board());
    }

    loop {
        match session.outcome() {
            GameOutcome::InProgress => {
                session.step();
                if !cli.quiet {
                    println!("{}", session.board());
                }
            }
            GameOutcome::Win(mark) => {
                println!("Player {mark} wins!");
                break;
            }
            GameOutcome::Draw => {
                println!("It was a tie!");
                break;
            }
        }
    }
    Ok(())
}

fn build_agent(kind: AgentKind, mark: Mark, depth: usize) -> Box<dyn Agent> {
    match kind {
        AgentKind::Minimax => Box::new(MinimaxAgent::new(mark, depth)),
        AgentKind::Random => Box::new(RandomAgent::new(mark)),
        AgentKind::Human => Box::new(HumanAgent::new(mark)),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
