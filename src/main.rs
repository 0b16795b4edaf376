//! Mastermind - CLI
//!
//! Networked judge and solver for 5-slot, 8-color Mastermind, plus offline
//! solving and benchmarking.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mastermind::{
    commands::{
        BenchmarkConfig, ClientConfig, ServerConfig, SolveConfig, bind, cancel_on_interrupt,
        connect_and_play, run_benchmark, serve, solve_secret,
    },
    core::Code,
    output::{Side, print_benchmark_result, print_round, print_session_report, print_solve_result},
    protocol::CancelToken,
    session::{MAX_ROUNDS, SessionError, SessionReport},
    solver::StrategyType,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind judge and solver speaking a parity-checked binary protocol",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: highest (default), minimax, random
    #[arg(short, long, global = true, default_value = "highest")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Hold a secret and judge one client
    Server {
        /// TCP port to listen on
        #[arg(value_parser = clap::value_parser!(u16).range(1..))]
        port: u16,

        /// Secret as five color letters, e.g. bdgrw
        secret: String,

        /// Rounds before the game is lost
        #[arg(short, long, default_value_t = MAX_ROUNDS)]
        max_rounds: u32,

        /// Print every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Connect to a judge and solve its secret
    Client {
        /// Judge host name or address
        host: String,

        /// Judge TCP port
        #[arg(value_parser = clap::value_parser!(u16).range(1..))]
        port: u16,

        /// Print every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve a secret in-process and show every round
    Solve {
        /// Secret as five color letters
        secret: String,

        /// Show wire bytes and candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for sampling secrets
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Test every one of the 32768 secrets
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            let code = err
                .downcast_ref::<SessionError>()
                .map_or(1, SessionError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Run the selected command and return the process exit status
fn run(cli: Cli) -> Result<u8> {
    let strategy = parse_strategy(&cli.strategy)?;
    let cancel = CancelToken::new();

    match cli.command {
        Commands::Server {
            port,
            secret,
            max_rounds,
            verbose,
        } => {
            let mut config = ServerConfig::new(port, parse_secret(&secret)?);
            config.max_rounds = max_rounds;
            cancel_on_interrupt(&cancel)?;
            run_server_command(&config, &cancel, verbose)
        }
        Commands::Client {
            host,
            port,
            verbose,
        } => {
            let config = ClientConfig::new(host, port);
            cancel_on_interrupt(&cancel)?;
            let report = connect_and_play(&config, strategy, &cancel, |record| {
                if verbose {
                    print_round(record, Side::Client);
                }
            })?;
            Ok(finish(&report))
        }
        Commands::Solve { secret, verbose } => {
            let config = SolveConfig::new(parse_secret(&secret)?);
            let result = solve_secret(&config, strategy)?;
            print_solve_result(&result, verbose);
            Ok(result.report.outcome.exit_code())
        }
        Commands::Benchmark { count, seed, all } => {
            let config = if all {
                BenchmarkConfig::exhaustive()
            } else {
                BenchmarkConfig::new(count, seed)
            };
            run_benchmark_command(&config, &strategy);
            Ok(0)
        }
    }
}

fn run_server_command(config: &ServerConfig, cancel: &CancelToken, verbose: bool) -> Result<u8> {
    let listener = bind(config)?;
    eprintln!(
        "{} port {} (max {} rounds)",
        "listening on".bright_black(),
        config.port,
        config.max_rounds
    );

    let report = serve(
        &listener,
        config,
        cancel,
        |peer| eprintln!("{} {peer}", "client connected from".bright_black()),
        |record| {
            if verbose {
                print_round(record, Side::Server);
            }
        },
    )?;
    Ok(finish(&report))
}

fn run_benchmark_command(config: &BenchmarkConfig, strategy: &StrategyType) {
    let secrets = config.secrets();
    println!(
        "Running benchmark on {} secrets with the {} strategy...",
        secrets.len(),
        strategy.name()
    );

    let result = run_benchmark(strategy, &secrets, config.max_rounds, true);
    print_benchmark_result(&result);
}

fn finish(report: &SessionReport) -> u8 {
    print_session_report(report);
    report.outcome.exit_code()
}

fn parse_secret(text: &str) -> Result<Code> {
    text.parse()
        .with_context(|| format!("invalid secret {text:?}"))
}

fn parse_strategy(name: &str) -> Result<StrategyType> {
    StrategyType::from_name(name).ok_or_else(|| {
        anyhow!(
            "unknown strategy {name:?}, expected one of: {}",
            StrategyType::NAMES.join(", ")
        )
    })
}
