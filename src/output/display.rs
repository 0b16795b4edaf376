//! Display functions for command results

use super::formatters::{colored_code, pegs, wire_bits};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::session::{Outcome, RoundRecord, SessionReport};
use colored::Colorize;

/// Which end of the connection is printing a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Client,
    Server,
}

/// One-line trace of a round, written to stderr
pub fn print_round(record: &RoundRecord, side: Side) {
    eprintln!("{}", round_line(record, side));
}

fn round_line(record: &RoundRecord, side: Side) -> String {
    let arrow = match side {
        Side::Client => "→",
        Side::Server => "←",
    };
    let judgment = record.judgment;
    let mut line = format!(
        "{} {:>2}  {} {}  [{}]  {} {}",
        "round".bright_black(),
        record.round,
        arrow,
        colored_code(record.guess),
        wire_bits(&record.wire),
        pegs(judgment.score()),
        judgment.score(),
    );

    if let Some(remaining) = record.remaining {
        line.push_str(&format!("  {remaining} left").bright_black().to_string());
    }
    if judgment.parity_error {
        line.push_str(&format!("  {}", "parity error".red().bold()));
    }
    if judgment.game_lost {
        line.push_str(&format!("  {}", "game lost".red().bold()));
    }
    line
}

/// Print how a networked session ended
pub fn print_session_report(report: &SessionReport) {
    let message = match report.outcome {
        Outcome::Won => format!("✅ Solved in {}", rounds(report.rounds))
            .green()
            .bold(),
        other => format!("❌ {} in round {}", capitalize(&other.to_string()), report.rounds)
            .red()
            .bold(),
    };
    println!("{message}");
}

fn rounds(count: u32) -> String {
    if count == 1 {
        "1 round".to_string()
    } else {
        format!("{count} rounds")
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", colored_code(result.secret));
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        let record = &step.record;
        println!(
            "\nRound {}: {} {} {}",
            record.round,
            colored_code(record.guess),
            pegs(record.judgment.score()),
            record.judgment.score()
        );

        if verbose {
            println!("  Wire:       {}", wire_bits(&record.wire));
            if let Some(after) = record.remaining {
                println!("  Candidates: {} → {}", step.candidates_before, after);
            }
        }
    }

    println!();
    print_session_report(&result.report);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.wins, result.total_games).green()
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if !result.distribution.is_empty() {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&rounds, &count) in &result.distribution {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {rounds:2}: {bar} {count:5} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Failures:".red().bold());
        for (secret, reason) in result.failures.iter().take(10) {
            println!("   {}: {reason}", colored_code(*secret));
        }
        if result.failures.len() > 10 {
            println!("   ... and {} more", result.failures.len() - 10);
        }
    }
}
