//! Display functions for command results

use super::formatters::entropy_bar;
use crate::commands::{AnalysisResult, Recommendation};
use colored::Colorize;

const BAR_WIDTH: usize = 24;

/// Print the result of a recommend request
pub fn print_recommendation(result: &Recommendation) {
    match result {
        Recommendation::NoMatches => {
            println!(
                "\n{}",
                "No words match the given history — check the feedback patterns."
                    .red()
                    .bold()
            );
        }
        Recommendation::Ranked {
            remaining,
            table,
            total_ranked,
        } => {
            println!(
                "\n{} {} possible {} remaining.",
                "✔".green().bold(),
                remaining.len().to_string().bright_yellow().bold(),
                if remaining.len() == 1 { "word" } else { "words" }
            );

            if remaining.len() <= 10 {
                println!("\nRemaining candidates:");
                for candidate in remaining {
                    println!("  • {}", candidate.text().bright_white());
                }
            }

            println!("\n{}", "Top next guesses:".bright_cyan().bold());
            println!("{}", "─".repeat(50).cyan());

            let best = table.first().map_or(0.0, |row| row.entropy);
            for (i, row) in table.iter().enumerate() {
                let bar = entropy_bar(row.entropy, best, BAR_WIDTH);
                println!(
                    "{:>3}. {}  [{}] {}",
                    i + 1,
                    row.word.text().bright_white().bold(),
                    bar.green(),
                    format!("{:.3} bits", row.entropy).bright_yellow()
                );
            }

            if table.len() < *total_ranked {
                println!(
                    "{}",
                    format!("     … {} more guesses ranked", total_ranked - table.len())
                        .bright_black()
                );
            }
        }
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    println!("\nAgainst {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     {}",
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.max_partition
    );
}
