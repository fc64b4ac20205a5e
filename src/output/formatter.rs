//! Console presentation of the readiness score

use crate::scoring::ats::AtsResult;
use colored::{ColoredString, Colorize};

const BAR_WIDTH: usize = 40;

fn score_label(score: u8) -> ColoredString {
    let text = format!("{}", score);
    if score >= 70 {
        text.green().bold()
    } else if score >= 40 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

fn score_bar(score: u8) -> String {
    let filled = (score as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Print the score panel: score, bar, suggestions, and advisor tips.
pub fn print_score_panel(result: &AtsResult, tips: &[String]) {
    println!();
    println!("{}", "ATS READINESS SCORE".bold());
    println!("{} / 100", score_label(result.score));
    println!("{}", score_bar(result.score));

    if !result.suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions".bold());
        for suggestion in &result.suggestions {
            println!("  • {}", suggestion);
        }
    }

    if !tips.is_empty() {
        println!();
        print_tips(tips);
    }
}

/// Print the advisor's top improvements on their own.
pub fn print_tips(tips: &[String]) {
    if tips.is_empty() {
        println!("{}", "No improvements to suggest.".green());
        return;
    }
    println!("{}", "Top improvements".bold());
    for tip in tips {
        println!("  • {}", tip);
    }
}

/// Print bullet guidance hints, or an all-clear line when there are none.
pub fn print_guidance(hints: &[String]) {
    if hints.is_empty() {
        println!("{}", "Looks strong.".green());
        return;
    }
    for hint in hints {
        println!("  • {}", hint.yellow());
    }
}
