//! Display functions for command results

use crate::commands::SimulationResult;
use crate::core::MAX_WRONG_GUESSES;
use crate::store::WordStore;
use colored::Colorize;
use std::io::{self, Write};

const HEADERS: [&str; 4] = ["Artikel", "Wort", "Übersetzung", "Plural Form"];

/// Write the word store as a table
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn write_word_list<W: Write>(store: &WordStore, output: &mut W) -> io::Result<()> {
    let rows: Vec<[&str; 4]> = store
        .iter()
        .map(|e| [e.gender(), e.word(), e.translation(), e.plural()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|&w| "─".repeat(w + 2)).collect();
    let pad = |cell: &str, width: usize| {
        let fill = width - cell.chars().count();
        format!(" {cell}{} ", " ".repeat(fill))
    };

    writeln!(output, "{}", "Deutsche Weihnachtsgeschenke Wörter".green().bold())?;
    writeln!(output, "┌{}┐", rule.join("┬"))?;
    let header: Vec<String> = HEADERS
        .into_iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w).bold().to_string())
        .collect();
    writeln!(output, "│{}│", header.join("│"))?;
    writeln!(output, "├{}┤", rule.join("┼"))?;
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .copied()
            .zip(widths)
            .map(|(c, w)| pad(c, w))
            .collect();
        writeln!(output, "│{}│", cells.join("│"))?;
    }
    writeln!(output, "└{}┘", rule.join("┴"))?;
    writeln!(output, "{} Wörter", store.len())
}

/// Print the word store as a table on stdout
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_word_list(store: &WordStore) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_word_list(store, &mut lock)
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        format!("{}", result.won).green(),
        format!("{}", result.lost).red()
    );
    println!("   Avg wrong:        {:.2}", result.average_wrong);
    println!(
        "   Hint shown:       {} rounds ({:.1}%)",
        result.hint_rounds,
        result.hint_rate() * 100.0
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Wrong guesses per round:".bright_cyan().bold());
    for (wrong, &count) in result.wrong_distribution.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let pct = (count as f64 / result.rounds as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = if wrong >= usize::from(MAX_WRONG_GUESSES) {
            "█".repeat(bar_width).red()
        } else {
            "█".repeat(bar_width).green()
        };
        let rest = "░".repeat(40_usize.saturating_sub(bar_width)).bright_black();
        println!("   {wrong}: {bar}{rest} {count:5} ({pct:5.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    #[test]
    fn word_list_has_header_and_rows() {
        let store = WordStore::new(vec![
            WordEntry::new("Stern", "der", "star", "Sterne", "").unwrap(),
            WordEntry::new("Mütze", "die", "hat", "Mützen", "").unwrap(),
        ])
        .unwrap();

        let mut output = Vec::new();
        write_word_list(&store, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        for header in HEADERS {
            assert!(text.contains(header), "missing header {header}");
        }
        assert!(text.contains("│ der     │ Stern │ star "));
        assert!(text.contains("│ die     │ Mütze │ hat "));
        assert!(text.contains("2 Wörter"));
    }

    #[test]
    fn word_list_rows_are_aligned() {
        let store = WordStore::embedded().unwrap();
        let mut output = Vec::new();
        write_word_list(&store, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let widths: Vec<usize> = text
            .lines()
            .filter(|l| l.starts_with('│') && !l.contains("Artikel"))
            .map(|l| l.chars().count())
            .collect();
        assert_eq!(widths.len(), store.len());
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
