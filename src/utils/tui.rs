//! Text User Interface (TUI) utilities.
//!
//! Handles the selection menu and formatted output for the CLI.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use terminal_size::{terminal_size, Width};

use crate::integrity::Signature;
use crate::sorting::bench::SortRun;
use crate::sorting::SortAlgorithm;
use crate::utils::runner::Selection;
use crate::utils::timer::VariantResult;

/// Narrowest report that still fits its labels.
const MIN_REPORT_WIDTH: usize = 51;
const MAX_REPORT_WIDTH: usize = 72;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn report_width() -> usize {
    get_term_width().clamp(MIN_REPORT_WIDTH, MAX_REPORT_WIDTH)
}

/// Render an integer with `,` thousands separators.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A duration split into display units, each reduced modulo the next unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBreakdown {
    pub minutes: u128,
    pub seconds: u128,
    pub milliseconds: u128,
    pub microseconds: u128,
    pub nanoseconds: u128,
}

impl From<Duration> for TimeBreakdown {
    fn from(d: Duration) -> Self {
        let ns = d.as_nanos();
        Self {
            minutes: ns / 60_000_000_000,
            seconds: ns / 1_000_000_000 % 60,
            milliseconds: ns / 1_000_000 % 1000,
            microseconds: ns / 1000 % 1000,
            nanoseconds: ns % 1000,
        }
    }
}

impl TimeBreakdown {
    /// Non-zero components, largest unit first, with their unit labels.
    fn components(&self) -> impl Iterator<Item = (u128, &'static str, &'static str)> {
        [
            (self.minutes, "m", "Minutes"),
            (self.seconds, "s", "Seconds"),
            (self.milliseconds, "ms", "Milliseconds"),
            (self.microseconds, "us", "Microseconds"),
            (self.nanoseconds, "ns", "Nanoseconds"),
        ]
        .into_iter()
        .filter(|(value, _, _)| *value > 0)
    }
}

/// Compact form such as `1m 2s 3ms 4us 5ns`; zero renders as `0ns`.
pub fn format_time(d: Duration) -> String {
    let parts: Vec<String> = TimeBreakdown::from(d)
        .components()
        .map(|(value, short, _)| format!("{}{}", value, short))
        .collect();

    if parts.is_empty() {
        "0ns".to_string()
    } else {
        parts.join(" ")
    }
}

/// Multi-line breakdown printed after a single algorithm run.
pub fn render_elapsed_time(d: Duration) -> String {
    let mut out = String::from("Time Elapsed:\n");
    let breakdown = TimeBreakdown::from(d);
    let mut any = false;
    for (value, _, long) in breakdown.components() {
        any = true;
        let _ = writeln!(out, "\t{:>3} {}", value, long);
    }
    if !any {
        let _ = writeln!(out, "\t{:>3} Nanoseconds", 0);
    }
    out
}

pub fn print_elapsed_time(d: Duration) {
    println!("{}", render_elapsed_time(d));
}

/// Boxed summary of the dataset followed by one row per algorithm.
pub fn render_sorting_report(baseline: &Signature, runs: &[SortRun], width: usize) -> String {
    let width = width.max(MIN_REPORT_WIDTH);
    let heavy = "=".repeat(width);
    let light = "-".repeat(width);
    let mut out = String::new();

    let title = "Sorting Results";
    let inner = width - 2;
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "|{:^inner$}|", title);
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out);

    // "| label | value |": label column is 22 wide, value takes the rest.
    let value_width = width - 29;
    let rows = [
        ("Elements Sorted:", format_number(baseline.len() as i64)),
        ("Element Range Minimum:", format_number(i64::from(baseline.min()))),
        ("Element Range Maximum:", format_number(i64::from(baseline.max()))),
    ];
    let _ = writeln!(out, "{light}");
    for (label, value) in rows {
        let _ = writeln!(out, "| {:<22} | {:>value_width$} |", label, value);
        let _ = writeln!(out, "{light}");
    }
    let _ = writeln!(out);

    // Algorithm column gets 19, time column the rest.
    let time_width = width - 26;
    let _ = writeln!(out, "{light}");
    let _ = writeln!(
        out,
        "| {:^19} | {:^time_width$} |",
        "Algorithm:", "Time Elapsed:"
    );
    let _ = writeln!(out, "{light}");
    for run in runs {
        let _ = writeln!(
            out,
            "| {:<19} | {:>time_width$} |",
            run.algorithm.name(),
            format_time(run.elapsed)
        );
        let _ = writeln!(out, "{light}");
    }
    out
}

pub fn print_sorting_report(baseline: &Signature, runs: &[SortRun]) {
    print!("{}", render_sorting_report(baseline, runs, report_width()));
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the repeated-run statistics table.
///
/// "Relative" compares each average against the first row.
pub fn print_results_table(results: &[VariantResult], elements: usize) {
    let Some(first) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    // 12+12+12+12+9+9 = 66 chars + 6 spaces + 2 indent
    let fixed_width = 74;
    let name_width = term_width.saturating_sub(fixed_width).clamp(15, 20);
    let table_width = name_width + 66 + 6;
    let baseline = first.avg_time.as_nanos() as f64;

    println!(
        "  {} elements ({} runs per algorithm)",
        format_number(elements as i64),
        first.runs
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<n$} {:>12} {:>12} {:>12} {:>12} {:>9} {:>9}",
        "Algorithm",
        "Average",
        "Median",
        "Min",
        "Max",
        "Relative",
        "CV",
        n = name_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg = result.avg_time.as_nanos() as f64;
        let relative = if baseline > 0.0 { avg / baseline } else { 0.0 };
        println!(
            "  {:<n$} {:>12} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}%",
            truncate(&result.name, name_width),
            format!("{:.2?}", result.avg_time),
            format!("{:.2?}", result.median_time),
            format!("{:.2?}", result.min_time),
            format!("{:.2?}", result.max_time),
            relative,
            result.cv() * 100.0,
            n = name_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Sorting Algorithm Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms() {
    println!("Available algorithms:");
    println!();
    for algo in SortAlgorithm::ALL {
        let stability = if algo.is_stable() { "stable" } else { "unstable" };
        println!(
            "  {}. {:<16} [{:<8}] - {}",
            algo.menu_index(),
            algo.name(),
            stability,
            algo.description()
        );
    }
}

pub fn render_menu() -> String {
    let mut out = String::from("Please Select a Sorting Algorithm to Use: (Enter a number)\n");
    for algo in SortAlgorithm::ALL {
        let _ = writeln!(out, "    {}. {}", algo.menu_index(), title_case(algo.name()));
    }
    let _ = writeln!(out, "    {}. [Test All Algorithms]", SortAlgorithm::ALL.len() + 1);
    out
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Show the menu until a valid choice is entered.
///
/// Only the first non-blank character of each line counts. End of input is
/// reported as [`io::ErrorKind::UnexpectedEof`].
pub fn prompt_selection<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Selection> {
    let mut line = String::new();
    loop {
        writeln!(output, "{}", render_menu())?;
        write!(output, "Selection: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no menu selection entered",
            ));
        }

        let Some(choice) = line.trim().chars().next() else {
            continue;
        };
        match Selection::from_menu_choice(choice) {
            Some(selection) => {
                writeln!(output)?;
                return Ok(selection);
            }
            None => writeln!(output, "'{}' is not a valid option.\n", choice)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::tabulate;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(10_000), "10,000");
        assert_eq!(format_number(1_234_567_890), "1,234,567,890");
        assert_eq!(format_number(-12_345), "-12,345");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_time_breakdown() {
        let d = Duration::from_nanos(62_003_004_005);
        let b = TimeBreakdown::from(d);
        assert_eq!(
            b,
            TimeBreakdown {
                minutes: 1,
                seconds: 2,
                milliseconds: 3,
                microseconds: 4,
                nanoseconds: 5,
            }
        );
        assert_eq!(format_time(d), "1m 2s 3ms 4us 5ns");
    }

    #[test]
    fn test_format_time_skips_zero_units() {
        assert_eq!(format_time(Duration::from_micros(1500)), "1ms 500us");
        assert_eq!(format_time(Duration::ZERO), "0ns");
    }

    #[test]
    fn test_render_elapsed_time() {
        let text = render_elapsed_time(Duration::from_nanos(2_000_007));
        assert_eq!(text, "Time Elapsed:\n\t  2 Milliseconds\n\t  7 Nanoseconds\n");
    }

    #[test]
    fn test_sorting_report_rows_fit_width() {
        let baseline = tabulate(&[0, 1000, 5, 5]).unwrap();
        let runs: Vec<SortRun> = SortAlgorithm::ALL
            .iter()
            .map(|&algorithm| SortRun {
                algorithm,
                output: Vec::new(),
                elapsed: Duration::from_micros(1234),
            })
            .collect();

        for width in [MIN_REPORT_WIDTH, MAX_REPORT_WIDTH] {
            let report = render_sorting_report(&baseline, &runs, width);
            assert!(report.lines().all(|l| l.is_empty() || l.chars().count() == width));
            assert!(report.contains("Sorting Results"));
            assert!(report.contains("1,000 |"));
            assert!(report.contains("| insertion sort"));
            assert!(report.contains("1ms 234us |"));
        }
    }

    #[test]
    fn test_menu_lists_all_options() {
        let menu = render_menu();
        assert!(menu.contains("1. Counting Sort"));
        assert!(menu.contains("5. Insertion Sort"));
        assert!(menu.contains("6. [Test All Algorithms]"));
    }

    #[test]
    fn test_prompt_reprompts_on_invalid() {
        let input = b"x\n\n9\n3\n";
        let mut output = Vec::new();
        let selection = prompt_selection(&input[..], &mut output).unwrap();
        assert_eq!(selection, Selection::Single(SortAlgorithm::Quick));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("'x' is not a valid option."));
        assert!(text.contains("'9' is not a valid option."));
    }

    #[test]
    fn test_prompt_all_and_eof() {
        let mut sink = Vec::new();
        assert_eq!(
            prompt_selection(&b"6\n"[..], &mut sink).unwrap(),
            Selection::All
        );
        let err = prompt_selection(&b""[..], &mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
