//! Interactive session: summary printing and the inspect-a-file prompt loop.
//!
//! The loop is modeled as explicit state over injected `BufRead`/`Write`
//! handles rather than ambient stdin/stdout globals, so tests can drive it
//! with a scripted sequence of input lines and capture everything printed.
//!
//! Each iteration asks three questions — continue? (y/n), file number,
//! display type — validating each answer independently. Invalid answers are
//! reported and loop back to the top of the next iteration; the only exit
//! transition is a negative answer to the continue prompt.

use std::io::{self, BufRead, Write};

use refcheck_core::batch::{file_name, BatchSummary};
use refcheck_core::compare::ComparisonResult;
use refcheck_core::error::SelectionError;
use refcheck_core::render::render_inline;

use crate::theme::Theme;

/// The two rendering strategies the operator can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Single interleaved stream with insertions and deletions in place.
    Inline,
    /// Two aligned column texts, reference and candidate.
    SideBySide,
}

impl DisplayMode {
    /// Parses the display-type answer (`1` inline, `2` side by side).
    fn parse(input: &str) -> Result<Self, SelectionError> {
        match input.trim() {
            "1" => Ok(DisplayMode::Inline),
            "2" => Ok(DisplayMode::SideBySide),
            _ => Err(SelectionError::UnknownDisplayMode),
        }
    }
}

/// Validates a file-number answer against `[1, max]`.
///
/// A non-numeric answer is reported the same way as an out-of-range one.
fn parse_identifier(input: &str, max: usize) -> Result<usize, SelectionError> {
    let id = input
        .trim()
        .parse::<usize>()
        .map_err(|_| SelectionError::IdentifierOutOfRange { max })?;
    if (1..=max).contains(&id) {
        Ok(id)
    } else {
        Err(SelectionError::IdentifierOutOfRange { max })
    }
}

/// Prints the batch result header: matched count, banner, and for a batch
/// with differences the ascending list of incorrect files.
pub fn print_summary<W: Write>(
    summary: &BatchSummary,
    theme: &Theme,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Matched files: {}/{}", summary.matched(), summary.total())?;

    if summary.all_matched() {
        writeln!(out, "{}", theme.good("SUCCESS! - All tasks tested!"))?;
    } else {
        writeln!(out, "{}", theme.bad("Some files have differences!"))?;
        print_incorrect_files(summary, out)?;
    }
    Ok(())
}

/// Prints the `Incorrect files:` section from the summary's sorted list.
fn print_incorrect_files<W: Write>(summary: &BatchSummary, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nIncorrect files:")?;
    writeln!(out, "---------------")?;

    if summary.unmatched().is_empty() {
        writeln!(out, "None - all files are correct!")?;
        return Ok(());
    }
    for id in summary.unmatched() {
        writeln!(out, "- {}", file_name(*id))?;
    }
    writeln!(out)?;
    Ok(())
}

/// The interactive phase of a run.
///
/// Borrows the summary read-only; all mutation is confined to the injected
/// input/output handles.
pub struct Session<'a, R, W> {
    summary: &'a BatchSummary,
    theme: &'a Theme,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(summary: &'a BatchSummary, theme: &'a Theme, input: R, output: W) -> Self {
        Self { summary, theme, input, output }
    }

    /// Runs the prompt loop until the operator declines to continue.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` only for I/O failures on the injected handles.
    /// Operator mistakes (bad number, unknown display type) are reported to
    /// the output handle and re-prompted, never returned.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let answer =
                self.prompt("\nWould you like to see differences for a file? (y/n): ")?;
            if !matches!(answer.trim(), "y" | "Y") {
                break;
            }

            let max = self.summary.total();
            let answer = self.prompt(&format!("Enter file number (1-{max}): "))?;
            let id = match parse_identifier(&answer, max) {
                Ok(id) => id,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            let answer =
                self.prompt("Enter display type (1 for inline, 2 for side by side): ")?;
            let mode = match DisplayMode::parse(&answer) {
                Ok(mode) => mode,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            // A valid id with no stored result should not occur, but a lookup
            // miss must not end the session — the request just prints nothing.
            if let Some(result) = self.summary.result(id) {
                self.show(result, mode)?;
            }
        }

        writeln!(self.output, "Program finished. Goodbye!")?;
        Ok(())
    }

    /// Writes a prompt without a trailing newline and reads one answer line.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }

    /// Prints the per-file status line and the requested rendering.
    fn show(&mut self, result: &ComparisonResult, mode: DisplayMode) -> io::Result<()> {
        let name = file_name(result.id);
        if result.matched {
            let message = format!("File {name}: Files are identical");
            writeln!(self.output, "{}", self.theme.good(&message))?;
            return Ok(());
        }

        let message = format!("File {name}: Files are different");
        writeln!(self.output, "{}", self.theme.bad(&message))?;

        match mode {
            DisplayMode::Inline => {
                write!(self.output, "{}", render_inline(&result.segments, self.theme))?;
            }
            DisplayMode::SideBySide => {
                writeln!(self.output, "\nReference:")?;
                writeln!(self.output, "----------")?;
                self.print_column(&result.side_by_side.reference)?;

                writeln!(self.output, "\nCandidate:")?;
                writeln!(self.output, "----------")?;
                self.print_column(&result.side_by_side.candidate)?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints one side-by-side column, suppressing blank lines.
    ///
    /// Display-only filtering: the stored line sequences keep their blanks.
    fn print_column(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            if !line.is_empty() {
                writeln!(self.output, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refcheck_core::batch;
    use refcheck_core::render::MarkerEmphasis;
    use std::fs;
    use std::io::Cursor;

    /// Builds a three-pair summary where only pair 2 differs (abc vs abd).
    fn sample_summary() -> BatchSummary {
        let dir = tempfile::TempDir::new().unwrap();
        let reference = dir.path().join("reference");
        let candidate = dir.path().join("candidate");
        fs::create_dir_all(&reference).unwrap();
        fs::create_dir_all(&candidate).unwrap();

        for (id, cand_text) in [(1, "abc"), (2, "abd"), (3, "abc")] {
            let name = batch::file_name(id);
            fs::write(reference.join(&name), "abc").unwrap();
            fs::write(candidate.join(&name), cand_text).unwrap();
        }
        batch::run(&reference, &candidate, 3, &MarkerEmphasis).unwrap()
    }

    fn run_session(summary: &BatchSummary, script: &str) -> String {
        let theme = Theme::dark();
        let mut output = Vec::new();
        Session::new(summary, &theme, Cursor::new(script), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn declining_immediately_ends_the_session() {
        let summary = sample_summary();
        let output = run_session(&summary, "n\n");
        assert!(output.contains("Would you like to see differences"));
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn end_of_input_is_treated_as_declining() {
        let summary = sample_summary();
        let output = run_session(&summary, "");
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn out_of_range_identifiers_reprompt_without_terminating() {
        let summary = sample_summary();
        let output = run_session(&summary, "y\n0\ny\n4\nn\n");
        let invalid = output
            .matches("Invalid file number. Please enter a number between 1 and 3")
            .count();
        assert_eq!(invalid, 2);
        assert!(output.contains("Goodbye"), "session must survive bad input");
    }

    #[test]
    fn non_numeric_identifier_is_reported_as_invalid() {
        let summary = sample_summary();
        let output = run_session(&summary, "y\nabc\nn\n");
        assert!(output.contains("Invalid file number"));
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn unknown_display_type_reprompts() {
        let summary = sample_summary();
        let output = run_session(&summary, "y\n2\n3\nn\n");
        assert!(output.contains("Invalid display type"));
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn inline_view_shows_the_difference_in_place() {
        let summary = sample_summary();
        let output = run_session(&summary, "y\n2\n1\nn\n");
        assert!(output.contains("Files are different"));
        // Theme markup wraps the changed characters but keeps them visible;
        // the unchanged "ab" prefix passes through unmarked.
        assert!(output.contains("ab"));
    }

    #[test]
    fn side_by_side_view_prints_both_columns() {
        let summary = sample_summary();
        let output = run_session(&summary, "y\n2\n2\nn\n");
        assert!(output.contains("Reference:"));
        assert!(output.contains("Candidate:"));
    }

    #[test]
    fn side_by_side_printing_suppresses_blank_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let reference = dir.path().join("reference");
        let candidate = dir.path().join("candidate");
        fs::create_dir_all(&reference).unwrap();
        fs::create_dir_all(&candidate).unwrap();
        fs::write(reference.join("data1.out"), "top\n\nbottom\n").unwrap();
        fs::write(candidate.join("data1.out"), "top\n\nbottom!\n").unwrap();

        let summary = batch::run(&reference, &candidate, 1, &MarkerEmphasis).unwrap();
        let pair = summary.result(1).unwrap();
        assert!(
            pair.side_by_side.reference.contains(&String::new()),
            "stored line sequences keep their blanks"
        );

        let output = run_session(&summary, "y\n1\n2\nn\n");
        assert!(
            output.contains("top\nbottom"),
            "the blank line between top and bottom should not be printed"
        );
    }

    #[test]
    fn matched_pair_reports_identical_without_a_diff() {
        let summary = sample_summary();
        let output = run_session(&summary, "y\n1\n1\nn\n");
        assert!(output.contains("File data1.out: Files are identical"));
        assert!(!output.contains("Files are different"));
    }

    #[test]
    fn summary_lists_incorrect_files_in_order() {
        let summary = sample_summary();
        let theme = Theme::dark();
        let mut out = Vec::new();
        print_summary(&summary, &theme, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Matched files: 2/3"));
        assert!(text.contains("Some files have differences!"));
        assert!(text.contains("- data2.out"));
        assert!(!text.contains("- data1.out"));
    }

    #[test]
    fn all_matched_summary_prints_the_success_banner() {
        let dir = tempfile::TempDir::new().unwrap();
        let reference = dir.path().join("reference");
        let candidate = dir.path().join("candidate");
        fs::create_dir_all(&reference).unwrap();
        fs::create_dir_all(&candidate).unwrap();
        fs::write(reference.join("data1.out"), "x").unwrap();
        fs::write(candidate.join("data1.out"), "x").unwrap();

        let summary = batch::run(&reference, &candidate, 1, &MarkerEmphasis).unwrap();
        let theme = Theme::dark();
        let mut out = Vec::new();
        print_summary(&summary, &theme, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Matched files: 1/1"));
        assert!(text.contains("SUCCESS! - All tasks tested!"));
        assert!(!text.contains("Incorrect files"));
    }
}
