//! Terminal run summary
//!
//! Prints the pages a run wrote, its diagnostics and the totals, with
//! colors when the terminal supports them.
//!
//! # Example
//!
//! ```no_run
//! use tsdoc_etch::printer::RunPrinter;
//! use tsdoc_etch::{DocConfig, Etcher};
//!
//! let mut etcher = Etcher::new(DocConfig::new("."));
//! let report = etcher.run().unwrap();
//! RunPrinter::new(&report, etcher.diagnostics(), true).print_to_stdout();
//! ```

use crate::diagnostics::{DiagnosticSeverity, DiagnosticsCollector};
use crate::etcher::RunReport;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Summary printer for a finished run
pub struct RunPrinter<'a> {
    report: &'a RunReport,
    diagnostics: &'a DiagnosticsCollector,
    use_color: bool,
}

impl<'a> RunPrinter<'a> {
    pub fn new(report: &'a RunReport, diagnostics: &'a DiagnosticsCollector, use_color: bool) -> Self {
        Self {
            report,
            diagnostics,
            use_color,
        }
    }

    pub fn print_to_stdout(&self) {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if let Err(e) = self.write_colored(&mut stdout) {
            eprintln!("Error printing run summary: {}", e);
        }
    }

    /// Write the summary to any color-capable writer
    pub fn write_colored<W: WriteColor>(&self, w: &mut W) -> io::Result<()> {
        for page in &self.report.pages {
            w.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(w, "{:>8}", "wrote")?;
            w.reset()?;
            write!(w, " {} ", page.title)?;
            w.set_color(ColorSpec::new().set_fg(Some(Color::White)).set_italic(true))?;
            writeln!(
                w,
                "-> {} ({} {})",
                page.path.display(),
                page.blocks,
                plural(page.blocks, "block", "blocks")
            )?;
            w.reset()?;
        }

        for diagnostic in self.diagnostics.diagnostics() {
            let color = match diagnostic.severity {
                DiagnosticSeverity::Error => Color::Red,
                DiagnosticSeverity::Warning => Color::Yellow,
                DiagnosticSeverity::Info => Color::Cyan,
            };
            w.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(w, "{:>8}", diagnostic.severity.display())?;
            w.reset()?;
            writeln!(w, " {}", diagnostic_line(diagnostic))?;
        }

        w.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(w, "{}", self.totals())?;
        w.reset()
    }

    fn totals(&self) -> String {
        let pages = self.report.pages.len();
        let count = self.diagnostics.len();
        format!(
            "{} {}, {} {}, {} {} in {}",
            pages,
            plural(pages, "page", "pages"),
            self.report.declarations,
            plural(self.report.declarations, "declaration", "declarations"),
            count,
            plural(count, "diagnostic", "diagnostics"),
            self.report.docs_dir.display()
        )
    }
}

impl Display for RunPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut buffer = Buffer::no_color();
        self.write_colored(&mut buffer).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(buffer.as_slice()))
    }
}

/// `file:line:col: [code] message`
fn diagnostic_line(diagnostic: &crate::diagnostics::Diagnostic) -> String {
    let mut line = String::new();
    if let Some(location) = diagnostic.location() {
        line.push_str(&location);
        line.push_str(": ");
    }
    if let Some(code) = &diagnostic.code {
        line.push('[');
        line.push_str(code);
        line.push_str("] ");
    }
    line.push_str(&diagnostic.message);
    line
}

fn plural<'s>(n: usize, one: &'s str, many: &'s str) -> &'s str {
    if n == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;
    use crate::etcher::WrittenPage;
    use std::path::PathBuf;

    fn report() -> RunReport {
        RunReport {
            docs_dir: PathBuf::from("/project/.tsdoc"),
            pages: vec![WrittenPage {
                source: PathBuf::from("/project/src/a.ts"),
                path: PathBuf::from("/project/.tsdoc/src-a.mdx"),
                title: "src/a".to_string(),
                blocks: 1,
            }],
            manifest: PathBuf::from("/project/.tsdoc/index.json"),
            declarations: 3,
            skipped: 0,
        }
    }

    #[test]
    fn test_plain_summary() {
        let report = report();
        let mut diagnostics = DiagnosticsCollector::new();
        diagnostics.add(
            Diagnostic::warning("could not determine the type of CallExpression")
                .with_code("unresolved-type")
                .in_file("/project/src/a.ts")
                .at(2, 4),
        );
        let text = RunPrinter::new(&report, &diagnostics, false).to_string();
        assert!(text.contains("   wrote src/a -> /project/.tsdoc/src-a.mdx (1 block)"));
        assert!(text.contains(
            " warning /project/src/a.ts:2:4: [unresolved-type] could not determine the type of CallExpression"
        ));
        assert!(text.ends_with("1 page, 3 declarations, 1 diagnostic in /project/.tsdoc\n"));
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let report = report();
        let diagnostics = DiagnosticsCollector::new();
        let printer = RunPrinter::new(&report, &diagnostics, true);
        let mut buffer = Buffer::ansi();
        printer.write_colored(&mut buffer).unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("0 diagnostics"));
    }
}
