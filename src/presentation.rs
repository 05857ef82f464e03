// src/presentation.rs
use std::io::Write;

use codestat_core::Report;
use codestat_domain::Totals;

use crate::args::OutputFormat;

const RULE: &str = "--------------------------------------------------------------------------";

/// Writes the report in the requested format.
pub fn emit(report: &Report, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => output_text(report, out),
        OutputFormat::Json => output_json(report, out),
    }
}

fn output_json(report: &Report, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn output_text(report: &Report, out: &mut impl Write) -> anyhow::Result<()> {
    write_header("LANGUAGE", out)?;
    for language in &report.languages {
        write_row(&language.name, &language.totals, out)?;
    }
    writeln!(out, "{RULE}")?;
    write_row("Total", &report.totals, out)?;
    writeln!(out, "{RULE}")?;

    if !report.files.is_empty() {
        writeln!(out)?;
        writeln!(out, "{:>8} {:>8} {:>8} {:>10}  FILE", "LINES", "CODE", "BLANK", "COMPLEXITY")?;
        writeln!(out, "{RULE}")?;
        for file in report.files.iter().filter(|f| !f.binary) {
            writeln!(
                out,
                "{:>8} {:>8} {:>8} {:>10}  {}",
                file.lines, file.code, file.blank, file.complexity, file.path
            )?;
        }
    }

    if report.binary_files > 0 {
        writeln!(out, "binary files skipped: {}", report.binary_files)?;
    }
    if !report.faults.is_empty() {
        writeln!(out, "failed: {}", report.faults.len())?;
        for fault in &report.faults {
            writeln!(out, "  {}: {}", fault.path, fault.message)?;
        }
    }
    Ok(())
}

fn write_header(label: &str, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "{label:<16} {:>7} {:>9} {:>9} {:>9} {:>10}",
        "FILES", "LINES", "CODE", "BLANK", "COMPLEXITY"
    )?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

fn write_row(name: &str, totals: &Totals, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "{name:<16} {:>7} {:>9} {:>9} {:>9} {:>10}",
        totals.files, totals.lines, totals.code, totals.blank, totals.complexity
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use codestat_core::Aggregator;
    use codestat_domain::FileSummary;
    use codestat_shared_kernel::FilePath;

    use super::*;

    fn summary(path: &str, language: &str, code: u64, blank: u64, complexity: u64) -> FileSummary {
        FileSummary {
            path: FilePath::from(path),
            language: language.to_string(),
            lines: code + blank,
            code,
            blank,
            comment: 0,
            complexity,
            bytes: 10,
            binary: false,
        }
    }

    fn report(retain: bool) -> Report {
        let aggregator = if retain { Aggregator::retaining_files() } else { Aggregator::new() };
        aggregator.add(summary("a.rs", "Rust", 10, 2, 3));
        aggregator.add(summary("b.py", "Python", 4, 1, 0));
        aggregator.into_report()
    }

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        emit(report, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lists_languages_and_total() {
        let text = render(&report(false), OutputFormat::Text);
        let rust = text.lines().position(|l| l.starts_with("Rust")).unwrap();
        let python = text.lines().position(|l| l.starts_with("Python")).unwrap();
        assert!(rust < python, "ordered by code lines");

        let total = text.lines().find(|l| l.starts_with("Total")).unwrap();
        let cols: Vec<&str> = total.split_whitespace().collect();
        assert_eq!(cols, vec!["Total", "2", "17", "14", "3", "3"]);
        assert!(!text.contains("FILE\n"));
    }

    #[test]
    fn text_per_file_section() {
        let text = render(&report(true), OutputFormat::Text);
        assert!(text.lines().any(|l| l.ends_with("a.rs")));
        assert!(text.lines().any(|l| l.ends_with("b.py")));
    }

    #[test]
    fn json_round_trips_totals() {
        let json = render(&report(false), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totals"]["code"], 14);
        assert_eq!(value["languages"][0]["name"], "Rust");
        assert_eq!(value["languages"][0]["complexity"], 3);
        assert!(value.get("files").is_none());
    }
}
