//! Console reporting for conversion runs, verification and lookups

use crate::index::{AyahLocation, Conversion, PageSummary, Violation};
use crate::pipeline::ConvertOutcome;
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(choice: ColorChoice) -> StandardStream {
    StandardStream::stdout(choice)
}

/// Resolve the color setting, `Never` when the config turns color off
pub fn color_choice(color: bool) -> ColorChoice {
    if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print the summary of a conversion run
pub fn print_convert_report(outcome: &ConvertOutcome, choice: ColorChoice) -> io::Result<()> {
    write_convert_report(&mut stdout(choice), outcome)
}

pub fn write_convert_report<W: WriteColor>(out: &mut W, outcome: &ConvertOutcome) -> io::Result<()> {
    writeln!(out, "Total Quran lines: {}", outcome.corpus_lines)?;
    writeln!(out, "Converted file saved to {}", outcome.output_path.display())?;
    write_line_check(out, &outcome.conversion)?;
    write_degenerate(out, &outcome.conversion)?;
    Ok(())
}

/// Final line vs expected, green when they agree
fn write_line_check<W: WriteColor>(out: &mut W, conversion: &Conversion) -> io::Result<()> {
    write!(out, "Final line number: ")?;
    let color = if conversion.is_consistent() {
        Color::Green
    } else {
        Color::Yellow
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", conversion.final_line)?;
    out.reset()?;
    writeln!(
        out,
        " (should match total lines: {})",
        conversion.expected_lines
    )?;

    if !conversion.is_consistent() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(
            out,
            "warning: index and corpus differ by {} lines",
            conversion.drift()
        )?;
        out.reset()?;
    }

    Ok(())
}

fn write_degenerate<W: WriteColor>(out: &mut W, conversion: &Conversion) -> io::Result<()> {
    if conversion.degenerate.is_empty() {
        return Ok(());
    }

    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(
        out,
        "warning: {} ranges end before they start",
        conversion.degenerate.len()
    )?;
    out.reset()?;
    for at in &conversion.degenerate {
        writeln!(out, "  {}", at)?;
    }

    Ok(())
}

/// Print verification results
pub fn print_violations(violations: &[Violation], choice: ColorChoice) -> io::Result<()> {
    write_violations(&mut stdout(choice), violations)
}

pub fn write_violations<W: WriteColor>(out: &mut W, violations: &[Violation]) -> io::Result<()> {
    if violations.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "OK")?;
        out.reset()?;
        return Ok(());
    }

    for violation in violations {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "error")?;
        out.reset()?;
        writeln!(out, ": {}", violation)?;
    }
    writeln!(out, "{} problems found", violations.len())?;

    Ok(())
}

/// Print where an ayah lives, with its text when the corpus is available
pub fn print_location(
    location: &AyahLocation,
    text: Option<&str>,
    choice: ColorChoice,
) -> io::Result<()> {
    write_location(&mut stdout(choice), location, text)
}

pub fn write_location<W: WriteColor>(
    out: &mut W,
    location: &AyahLocation,
    text: Option<&str>,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}:{}", location.surah, location.ayah)?;
    out.reset()?;
    write!(out, " page ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", location.page + 1)?;
    out.reset()?;
    write!(out, " line ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", location.line)?;
    out.reset()?;
    writeln!(out)?;

    if let Some(text) = text {
        writeln!(out, "{}", text)?;
    }

    Ok(())
}

/// Print the header surah and line span of a page
pub fn print_page(summary: &PageSummary, choice: ColorChoice) -> io::Result<()> {
    write_page(&mut stdout(choice), summary)
}

pub fn write_page<W: WriteColor>(out: &mut W, summary: &PageSummary) -> io::Result<()> {
    write!(out, "page ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", summary.page + 1)?;
    out.reset()?;
    write!(out, " surah ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(out, "{}", summary.surah)?;
    out.reset()?;
    writeln!(out, " lines {}-{}", summary.first_line, summary.last_line)?;
    Ok(())
}
