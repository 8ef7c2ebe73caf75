//! Line-based printer for rendered search results.

use std::io::{self, Write};

use crate::render::{
    DisplayUnit, RenderedResults, Run, ENGLISH_LABEL, EXPLANATION_HEADING, NARRATOR_LABEL,
    SCORE_LABEL, URDU_LABEL,
};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Print the header block.
///
/// ```text
/// Search Results for: "patience"
/// ════════════════════════════════════════════════════════════
/// Found 2 results
/// ```
pub fn write_header<W: Write>(out: &mut W, rendered: &RenderedResults) -> io::Result<()> {
    writeln!(out, "{}", rendered.heading)?;
    writeln!(out, "{}", "═".repeat(LINE_WIDTH))?;
    writeln!(out, "{}", rendered.summary)?;
    if let Some(processed) = &rendered.processed_query {
        writeln!(out, "Processed query: {}", processed)?;
    }
    writeln!(out)
}

/// Print one result.
///
/// ```text
/// [1] قرآن  البقرة - آیت 153
/// ────────────────────────────────────────────────────────────
///   يَا أَيُّهَا الَّذِينَ آمَنُوا
///   English: O you who believe
///   Relevance Score: 0.1235
/// ```
pub fn write_unit<W: Write>(out: &mut W, position: usize, unit: &DisplayUnit) -> io::Result<()> {
    if unit.reference_label.is_empty() {
        writeln!(out, "[{}] {}", position, unit.source_label)?;
    } else {
        writeln!(out, "[{}] {}  {}", position, unit.source_label, unit.reference_label)?;
    }
    writeln!(out, "{}", "─".repeat(LINE_WIDTH))?;
    writeln!(out, "  {}", unit.arabic_text)?;

    let labelled = [
        (URDU_LABEL, unit.urdu_text.as_ref()),
        (ENGLISH_LABEL, unit.english_text.as_ref()),
        (NARRATOR_LABEL, unit.narrator.as_ref()),
    ];
    for (label, value) in labelled {
        if let Some(value) = value {
            writeln!(out, "  {} {}", label, value)?;
        }
    }
    writeln!(out, "  {} {}", SCORE_LABEL, unit.score_text)?;
    writeln!(out)
}

/// Emphasis has no styling on a plain stream, so the markers are dropped.
fn plain_line(runs: &[Run]) -> String {
    runs.iter().map(Run::text).collect()
}

pub fn write_results<W: Write>(out: &mut W, rendered: &RenderedResults) -> io::Result<()> {
    write_header(out, rendered)?;
    for (i, unit) in rendered.units.iter().enumerate() {
        write_unit(out, i + 1, unit)?;
    }

    if let Some(explanation) = &rendered.explanation {
        writeln!(out, "{}", EXPLANATION_HEADING)?;
        writeln!(out, "{}", "═".repeat(LINE_WIDTH))?;
        for runs in explanation {
            writeln!(out, "{}", plain_line(runs))?;
        }
    }
    out.flush()
}
