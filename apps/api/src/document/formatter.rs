//! Resume Formatter — maps model output lines onto styled DOCX paragraphs.
//!
//! # Line classification (first match wins)
//! 1. blank                                  → skipped
//! 2. all upper-case, more than 3 chars      → section header (bold 11pt, 6pt before, 3pt after)
//! 3. contains `**`                          → title line, markers stripped (bold 10pt, 3pt before)
//! 4. starts with `•`                        → bullet item, glyph stripped (10pt, 0.25in indent)
//! 5. anything else                          → body text (10pt)
//!
//! Rule 2 runs before rule 3, so `**PROFESSIONAL SUMMARY**` is a header and
//! keeps its markers.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing, NumberFormat,
    Numbering, NumberingId, PageMargin, Paragraph, Run, SpecialIndentType, Start,
};

use super::FormatError;

const BOLD_MARKER: &str = "**";
const BULLET_GLYPH: char = '•';

// Word units: run sizes in half-points, spacing and margins in twentieths of a point.
const TWIPS_PER_INCH: i32 = 1440;
const HEADER_SPACE_BEFORE: u32 = 120;
const HEADER_SPACE_AFTER: u32 = 60;
const TITLE_SPACE_BEFORE: u32 = 60;
const BULLET_INDENT: i32 = TWIPS_PER_INCH / 4;
const BULLET_HANGING: i32 = 180;
const MARGIN_VERTICAL: i32 = TWIPS_PER_INCH / 2;
const MARGIN_HORIZONTAL: i32 = TWIPS_PER_INCH * 7 / 10;
// US Letter, 8.5in x 11in.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;
const BLACK: &str = "000000";
const BULLET_NUMBERING_ID: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    SectionHeader,
    Title,
    Bullet,
    Body,
}

/// One non-blank input line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub kind: LineKind,
    pub text: String,
}

impl StyledLine {
    pub fn is_bold(&self) -> bool {
        matches!(self.kind, LineKind::SectionHeader | LineKind::Title)
    }

    /// Font size in points (DOCX runs store half-points).
    pub fn font_size_pt(&self) -> u32 {
        match self.kind {
            LineKind::SectionHeader => 11,
            _ => 10,
        }
    }
}

/// Classifies each non-blank line of `text`. The input is only read.
pub fn classify(text: &str) -> Vec<StyledLine> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> StyledLine {
    if is_upper(line) && line.chars().count() > 3 {
        StyledLine {
            kind: LineKind::SectionHeader,
            text: line.to_string(),
        }
    } else if line.contains(BOLD_MARKER) {
        StyledLine {
            kind: LineKind::Title,
            text: line.replace(BOLD_MARKER, ""),
        }
    } else if let Some(rest) = line.strip_prefix(BULLET_GLYPH) {
        StyledLine {
            kind: LineKind::Bullet,
            text: rest.trim().to_string(),
        }
    } else {
        StyledLine {
            kind: LineKind::Body,
            text: line.to_string(),
        }
    }
}

/// True when the line has at least one cased character and none of them are lower-case.
/// Digits and punctuation are ignored, so `"EDUCATION & CERTIFICATIONS"` qualifies.
fn is_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Builds the document: page setup first, then one paragraph per styled line.
pub fn build_document(lines: &[StyledLine]) -> Docx {
    let mut docx = Docx::new()
        .page_size(PAGE_WIDTH, PAGE_HEIGHT)
        .page_margin(
            PageMargin::new()
                .top(MARGIN_VERTICAL)
                .bottom(MARGIN_VERTICAL)
                .left(MARGIN_HORIZONTAL)
                .right(MARGIN_HORIZONTAL),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new(BULLET_GLYPH.to_string()),
                    LevelJc::new("left"),
                )
                .indent(
                    Some(BULLET_INDENT),
                    Some(SpecialIndentType::Hanging(BULLET_HANGING)),
                    None,
                    None,
                ),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for line in lines {
        docx = docx.add_paragraph(paragraph_for(line));
    }

    docx
}

fn paragraph_for(line: &StyledLine) -> Paragraph {
    let mut run = Run::new()
        .add_text(line.text.as_str())
        .size(line.font_size_pt() as usize * 2);
    if line.is_bold() {
        run = run.bold();
    }

    let paragraph = Paragraph::new();
    match line.kind {
        LineKind::SectionHeader => paragraph.add_run(run.color(BLACK)).line_spacing(
            LineSpacing::new()
                .before(HEADER_SPACE_BEFORE)
                .after(HEADER_SPACE_AFTER),
        ),
        LineKind::Title => paragraph
            .add_run(run)
            .line_spacing(LineSpacing::new().before(TITLE_SPACE_BEFORE)),
        LineKind::Bullet => paragraph
            .add_run(run)
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
            .indent(
                Some(BULLET_INDENT),
                Some(SpecialIndentType::Hanging(BULLET_HANGING)),
                None,
                None,
            ),
        LineKind::Body => paragraph.add_run(run),
    }
}

/// Serializes a document to DOCX (zip) bytes.
pub fn render_docx(lines: &[StyledLine]) -> Result<Vec<u8>, FormatError> {
    let mut buf = Cursor::new(Vec::new());
    build_document(lines)
        .build()
        .pack(&mut buf)
        .map_err(|e| FormatError::Pack(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Classify + render in one step.
pub fn format_resume(text: &str) -> Result<Vec<u8>, FormatError> {
    render_docx(&classify(text))
}
