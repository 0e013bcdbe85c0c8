use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::ExtractError;

/// Joins the text of every top-level body paragraph with `\n`.
/// Tables and other non-paragraph body children are skipped.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    push_children_text(&paragraph.children, &mut out);
    out
}

fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            // Hyperlinked runs are part of the visible paragraph text.
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use std::io::Cursor;

    fn build_docx(paragraphs: &[&[&str]]) -> Vec<u8> {
        let mut docx = Docx::new();
        for runs in paragraphs {
            let mut p = Paragraph::new();
            for text in runs.iter() {
                p = p.add_run(Run::new().add_text(*text));
            }
            docx = docx.add_paragraph(p);
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_joined_with_newline() {
        let bytes = build_docx(&[&["A"], &["B"], &["C"]]);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "A\nB\nC");
    }

    #[test]
    fn test_runs_within_paragraph_are_concatenated() {
        let bytes = build_docx(&[&["Senior", "Engineer"], &["Acme Corp"]]);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "SeniorEngineer\nAcme Corp");
    }

    #[test]
    fn test_empty_paragraph_yields_blank_line() {
        let bytes = build_docx(&[&["Top"], &[], &["Bottom"]]);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Top\n\nBottom");
    }

    #[test]
    fn test_invalid_archive() {
        let err = extract_docx_text(b"PK\x03\x04 truncated").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }
}
