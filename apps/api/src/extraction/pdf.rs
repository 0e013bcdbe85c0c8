use std::panic::{self, AssertUnwindSafe};

use super::ExtractError;

/// Extracts the text of every page and concatenates it in page order,
/// with no separator between pages.
///
/// `pdf_extract` can panic on malformed input, so the call is wrapped in
/// `catch_unwind` and the panic reported as a PDF error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match result {
        Ok(Ok(pages)) => Ok(join_pages(pages)),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Pdf(
            "PDF parser panicked (malformed document)".to_string(),
        )),
    }
}

fn join_pages(pages: Vec<String>) -> String {
    pages.concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::extract_text;

    /// Minimal PDF with one Helvetica text line per page and a correct xref table.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut objects: Vec<String> = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            {
                let kids: Vec<String> = (0..pages.len())
                    .map(|i| format!("{} 0 R", 4 + 2 * i))
                    .collect();
                format!(
                    "<< /Type /Pages /Kids [{}] /Count {} >>",
                    kids.join(" "),
                    pages.len()
                )
            },
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];
        for (i, text) in pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                5 + 2 * i
            ));
            let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            objects.push(format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            ));
        }

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_start = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        out
    }

    #[test]
    fn test_multi_page_pdf_is_concatenated_in_order() {
        let bytes = build_pdf(&["AlphaPage", "BravoPage"]);

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("AlphaPage"));
        assert!(pages[1].contains("BravoPage"));

        let text = extract_text(&bytes, "resume.pdf").unwrap();
        assert_eq!(text, pages.concat());
        let alpha = text.find("AlphaPage").unwrap();
        let bravo = text.find("BravoPage").unwrap();
        assert!(alpha < bravo);
    }

    #[test]
    fn test_pages_are_concatenated_without_separator() {
        let pages = vec!["Page one.".to_string(), "Page two.".to_string(), String::new()];
        assert_eq!(join_pages(pages), "Page one.Page two.");
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(extract_pdf_text(&[]), Err(ExtractError::Pdf(_))));
    }
}
