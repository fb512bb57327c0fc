use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;
use zip::ZipArchive;

/// Failure kinds the per-document driver reports without aborting the run.
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("document not found")]
    NotFound,
    #[error("invalid DOCX package: {0}")]
    InvalidPackage(String),
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl DocxError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidPackage(_) => "invalid_format",
            Self::Io(_) => "io",
        }
    }
}

/// Extracts the body paragraphs of a DOCX file in document order.
///
/// A DOCX package is a ZIP archive; the body lives in `word/document.xml`.
/// Only top-level body paragraphs are returned (table cells are excluded).
/// Within a paragraph, `w:tab` renders as a tab and `w:br`/`w:cr` as a
/// newline, so one returned string can hold several physical lines.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, DocxError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DocxError::NotFound,
        _ => DocxError::Io(err),
    })?;

    let mut archive =
        ZipArchive::new(file).map_err(|err| DocxError::InvalidPackage(err.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|err| DocxError::InvalidPackage(format!("missing word/document.xml: {err}")))?
        .read_to_string(&mut xml)?;

    parse_body_paragraphs(&xml)
}

fn parse_body_paragraphs(xml: &str) -> Result<Vec<String>, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut table_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => match element.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" if table_depth == 0 => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" if in_paragraph => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(element)) => match element.name().as_ref() {
                b"w:p" if table_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(text)) if in_text => {
                let value = text
                    .unescape()
                    .map_err(|err| DocxError::InvalidPackage(err.to_string()))?;
                current.push_str(&value);
            }
            Ok(Event::End(element)) => match element.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" if in_paragraph => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(DocxError::InvalidPackage(err.to_string())),
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;
    use std::path::Path;

    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    use super::{DocxError, read_paragraphs};

    fn write_docx(path: &Path, body: &str) {
        let xml = format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>",
                "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
                "<w:body>{}</w:body></w:document>"
            ),
            body
        );

        let file = fs::File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn reads_paragraphs_in_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.docx");
        write_docx(
            &path,
            "<w:p><w:r><w:t>HADIR BERBARIS</w:t></w:r></w:p>\
             <w:p><w:r><w:t>1. 123456 KPL AHMAD BIN ALI</w:t></w:r></w:p>\
             <w:p><w:r><w:t>2. 223344 PW2 SITI BINTI OMAR</w:t></w:r></w:p>",
        );

        let paragraphs = read_paragraphs(&path).unwrap();
        assert_eq!(
            paragraphs,
            vec![
                "HADIR BERBARIS",
                "1. 123456 KPL AHMAD BIN ALI",
                "2. 223344 PW2 SITI BINTI OMAR",
            ]
        );
    }

    #[test]
    fn split_runs_concatenate_within_a_paragraph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.docx");
        write_docx(
            &path,
            "<w:p><w:r><w:t>1. 123456 </w:t></w:r><w:r><w:t>KPL AHMAD</w:t></w:r></w:p>",
        );

        let paragraphs = read_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec!["1. 123456 KPL AHMAD"]);
    }

    #[test]
    fn tabs_and_breaks_render_as_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breaks.docx");
        write_docx(
            &path,
            "<w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t><w:br/><w:t>C</w:t></w:r></w:p>",
        );

        let paragraphs = read_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec!["A\tB\nC"]);
    }

    #[test]
    fn table_cells_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.docx");
        write_docx(
            &path,
            "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>CELL TEXT</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>BODY TEXT</w:t></w:r></w:p>",
        );

        let paragraphs = read_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec!["BODY TEXT"]);
    }

    #[test]
    fn empty_paragraph_elements_yield_empty_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");
        write_docx(&path, "<w:p/><w:p><w:r><w:t>X</w:t></w:r></w:p>");

        let paragraphs = read_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec!["", "X"]);
    }

    #[test]
    fn missing_document_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_paragraphs(&dir.path().join("absent.docx")).unwrap_err();
        assert!(matches!(err, DocxError::NotFound));
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn garbage_file_reports_invalid_package() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        fs::write(&path, b"this is not a zip archive").unwrap();

        let err = read_paragraphs(&path).unwrap_err();
        assert!(matches!(err, DocxError::InvalidPackage(_)));
        assert_eq!(err.kind(), "invalid_format");
    }

    #[test]
    fn archive_without_document_xml_reports_invalid_package() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hollow.docx");
        let file = fs::File::create(&path).unwrap();
        let mut writer = ZipWriter::new(file);
        writer
            .start_file("word/other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        writer.finish().unwrap();

        let err = read_paragraphs(&path).unwrap_err();
        assert!(matches!(err, DocxError::InvalidPackage(_)));
    }
}
