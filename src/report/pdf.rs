//! Low-level PDF page building
//!
//! A small cursor-based builder over lopdf: text lines and images are laid
//! out top-down on A4 pages, and a new page starts automatically whenever
//! the next element would cross the bottom margin. Geometry follows the
//! source report layout (millimetre margins and line heights on A4).
//!
//! Images are referenced by path while building and only read back and
//! embedded during [`PdfBuilder::finalize`], so the files must exist on
//! disk by then.

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, xobject, Dictionary, Document, Object, Stream};

use crate::error::{ReportError, ReportResult};

/// Points per millimetre
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// A4 page width in points
pub const PAGE_WIDTH: f32 = 595.28;

/// A4 page height in points
pub const PAGE_HEIGHT: f32 = 841.89;

/// Left and top margin (10 mm)
pub const MARGIN: f32 = 10.0 * PT_PER_MM;

/// Bottom margin that triggers the automatic page break (15 mm)
pub const BOTTOM_MARGIN: f32 = 15.0 * PT_PER_MM;

/// Height of one text line (10 mm)
pub const LINE_HEIGHT: f32 = 10.0 * PT_PER_MM;

/// An image placement recorded during building, embedded at finalize
struct PlacedImage {
    path: PathBuf,
    x: f32,
    /// Distance from the top of the page to the image's top edge
    top: f32,
    width: f32,
    height: f32,
}

#[derive(Default)]
struct PageDraft {
    ops: Vec<Operation>,
    images: Vec<PlacedImage>,
}

/// Cursor-based PDF builder with automatic pagination
pub struct PdfBuilder {
    done: Vec<PageDraft>,
    current: PageDraft,
    /// Distance from the top of the current page to the next free position
    cursor: f32,
}

impl PdfBuilder {
    /// Create a builder positioned at the top of the first page
    pub fn new() -> Self {
        Self {
            done: Vec::new(),
            current: PageDraft::default(),
            cursor: MARGIN,
        }
    }

    /// Start a new page and reset the cursor to the top margin
    pub fn page_break(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.done.push(finished);
        self.cursor = MARGIN;
    }

    /// Break the page if `height` points would cross the bottom margin
    pub fn ensure_space(&mut self, height: f32) {
        if self.cursor + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.page_break();
        }
    }

    /// Break the page up front if an upcoming block of `height` points
    /// would not fit, provided it could fit on a fresh page at all
    pub fn ensure_block(&mut self, height: f32) {
        if height <= PAGE_HEIGHT - MARGIN - BOTTOM_MARGIN {
            self.ensure_space(height);
        }
    }

    /// Advance the cursor without drawing anything
    pub fn vertical_space(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Draw one left-aligned text line and advance the cursor
    pub fn text_line(&mut self, text: &str, font_size: f32) {
        self.ensure_space(LINE_HEIGHT);
        let baseline = PAGE_HEIGHT - self.cursor - font_size;
        self.push_text(MARGIN, baseline, text, font_size);
        self.cursor += LINE_HEIGHT;
    }

    /// Draw one horizontally centered text line and advance the cursor
    ///
    /// Centering approximates glyph widths at half the font size, which is
    /// close enough for the built-in Helvetica face.
    pub fn centered_line(&mut self, text: &str, font_size: f32) {
        self.ensure_space(LINE_HEIGHT);
        let text_width = text.chars().count() as f32 * font_size * 0.5;
        let x = ((PAGE_WIDTH - text_width) / 2.0).max(MARGIN);
        let baseline = PAGE_HEIGHT - self.cursor - font_size;
        self.push_text(x, baseline, text, font_size);
        self.cursor += LINE_HEIGHT;
    }

    /// Record an image placement at the cursor and advance past it
    ///
    /// The file is read and embedded during [`PdfBuilder::finalize`].
    pub fn embed_image(&mut self, path: &Path, width: f32, height: f32) {
        self.ensure_space(height);
        self.current.images.push(PlacedImage {
            path: path.to_path_buf(),
            x: MARGIN,
            top: self.cursor,
            width,
            height,
        });
        self.cursor += height;
    }

    fn push_text(&mut self, x: f32, baseline: f32, text: &str, font_size: f32) {
        let ops = &mut self.current.ops;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(b"F1".to_vec()), Object::Real(font_size)],
        ));
        ops.push(Operation::new(
            "Td",
            vec![Object::Real(x), Object::Real(baseline)],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                text.as_bytes().to_vec(),
                lopdf::StringFormat::Literal,
            )],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    /// Build the final document, embedding all recorded images
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Pdf`] if content encoding fails or an image
    /// file cannot be read back from disk.
    pub fn finalize(self) -> ReportResult<Document> {
        let mut pages = self.done;
        pages.push(self.current);

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_entries = Vec::new();
        for page in pages {
            let content = Content {
                operations: page.ops,
            };
            let encoded = content
                .encode()
                .map_err(|e| ReportError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(PAGE_WIDTH),
                    Object::Real(PAGE_HEIGHT),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_entries.push((page_id, page.images));
        }

        let kids: Vec<Object> = page_entries
            .iter()
            .map(|(id, _)| Object::Reference(*id))
            .collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => page_entries.len() as i64,
                "Kids" => kids,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        for (page_id, images) in page_entries {
            for img in images {
                let bytes = std::fs::read(&img.path).map_err(|e| {
                    ReportError::Pdf(format!(
                        "Failed to read chart image {}: {}",
                        img.path.display(),
                        e
                    ))
                })?;
                let xobj = xobject::image_from(bytes)
                    .map_err(|e| ReportError::Pdf(e.to_string()))?;
                // PDF origin is bottom-left; convert the top-down cursor.
                let y = PAGE_HEIGHT - img.top - img.height;
                doc.insert_image(page_id, xobj, (img.x, y), (img.width, img.height))
                    .map_err(|e| ReportError::Pdf(e.to_string()))?;
            }
        }

        Ok(doc)
    }
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_document() {
        let mut builder = PdfBuilder::new();
        builder.centered_line("Title", 14.0);
        for _ in 0..5 {
            builder.text_line("line", 12.0);
        }

        let doc = builder.finalize().unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_automatic_pagination() {
        // 27 lines of 10 mm fit per page; 60 lines need three pages.
        let mut builder = PdfBuilder::new();
        for i in 0..60 {
            builder.text_line(&format!("line {}", i), 12.0);
        }

        let doc = builder.finalize().unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_block_breaks_before_start() {
        let mut builder = PdfBuilder::new();
        // Fill most of the first page.
        for _ in 0..24 {
            builder.text_line("filler", 12.0);
        }
        // An 8-line block cannot fit in the remaining space, so it must
        // start on page two.
        builder.ensure_block(8.0 * LINE_HEIGHT);
        for _ in 0..8 {
            builder.text_line("block", 12.0);
        }

        let doc = builder.finalize().unwrap();
        assert_eq!(doc.get_pages().len(), 2);

        let page_two = doc.extract_text(&[2]).unwrap();
        assert!(page_two.contains("block"));
        assert!(!page_two.contains("filler"));
    }

    #[test]
    fn test_text_is_extractable() {
        let mut builder = PdfBuilder::new();
        builder.text_line("Household 1:", 12.0);

        let doc = builder.finalize().unwrap();
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("Household 1:"));
    }
}
