use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

use crate::records::errors::Error;
use crate::records::Result;
use crate::report::{Renderer, ReportContent, DETAIL_HEADERS, DETAIL_TITLE, SUMMARY_TITLE};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 20.0;
const TOP: f64 = PAGE_HEIGHT - MARGIN;
const LINE_STEP: f64 = 8.0;
const ROW_STEP: f64 = 6.0;
// x offsets and character budgets for Test Case / Status / Execution Time / Comments
const COLUMN_OFFSETS: [f64; 4] = [20.0, 80.0, 110.0, 140.0];
const COLUMN_CHARS: [usize; 4] = [30, 14, 14, 32];
// 600x400 px at the default 300 dpi, scaled 1.5x
const CHART_BLOCK: f64 = 55.0;

pub struct PdfRenderer;

struct Cursor {
    layer: PdfLayerReference,
    y: f64,
}

impl Cursor {
    fn advance(&mut self, doc: &PdfDocumentReference, step: f64) {
        self.y -= step;
        if self.y < MARGIN {
            let (page, layer) =
                doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "report");
            self.layer = doc.get_page(page).get_layer(layer);
            self.y = TOP;
        }
    }

    fn text(&self, text: &str, size: f64, x: f64, font: &IndirectFontRef) {
        self.layer
            .use_text(text, size as f32, Mm(x as f32), Mm(self.y as f32), font);
    }
}

fn clip(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    text.chars().take(budget.saturating_sub(2)).collect::<String>() + ".."
}

impl Renderer for PdfRenderer {
    fn render(&self, content: &ReportContent, path: &Path) -> Result<()> {
        let (doc, page, layer) =
            PdfDocument::new(
                "Test Report",
                Mm(PAGE_WIDTH as f32),
                Mm(PAGE_HEIGHT as f32),
                "report",
            );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::PdfRender(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Error::PdfRender(e.to_string()))?;

        let mut cursor = Cursor {
            layer: doc.get_page(page).get_layer(layer),
            y: TOP,
        };

        cursor.text(SUMMARY_TITLE, 14.0, 75.0, &bold);
        cursor.advance(&doc, LINE_STEP + 4.0);
        for line in &content.summary {
            cursor.text(line, 12.0, MARGIN, &regular);
            cursor.advance(&doc, LINE_STEP);
        }

        if let Some(chart) = &content.chart {
            let file = File::open(chart)?;
            let decoder = PngDecoder::new(file).map_err(|e| Error::PdfRender(e.to_string()))?;
            let image = Image::try_from(decoder).map_err(|e| Error::PdfRender(e.to_string()))?;

            cursor.advance(&doc, CHART_BLOCK);
            image.add_to_layer(
                cursor.layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(65.0)),
                    translate_y: Some(Mm(cursor.y as f32)),
                    scale_x: Some(1.5),
                    scale_y: Some(1.5),
                    ..Default::default()
                },
            );
            cursor.advance(&doc, LINE_STEP);
        }

        cursor.advance(&doc, 4.0);
        cursor.text(DETAIL_TITLE, 14.0, MARGIN, &bold);
        cursor.advance(&doc, LINE_STEP);

        for (header, x) in DETAIL_HEADERS.iter().zip(COLUMN_OFFSETS) {
            cursor.text(header, 10.0, x, &bold);
        }
        cursor.advance(&doc, ROW_STEP);

        for row in &content.rows {
            for ((cell, x), budget) in row.iter().zip(COLUMN_OFFSETS).zip(COLUMN_CHARS) {
                cursor.text(&clip(cell, budget), 9.0, x, &regular);
            }
            cursor.advance(&doc, ROW_STEP);
        }

        doc.save(&mut BufWriter::new(File::create(path)?))
            .map_err(|e| Error::PdfRender(e.to_string()))?;

        Ok(())
    }
}
