use std::fs::{self, File};
use std::path::Path;

use docx_rs::{Docx, Paragraph, Pic, Run, Table, TableCell, TableRow};

use crate::records::errors::Error;
use crate::records::Result;
use crate::report::{Renderer, ReportContent, DETAIL_HEADERS, DETAIL_TITLE, SUMMARY_TITLE};

// 9525 EMU per pixel; the 600x400 chart is embedded at 75% size
const EMU_PER_PIXEL: u32 = 9525;
const CHART_WIDTH_EMU: u32 = 450 * EMU_PER_PIXEL;
const CHART_HEIGHT_EMU: u32 = 300 * EMU_PER_PIXEL;

pub struct DocxRenderer;

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(28))
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn header_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text).bold()))
}

impl Renderer for DocxRenderer {
    fn render(&self, content: &ReportContent, path: &Path) -> Result<()> {
        let mut docx = Docx::new().add_paragraph(heading(SUMMARY_TITLE));

        for line in &content.summary {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line.as_str())));
        }

        if let Some(chart) = &content.chart {
            let bytes = fs::read(chart)?;
            let pic = Pic::new(&bytes).size(CHART_WIDTH_EMU, CHART_HEIGHT_EMU);
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_image(pic)));
        }

        docx = docx.add_paragraph(heading(DETAIL_TITLE));

        let mut rows = vec![TableRow::new(
            DETAIL_HEADERS.iter().map(|header| header_cell(header)).collect(),
        )];
        for row in &content.rows {
            rows.push(TableRow::new(
                row.iter().map(|text| cell(text)).collect(),
            ));
        }
        docx = docx.add_table(Table::new(rows));

        let file = File::create(path)?;
        docx.build()
            .pack(file)
            .map_err(|e| Error::DocxRender(e.to_string()))?;

        Ok(())
    }
}
