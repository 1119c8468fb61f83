use crate::report::builder::{NO_DATA_NOTICE, Report, ReportBody, ReportRow, Status, TABLE_HEADERS};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

type Rgb = (f32, f32, f32);

const HEADER_BG: Rgb = (0.827, 0.827, 0.827); // #D3D3D3
const PRESENT_BG: Rgb = (0.902, 0.957, 0.918); // #e6f4ea
const ABSENT_BG: Rgb = (0.992, 0.925, 0.918); // #fdecea
const GRID: Rgb = (0.5, 0.5, 0.5);

/// Student Name, Status, Check-in Time.
const COL_WIDTHS: [f32; 3] = [220.0, 80.0, 100.0];

/// Encode text for the WinAnsi-encoded base font. Latin-1 maps directly,
/// the 0x80..=0x9F block carries the Windows-1252 extras, anything else
/// becomes `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => win_1252_extra(c).unwrap_or(b'?'),
        })
        .collect()
}

fn win_1252_extra(c: char) -> Option<u8> {
    let b = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(b)
}

/// A4 attendance report writer.
///
/// `y` values passed around are the top of the next free line; rows are
/// drawn downwards from there.
pub struct ReportPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    heading_font_size: f32,
    title_font_size: f32,
}

impl Default for ReportPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 24.0,
            row_h: 18.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 10.5,
            heading_font_size: 13.0,
            title_font_size: 18.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Draw the page footer and write the page's content stream.
    fn finish_page(&mut self, mut content: Content, page_no: usize) {
        let label = format!("Page {page_no}");
        self.draw_text(
            &mut content,
            self.page_w - self.margin - 40.0,
            self.margin - 14.0,
            self.font_size,
            &label,
        );

        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Close the current page and continue on a fresh one.
    fn break_page(&mut self, content: &mut Content, y: &mut f32, page_no: &mut usize) {
        let full = std::mem::replace(content, Content::new());
        self.finish_page(full, *page_no);
        *page_no += 1;
        *content = self.new_page();
        *y = self.top();
    }

    fn top(&self) -> f32 {
        self.page_h - self.margin
    }

    fn table_width(&self) -> f32 {
        COL_WIDTHS.iter().sum()
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_win_ansi(text)));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, bottom: f32, (r, g, b): Rgb) {
        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.rect(self.margin, bottom, self.table_width(), self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cells(&self, content: &mut Content, bottom: f32, cells: &[String], size: f32) {
        let mut x = self.margin;

        for (text, w) in cells.iter().zip(COL_WIDTHS) {
            self.draw_text(content, x + 4.0, bottom + 5.0, size, text);

            content.save_state();
            content.set_stroke_rgb(GRID.0, GRID.1, GRID.2);
            content.set_line_width(0.45);
            content.rect(x, bottom, w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    fn draw_header_row(&self, content: &mut Content, y: &mut f32) {
        let bottom = *y - self.row_h;
        let cells: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
        self.fill_band(content, bottom, HEADER_BG);
        self.draw_cells(content, bottom, &cells, self.header_font_size);
        *y = bottom;
    }

    fn draw_body_row(&self, content: &mut Content, y: &mut f32, row: &ReportRow) {
        let bottom = *y - self.row_h;
        let bg = match row.status {
            Status::Present => PRESENT_BG,
            Status::Absent => ABSENT_BG,
        };
        self.fill_band(content, bottom, bg);
        self.draw_cells(content, bottom, &row.cells(), self.font_size);
        *y = bottom;
    }

    /// Title and generation stamp, first page only.
    fn draw_title_block(&self, content: &mut Content, y: &mut f32, title: &str, generated_at: &str) {
        *y -= self.title_font_size;
        self.draw_text(content, self.margin, *y, self.title_font_size, title);
        *y -= self.font_size + 8.0;
        self.draw_text(
            content,
            self.margin,
            *y,
            self.font_size,
            &format!("Generated at: {generated_at}"),
        );
        *y -= 12.0;
    }

    /// Render the whole report: one table per date, a new page after every
    /// group of dates, header row repeated when a table spills over.
    pub fn write_report(&mut self, report: &Report, generated_at: &str) {
        let mut page_no = 1;
        let mut content = self.new_page();
        let mut y = self.top();

        self.draw_title_block(&mut content, &mut y, &report.title, generated_at);

        if let ReportBody::NoData = report.body {
            y -= self.font_size;
            self.draw_text(&mut content, self.margin, y, self.font_size, NO_DATA_NOTICE);
            self.finish_page(content, page_no);
            return;
        }

        for (page_idx, group) in report.pages().enumerate() {
            if page_idx > 0 {
                self.break_page(&mut content, &mut y, &mut page_no);
            }

            for table in group {
                // heading, header row and at least one body row on the same page
                if y - (self.heading_font_size + 6.0 + 2.0 * self.row_h) < self.margin {
                    self.break_page(&mut content, &mut y, &mut page_no);
                }

                y -= self.heading_font_size + 6.0;
                self.draw_text(
                    &mut content,
                    self.margin,
                    y + 4.0,
                    self.heading_font_size,
                    &table.heading(),
                );
                self.draw_header_row(&mut content, &mut y);

                for row in &table.rows {
                    if y - self.row_h < self.margin {
                        self.break_page(&mut content, &mut y, &mut page_no);
                        self.draw_header_row(&mut content, &mut y);
                    }
                    self.draw_body_row(&mut content, &mut y, row);
                }

                y -= 12.0;
            }
        }

        self.finish_page(content, page_no);
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.into_bytes();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
