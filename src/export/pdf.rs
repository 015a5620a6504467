use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Flowing A4 document: text lines and multi-page tables laid out top-down.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    content: Option<Content>,

    title: String,
    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    y: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl PdfManager {
    pub fn new(title: &str) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            content: None,

            title: title.to_string(),
            page_w: 595.0,
            page_h: 842.0,
            margin: 40.0,
            row_h: 18.0,
            y: 0.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 9.5,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Close the current page (if any) and open a new one with title and page number.
    fn new_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources()
                .fonts()
                .pair(Name(b"F1"), self.font_id)
                .pair(Name(b"F2"), self.bold_font_id);
        }

        self.current_content_id = Some(content_id);

        let mut content = Content::new();
        let page_no = format!("Page {}", self.page_refs.len());
        draw_text(
            &mut content,
            true,
            self.margin,
            self.page_h - self.margin,
            self.title_font_size,
            &self.title,
        );
        draw_text(
            &mut content,
            false,
            self.page_w - self.margin - 40.0,
            self.margin - 20.0,
            self.font_size,
            &page_no,
        );
        self.content = Some(content);
        self.y = self.page_h - self.margin - 30.0;
    }

    fn finalize_page(&mut self) {
        if let (Some(id), Some(content)) = (self.current_content_id.take(), self.content.take()) {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Make sure `h` points fit on the current page.
    fn ensure_space(&mut self, h: f32) {
        if self.content.is_none() || self.y - h < self.margin {
            self.new_page();
        }
    }

    fn text_line(&mut self, text: &str, size: f32, bold: bool) {
        let h = size + 6.0;
        self.ensure_space(h);
        self.y -= h;
        let (x, y) = (self.margin, self.y);
        if let Some(content) = self.content.as_mut() {
            draw_text(content, bold, x, y, size, text);
        }
    }

    pub fn line(&mut self, text: &str) {
        self.text_line(text, self.font_size + 1.0, false);
    }

    pub fn heading(&mut self, text: &str) {
        self.space(6.0);
        self.text_line(text, self.header_font_size + 2.0, true);
        self.space(4.0);
    }

    pub fn space(&mut self, h: f32) {
        self.y -= h;
    }

    /// Filled box with a label on the left and a value on the right.
    pub fn total_box(&mut self, label: &str, value: &str) {
        let h = self.row_h + 8.0;
        self.ensure_space(h + 6.0);
        self.y -= h + 6.0;
        let (x, y, w) = (self.margin, self.y, self.page_w - 2.0 * self.margin);
        let size = self.header_font_size + 2.0;
        if let Some(content) = self.content.as_mut() {
            content.save_state();
            content.set_fill_rgb(0.18, 0.46, 0.71);
            content.rect(x, y, w, h);
            content.fill_nonzero();
            content.restore_state();

            content.save_state();
            content.set_fill_rgb(1.0, 1.0, 1.0);
            draw_text(content, true, x + 8.0, y + 8.0, size, label);
            let vx = x + w - 8.0 - approx_width(value, size);
            draw_text(content, true, vx, y + 8.0, size, value);
            content.restore_state();
        }
    }

    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| approx_width(h, self.header_font_size) + 8.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = w.max(approx_width(cell, self.font_size) + 8.0);
                }
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_row(&mut self, col_widths: &[f32], row: &[String], header: bool, stripe: bool) {
        let (x0, y, row_h) = (self.margin, self.y, self.row_h);
        let size = if header {
            self.header_font_size
        } else {
            self.font_size
        };
        let total_w: f32 = col_widths.iter().sum();

        let Some(content) = self.content.as_mut() else {
            return;
        };

        if header || stripe {
            content.save_state();
            if header {
                content.set_fill_rgb(0.85, 0.87, 0.90);
            } else {
                content.set_fill_rgb(0.96, 0.96, 0.96);
            }
            content.rect(x0, y, total_w, row_h);
            content.fill_nonzero();
            content.restore_state();
        }

        let mut x = x0;
        for (i, text) in row.iter().enumerate() {
            let w = col_widths.get(i).copied().unwrap_or(0.0);
            draw_text(content, header, x + 4.0, y + 5.0, size, &fit(text, w - 8.0, size));

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, w, row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Table spanning as many pages as needed; the header repeats on each page.
    pub fn write_table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        self.ensure_space(self.row_h * 2.0);
        self.y -= self.row_h;
        self.draw_row(&col_widths, &header_row, true, false);

        for (i, row) in rows.iter().enumerate() {
            if self.y - self.row_h < self.margin {
                self.new_page();
                self.y -= self.row_h;
                self.draw_row(&col_widths, &header_row, true, false);
            }
            self.y -= self.row_h;
            self.draw_row(&col_widths, row, false, i % 2 == 0);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        if self.content.is_none() && self.page_refs.is_empty() {
            self.new_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn draw_text(content: &mut Content, bold: bool, x: f32, y: f32, size: f32, text: &str) {
    let font = if bold { Name(b"F2") } else { Name(b"F1") };
    let encoded = win_ansi(text);
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&encoded));
    content.end_text();
}

/// Average Helvetica glyph width, good enough for column sizing.
fn approx_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.52
}

/// Truncate `text` so it fits into `width` points.
fn fit(text: &str, width: f32, size: f32) -> String {
    if approx_width(text, size) <= width {
        return text.to_string();
    }
    let max_chars = ((width / (size * 0.52)) as usize).saturating_sub(2);
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("..");
    out
}

/// Encode for the standard fonts: Latin-1 maps directly, euro sign is 0x80.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
