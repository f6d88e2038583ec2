use crate::core::filter::Stats;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Report palette (sRGB 0..1).
const BRAND: (f32, f32, f32) = (0.008, 0.518, 0.780); // #0284c7
const ZEBRA: (f32, f32, f32) = (0.941, 0.976, 1.0); // #f0f9ff
const WHITE: (f32, f32, f32) = (1.0, 1.0, 1.0);
const BODY: (f32, f32, f32) = (0.196, 0.196, 0.196);
const FOOTER: (f32, f32, f32) = (0.588, 0.588, 0.588);

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    band_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        // Base-14 fonts, WinAnsi so Spanish accents map correctly
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

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            band_h: 90.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 20.0,
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

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        rgb: (f32, f32, f32),
        text: &str,
    ) {
        let font = if bold { b"F2" } else { b"F1" };
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_winansi(text)));
        content.end_text();
        content.restore_state();
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
        bold: bool,
        rgb: (f32, f32, f32),
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 6.0, font_size, bold, rgb, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content length, scaled to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = (cell.len() as f32 * 6.2).max(widths[i]);
                widths[i] = w;
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

    fn draw_banner(&self, content: &mut Content, period_label: &str, location_label: &str) {
        self.fill_rect(
            content,
            0.0,
            self.page_h - self.band_h,
            self.page_w,
            self.band_h,
            BRAND,
        );

        self.draw_text(
            content,
            self.margin,
            self.page_h - 38.0,
            self.title_font_size,
            true,
            WHITE,
            "Reporte de Mantenciones",
        );
        self.draw_text(
            content,
            self.margin,
            self.page_h - 58.0,
            11.0,
            false,
            WHITE,
            &format!("Periodo: {period_label}"),
        );
        self.draw_text(
            content,
            self.margin,
            self.page_h - 72.0,
            11.0,
            false,
            WHITE,
            &format!("Ubicación: {location_label}"),
        );
    }

    fn draw_footer(&self, content: &mut Content, page: usize, total_pages: usize, generated: &str) {
        let text = format!("Página {page} de {total_pages} - Generado el {generated}");
        // roughly centered; Helvetica at 8pt averages ~4.5pt per glyph
        let x = (self.page_w - text.len() as f32 * 4.5) / 2.0;
        self.draw_text(content, x, self.margin - 30.0, 8.0, false, FOOTER, &text);
    }

    /// Rows that fit on a page whose table starts at `y_start` (header row
    /// included).
    fn rows_per_page(&self, y_start: f32) -> usize {
        (((y_start - self.margin) / self.row_h) as usize).saturating_sub(1)
    }

    fn table_start_y(&self, first_page: bool) -> f32 {
        if first_page {
            // leave room for the banner and the summary line
            self.page_h - self.band_h - 45.0
        } else {
            self.page_h - self.margin - 10.0
        }
    }

    /// Full paginated report: banner + summary on page one, repeated column
    /// header and numbered footer on every page.
    pub fn write_report(
        &mut self,
        period_label: &str,
        location_label: &str,
        stats: &Stats,
        headers: &[&str],
        rows: &[Vec<String>],
        generated: &str,
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let table_w: f32 = col_widths.iter().sum();

        // pagination is deterministic, so the page count is known up front
        let first_capacity = self.rows_per_page(self.table_start_y(true)).max(1);
        let rest_capacity = self.rows_per_page(self.table_start_y(false)).max(1);
        let total_pages = if rows.len() <= first_capacity {
            1
        } else {
            1 + (rows.len() - first_capacity).div_ceil(rest_capacity)
        };

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let first_page = page_idx == 1;
            let mut content = self.new_page();

            if first_page {
                self.draw_banner(&mut content, period_label, location_label);
                self.draw_text(
                    &mut content,
                    self.margin,
                    self.page_h - self.band_h - 20.0,
                    10.0,
                    false,
                    BODY,
                    &format!(
                        "Resumen General: Total: {} | Ascensores: {} | Escaleras: {}",
                        stats.total, stats.elevators, stats.escalators
                    ),
                );
            }

            let mut y = self.table_start_y(first_page);

            // column header row, brand background
            self.fill_rect(&mut content, self.margin, y, table_w, self.row_h, BRAND);
            self.draw_row(
                &mut content,
                y,
                &col_widths,
                &header_row,
                self.header_font_size,
                true,
                WHITE,
            );
            y -= self.row_h;

            let capacity = if first_page { first_capacity } else { rest_capacity };
            let take = remaining.len().min(capacity);

            for (i, row) in remaining[..take].iter().enumerate() {
                if i % 2 == 1 {
                    self.fill_rect(&mut content, self.margin, y, table_w, self.row_h, ZEBRA);
                }
                self.draw_row(&mut content, y, &col_widths, row, self.font_size, false, BODY);
                y -= self.row_h;
            }

            self.draw_footer(&mut content, page_idx, total_pages, generated);
            self.finalize_page(content);

            remaining = &remaining[take..];
            if remaining.is_empty() {
                break;
            }
            page_idx += 1;
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Base-14 fonts use single-byte encodings; Latin-1 covers the Spanish
/// glyphs, anything outside degrades to '?'.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 256 { code as u8 } else { b'?' }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winansi_keeps_spanish_accents() {
        let bytes = to_winansi("Ubicación");
        assert_eq!(bytes.len(), 9);
        assert_eq!(bytes[5], b'c');
        assert_eq!(bytes[7], 0xF3); // ó
    }

    #[test]
    fn glyphs_outside_latin1_degrade() {
        assert_eq!(to_winansi("🛗"), vec![b'?']);
    }
}
