use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref};

use crate::error::Error;
use crate::layout::Overlay;
use crate::model::{PathSegment, Point, Rgb};
use crate::profile::GeometryProfile;
use crate::render::RenderSink;

/// Opacities are quantized to 1/1000 so equal values share one ExtGState.
fn quantize_opacity(opacity: f32) -> u16 {
    (opacity.clamp(0.0, 1.0) * 1000.0).round() as u16
}

fn ext_gstate_name(level: u16) -> String {
    format!("GSa{level}")
}

/// Paints the worksheet into a PDF document, one content stream per page.
pub struct PdfSink {
    page_width: f32,
    page_height: f32,
    pages: Vec<Content>,
    current: Content,
    opacity_levels: Vec<u16>,
}

impl PdfSink {
    pub fn new(profile: &GeometryProfile) -> Self {
        Self {
            page_width: profile.page_width,
            page_height: profile.page_height,
            pages: Vec::new(),
            current: Content::new(),
            opacity_levels: Vec::new(),
        }
    }

    fn flip(&self, p: Point) -> (f32, f32) {
        (p.x, self.page_height - p.y)
    }

    fn opacity_state(&mut self, opacity: f32) -> Option<String> {
        let level = quantize_opacity(opacity);
        if level >= 1000 {
            return None;
        }
        if !self.opacity_levels.contains(&level) {
            self.opacity_levels.push(level);
        }
        Some(ext_gstate_name(level))
    }
}

impl RenderSink for PdfSink {
    type Output = Vec<u8>;

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), Error> {
        let (r, g, b) = color.to_unit();
        let (x0, y0) = self.flip(from);
        let (x1, y1) = self.flip(to);
        self.current.set_stroke_rgb(r, g, b);
        self.current.move_to(x0, y0);
        self.current.line_to(x1, y1);
        self.current.stroke();
        Ok(())
    }

    fn draw_overlay(&mut self, overlay: &Overlay) -> Result<(), Error> {
        if overlay.strokes.is_empty() {
            return Ok(());
        }
        let gs = self.opacity_state(overlay.opacity);
        let (r, g, b) = overlay.color.to_unit();
        let page_height = self.page_height;
        let content = &mut self.current;

        content.save_state();
        if let Some(name) = &gs {
            content.set_parameters(Name(name.as_bytes()));
        }
        content.set_fill_rgb(r, g, b);
        // All strokes go into one path so overlaps are not double-blended.
        for stroke in &overlay.strokes {
            for seg in stroke {
                match *seg {
                    PathSegment::MoveTo(p) => content.move_to(p.x, page_height - p.y),
                    PathSegment::LineTo(p) => content.line_to(p.x, page_height - p.y),
                    PathSegment::CubicTo { ctrl1, ctrl2, to } => content.cubic_to(
                        ctrl1.x,
                        page_height - ctrl1.y,
                        ctrl2.x,
                        page_height - ctrl2.y,
                        to.x,
                        page_height - to.y,
                    ),
                    PathSegment::Close => content.close_path(),
                };
            }
        }
        content.fill_nonzero();
        content.restore_state();
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), Error> {
        self.pages
            .push(std::mem::replace(&mut self.current, Content::new()));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>, Error> {
        let t0 = std::time::Instant::now();
        self.pages
            .push(std::mem::replace(&mut self.current, Content::new()));

        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();

        let gstates: Vec<(String, Ref)> = self
            .opacity_levels
            .iter()
            .map(|&level| {
                let gs_ref = alloc();
                let alpha = level as f32 / 1000.0;
                pdf.ext_graphics(gs_ref)
                    .non_stroking_alpha(alpha)
                    .stroking_alpha(alpha);
                (ext_gstate_name(level), gs_ref)
            })
            .collect();

        let n = self.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        for (i, c) in self.pages.into_iter().enumerate() {
            let raw = c.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        for (page_id, content_id) in page_ids.iter().zip(&content_ids) {
            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height))
                .parent(pages_id)
                .contents(*content_id);
            if !gstates.is_empty() {
                let mut resources = page.resources();
                let mut states = resources.ext_g_states();
                for (name, gs_ref) in &gstates {
                    states.pair(Name(name.as_bytes()), *gs_ref);
                }
            }
        }

        log::info!(
            "PDF assembly: {} pages, {} opacity states, {:.1}ms",
            n,
            gstates.len(),
            t0.elapsed().as_secs_f64() * 1000.0,
        );

        Ok(pdf.finish())
    }
}
