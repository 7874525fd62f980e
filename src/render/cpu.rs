use vello_cpu::kurbo::Shape as _;

use crate::{
    assets::{fonts::FontFace, text::TextBrushRgba8},
    foundation::{
        core::{Canvas, Point, Rgba8},
        error::{GoalpaperError, GoalpaperResult},
    },
};

/// Flattening tolerance for circles, in raster pixels.
const PATH_TOLERANCE_PX: f64 = 0.1;

/// CPU raster drawn in canvas coordinates and backed by a (possibly supersampled) pixmap.
pub(crate) struct RasterCanvas {
    canvas: Canvas,
    width: u16,
    height: u16,
    quality: f64,
    ctx: vello_cpu::RenderContext,
    base: vello_cpu::kurbo::Affine,
}

impl RasterCanvas {
    /// Allocate a raster of `canvas * quality` pixels. Drawing calls keep using `canvas`
    /// coordinates.
    pub(crate) fn new(canvas: Canvas, quality: f64) -> GoalpaperResult<Self> {
        if !quality.is_finite() || quality < 1.0 {
            return Err(GoalpaperError::render("raster quality must be finite and >= 1"));
        }
        let width = raster_dim(canvas.width, quality, "width")?;
        let height = raster_dim(canvas.height, quality, "height")?;

        Ok(Self {
            canvas,
            width,
            height,
            quality,
            ctx: vello_cpu::RenderContext::new(width, height),
            base: vello_cpu::kurbo::Affine::scale(quality),
        })
    }

    #[cfg(test)]
    pub(crate) fn raster_size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    /// Cover every raster pixel with `color`.
    pub(crate) fn fill_background(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    pub(crate) fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.ctx.set_transform(self.base);
        self.ctx.set_paint(paint(color));
        let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius);
        self.ctx
            .fill_path(&circle.to_path(PATH_TOLERANCE_PX / self.quality));
    }

    /// Draw a shaped single-line layout centered (both axes) on `anchor`.
    pub(crate) fn draw_text_centered(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        font: &vello_cpu::peniko::FontData,
        anchor: Point,
    ) {
        let origin = vello_cpu::kurbo::Vec2::new(
            anchor.x - f64::from(layout.width()) / 2.0,
            anchor.y - f64::from(layout.height()) / 2.0,
        );
        self.ctx
            .set_transform(self.base * vello_cpu::kurbo::Affine::translate(origin));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                // Pen positions: advance and baseline are already applied.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize and return straight-alpha pixels at the canvas size, downsampling when the
    /// raster was supersampled.
    pub(crate) fn finish(mut self) -> GoalpaperResult<image::RgbaImage> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let data = unpremultiply(pixmap.data_as_u8_slice());
        let raster = image::RgbaImage::from_raw(u32::from(self.width), u32::from(self.height), data)
            .ok_or_else(|| GoalpaperError::render("raster byte length mismatch"))?;

        if raster.dimensions() == (self.canvas.width, self.canvas.height) {
            return Ok(raster);
        }
        Ok(image::imageops::resize(
            &raster,
            self.canvas.width,
            self.canvas.height,
            image::imageops::FilterType::Lanczos3,
        ))
    }
}

/// Font handle for glyph rendering, built from the same bytes Parley shaped with.
pub(crate) fn font_data(face: &FontFace) -> vello_cpu::peniko::FontData {
    vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::new(face.bytes.clone()),
        face.index,
    )
}

fn raster_dim(px: u32, quality: f64, what: &str) -> GoalpaperResult<u16> {
    let scaled = (f64::from(px) * quality).round();
    if scaled < 1.0 || scaled > f64::from(u16::MAX) {
        return Err(GoalpaperError::render(format!(
            "raster {what} {scaled} is outside 1..={}",
            u16::MAX
        )));
    }
    Ok(scaled as u16)
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn unpremultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(premul.len());
    for px in premul.chunks_exact(4) {
        let a = px[3];
        match a {
            0 => out.extend_from_slice(&[0, 0, 0, 0]),
            255 => out.extend_from_slice(px),
            _ => {
                let un = |c: u8| -> u8 {
                    ((u16::from(c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8
                };
                out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), a]);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
