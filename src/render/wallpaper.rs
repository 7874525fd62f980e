use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    assets::{
        fonts::FontBook,
        text::{TextLayoutEngine, TextLine},
    },
    config::WallpaperConfig,
    foundation::{
        core::{Point, Rgba8},
        error::GoalpaperResult,
    },
    layout::grid::GridLayout,
    progress::{DotState, Progress, TodayPolicy},
    render::{
        cpu::{RasterCanvas, font_data},
        png::encode_png,
    },
};

/// Separator between the "days left" and percent parts of the stats line.
pub const STATS_SEPARATOR: &str = "  ·  ";

/// One grid dot, ready to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub index: u32,
    pub center: Point,
    pub state: DotState,
}

/// Everything about a wallpaper that can be decided without touching pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct WallpaperPlan {
    pub today: NaiveDate,
    pub progress: Progress,
    pub layout: GridLayout,
}

impl WallpaperPlan {
    pub fn new(config: &WallpaperConfig, today: NaiveDate) -> Self {
        let progress = Progress::compute(config.start, config.end, today);
        let layout = GridLayout::compute(config, &progress);
        Self {
            today,
            progress,
            layout,
        }
    }

    /// Dots in day order.
    pub fn dots(&self) -> impl Iterator<Item = Dot> + '_ {
        (0..self.progress.dot_count()).map(move |index| self.dot(index))
    }

    /// Dots on rows that can reach the canvas, in day order.
    pub fn visible_dots(&self) -> impl Iterator<Item = Dot> + '_ {
        let rows = self.layout.visible_rows();
        let count = self.progress.dot_count();
        let start = rows.start.saturating_mul(self.layout.columns).min(count);
        let end = rows.end.saturating_mul(self.layout.columns).min(count);
        (start..end).map(move |index| self.dot(index))
    }

    fn dot(&self, index: u32) -> Dot {
        Dot {
            index,
            center: self.layout.dot_center(index),
            state: self.progress.dot_state(index),
        }
    }

    /// `"<remaining>d left  ·  <percent>%"` with the days part in the accent color.
    pub fn stats_line(&self, muted: Rgba8, accent: Rgba8) -> TextLine {
        TextLine::new()
            .span(format!("{}d left", self.progress.days_remaining), accent)
            .span(
                format!("{STATS_SEPARATOR}{}%", self.progress.percent),
                muted,
            )
    }
}

/// Stateless wallpaper renderer; safe to share across threads.
#[derive(Clone, Debug)]
pub struct WallpaperRenderer {
    fonts: Arc<FontBook>,
    today: TodayPolicy,
}

impl WallpaperRenderer {
    pub fn new(fonts: Arc<FontBook>, today: TodayPolicy) -> Self {
        Self { fonts, today }
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn today_policy(&self) -> TodayPolicy {
        self.today
    }

    /// Today's date under this renderer's policy.
    pub fn today(&self) -> NaiveDate {
        self.today.today()
    }

    /// Render `config` as of the current day and encode it as PNG.
    pub fn render(&self, config: &WallpaperConfig) -> GoalpaperResult<Vec<u8>> {
        self.render_at(config, self.today())
    }

    /// Render `config` as of `today` and encode it as PNG.
    pub fn render_at(&self, config: &WallpaperConfig, today: NaiveDate) -> GoalpaperResult<Vec<u8>> {
        let img = self.render_image_at(config, today)?;
        encode_png(&img)
    }

    /// Render `config` as of `today` into straight-alpha RGBA8 pixels.
    #[tracing::instrument(
        skip(self, config),
        fields(
            width = config.canvas.width,
            height = config.canvas.height,
            theme = %config.theme,
            scale = config.scale,
        )
    )]
    pub fn render_image_at(
        &self,
        config: &WallpaperConfig,
        today: NaiveDate,
    ) -> GoalpaperResult<image::RgbaImage> {
        config.validate()?;

        let plan = WallpaperPlan::new(config, today);
        let palette = config.palette();
        let accent = config.accent_color();
        tracing::debug!(
            total_days = plan.progress.total_days,
            days_passed = plan.progress.days_passed,
            days_remaining = plan.progress.days_remaining,
            percent = plan.progress.percent,
            rows = plan.layout.rows,
            visible_rows = ?plan.layout.visible_rows(),
            gap = plan.layout.gap,
            "wallpaper plan"
        );

        let mut raster = RasterCanvas::new(config.canvas, config.quality_scale())?;
        raster.fill_background(palette.bg);

        let mut text = TextPainter::new(&self.fonts);

        text.draw(
            &mut raster,
            &TextLine::plain(config.goal.as_str(), palette.text),
            plan.layout.title_size,
            plan.layout.title_anchor,
        )?;

        for dot in plan.visible_dots() {
            let color = match dot.state {
                DotState::Completed => palette.cell_filled,
                DotState::Today => accent,
                DotState::Remaining => palette.cell_empty,
            };
            raster.fill_circle(dot.center, plan.layout.dot_radius, color);
        }

        text.draw(
            &mut raster,
            &plan.stats_line(palette.text_muted, accent),
            plan.layout.stats_size,
            plan.layout.stats_anchor,
        )?;

        raster.finish()
    }
}

/// Per-render text state; absent when no font face is usable.
struct TextPainter {
    kit: Option<(TextLayoutEngine, vello_cpu::peniko::FontData)>,
}

impl TextPainter {
    fn new(fonts: &FontBook) -> Self {
        let kit = fonts
            .face()
            .and_then(|face| match TextLayoutEngine::new(face) {
                Ok(engine) => Some((engine, font_data(face))),
                Err(e) => {
                    tracing::warn!(family = %face.family, error = %e, "font rejected; drawing without text");
                    None
                }
            });
        Self { kit }
    }

    fn draw(
        &mut self,
        raster: &mut RasterCanvas,
        line: &TextLine,
        size_px: f64,
        anchor: Point,
    ) -> GoalpaperResult<()> {
        let Some((engine, font)) = self.kit.as_mut() else {
            return Ok(());
        };
        let size = size_px as f32;
        if line.is_empty() || !size.is_finite() || size <= 0.0 {
            tracing::debug!(size_px, "skipping text line");
            return Ok(());
        }

        let layout = engine.layout_line(line, size)?;
        raster.draw_text_centered(&layout, font, anchor);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/wallpaper.rs"]
mod tests;
