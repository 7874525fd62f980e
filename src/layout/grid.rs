use std::ops::Range;

use crate::{config::WallpaperConfig, foundation::core::Point, progress::Progress};

/// Dots per grid row.
pub const GRID_COLUMNS: u32 = 30;
/// Share of the canvas width covered by the grid at scale 1.0.
pub const GRID_WIDTH_FRACTION: f64 = 0.25;
/// Dot radius as a fraction of the gap.
pub const DOT_RADIUS_FRACTION: f64 = 0.40;
/// Title size as a fraction of the safe-zone height.
pub const TITLE_SIZE_FRACTION: f64 = 0.04;
/// Stats line size as a fraction of the safe-zone height.
pub const STATS_SIZE_FRACTION: f64 = 0.03;
/// Distance, in gaps, from the outer dot rows to the title and stats baselines.
pub const TEXT_OFFSET_GAPS: f64 = 2.5;

/// Geometry of one wallpaper, in output-pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Top of the safe zone.
    pub safe_top: f64,
    /// Height of the safe zone; negative when the paddings exceed the canvas.
    pub safe_height: f64,
    /// Vertical center of the safe zone.
    pub safe_center_y: f64,
    pub columns: u32,
    pub rows: u32,
    /// Center-to-center dot spacing.
    pub gap: f64,
    pub dot_radius: f64,
    /// X of the first column's dot centers.
    pub grid_left: f64,
    /// Y of the first row's dot centers.
    pub grid_top: f64,
    /// Center of the title line.
    pub title_anchor: Point,
    pub title_size: f64,
    /// Center of the stats line.
    pub stats_anchor: Point,
    pub stats_size: f64,
}

impl GridLayout {
    pub fn compute(config: &WallpaperConfig, progress: &Progress) -> Self {
        let width = config.canvas.width_f64();
        let height = config.canvas.height_f64();
        let scale = config.scale;

        let safe_top = f64::from(config.top_padding);
        let safe_height = height - safe_top - f64::from(config.bottom_padding);
        let safe_center_y = safe_top + safe_height / 2.0;

        let columns = GRID_COLUMNS;
        let rows = progress.dot_count().div_ceil(columns);

        let gap = width * GRID_WIDTH_FRACTION * scale / f64::from(columns);
        let dot_radius = gap * DOT_RADIUS_FRACTION;

        let grid_width = f64::from(columns) * gap;
        let grid_height = f64::from(rows) * gap;
        let grid_left = (width - grid_width) / 2.0 + gap / 2.0;
        let grid_top = safe_center_y - grid_height / 2.0 + gap / 2.0;

        let title_anchor = Point::new(width / 2.0, grid_top - gap * TEXT_OFFSET_GAPS);
        // Last row's centers sit at grid_top + grid_height - gap.
        let stats_anchor = Point::new(
            width / 2.0,
            grid_top + grid_height - gap + gap * TEXT_OFFSET_GAPS,
        );

        Self {
            width,
            height,
            safe_top,
            safe_height,
            safe_center_y,
            columns,
            rows,
            gap,
            dot_radius,
            grid_left,
            grid_top,
            title_anchor,
            title_size: safe_height * TITLE_SIZE_FRACTION * scale,
            stats_anchor,
            stats_size: safe_height * STATS_SIZE_FRACTION * scale,
        }
    }

    /// `(column, row)` of dot `index`.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index % self.columns, index / self.columns)
    }

    /// Rows with at least one dot overlapping the canvas vertically.
    pub fn visible_rows(&self) -> Range<u32> {
        if self.rows == 0 || self.gap <= 0.0 {
            return 0..0;
        }
        let first = ((-self.dot_radius - self.grid_top) / self.gap).ceil().max(0.0);
        let last = ((self.height + self.dot_radius - self.grid_top) / self.gap).floor();
        if last < first {
            return 0..0;
        }
        // Saturating float-to-int casts; both ends are clamped to `rows`.
        let rows = f64::from(self.rows);
        (first.min(rows) as u32)..((last + 1.0).min(rows) as u32)
    }

    pub fn dot_center(&self, index: u32) -> Point {
        let (col, row) = self.cell(index);
        Point::new(
            self.grid_left + f64::from(col) * self.gap,
            self.grid_top + f64::from(row) * self.gap,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
