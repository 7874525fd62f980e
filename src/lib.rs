//! goalpaper renders "goal countdown" wallpapers: a dot-grid calendar between a start date and a
//! target date, with a title and a progress line, encoded as PNG.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `WallpaperParams + today -> WallpaperConfig` (defaults, bounds, parsing)
//! 2. **Plan**: `WallpaperConfig + today -> WallpaperPlan` (progress metrics and grid geometry)
//! 3. **Render**: `WallpaperPlan -> RgbaImage` on a CPU raster (`vello_cpu`, text via `parley`)
//! 4. **Encode**: `RgbaImage -> PNG bytes`
//!
//! Every render is a pure function of its config and "today". Themes are constant tables and
//! the [`FontBook`] is loaded once and shared read-only, so concurrent renders need no locking.
//! The [`server`] module wraps the renderer in a single-route `axum` service.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod foundation;
mod layout;
mod progress;
mod render;
mod theme;

/// HTTP adapter.
pub mod server;

pub use assets::fonts::{
    DEFAULT_FONT_PATH, FALLBACK_FAMILIES, FONT_PATH_ENV, FontBook, FontFace, PREFERRED_FAMILY,
};
pub use assets::text::{TextBrushRgba8, TextLayoutEngine, TextLine, TextSpan};
pub use config::{
    DEFAULT_BOTTOM_PADDING, DEFAULT_GOAL, DEFAULT_GOAL_MONTHS, DEFAULT_HEIGHT, DEFAULT_SCALE,
    DEFAULT_TOP_PADDING, DEFAULT_WIDTH, MAX_HEIGHT, MAX_QUALITY_SCALE, MAX_SCALE, MAX_WIDTH,
    MIN_HEIGHT, MIN_WIDTH, WallpaperConfig, WallpaperParams, default_goal_date,
};
pub use foundation::core::{Canvas, Point, Rgba8, Vec2};
pub use foundation::error::{GoalpaperError, GoalpaperResult};
pub use layout::grid::{
    DOT_RADIUS_FRACTION, GRID_COLUMNS, GRID_WIDTH_FRACTION, GridLayout, STATS_SIZE_FRACTION,
    TEXT_OFFSET_GAPS, TITLE_SIZE_FRACTION,
};
pub use progress::{DEFAULT_UTC_OFFSET_MINUTES, DotState, Progress, TodayPolicy};
pub use render::png::encode_png;
pub use render::wallpaper::{Dot, STATS_SEPARATOR, WallpaperPlan, WallpaperRenderer};
pub use server::response::{CACHE_CONTROL, ErrorBody, RENDER_FAILURE, wallpaper_filename};
pub use theme::{Theme, ThemeName};
