//! Render configuration and its construction from loosely typed request parameters.

use chrono::{DateTime, Months, NaiveDate};

use crate::{
    foundation::{
        core::{Canvas, Rgba8},
        error::{GoalpaperError, GoalpaperResult},
    },
    theme::{Theme, ThemeName},
};

pub const DEFAULT_GOAL: &str = "My Goal";
pub const DEFAULT_WIDTH: u32 = 3024;
pub const DEFAULT_HEIGHT: u32 = 1964;
pub const DEFAULT_TOP_PADDING: u32 = 500;
pub const DEFAULT_BOTTOM_PADDING: u32 = 400;
pub const DEFAULT_SCALE: f64 = 1.0;
/// Months added to today when no goal date is given.
pub const DEFAULT_GOAL_MONTHS: u32 = 3;

pub const MIN_WIDTH: u32 = 100;
pub const MAX_WIDTH: u32 = 5120;
pub const MIN_HEIGHT: u32 = 100;
pub const MAX_HEIGHT: u32 = 3840;
/// Largest accepted scale. Dot outlines and glyphs grow with it, so an unbounded value turns a
/// single render into an unbounded amount of path flattening.
pub const MAX_SCALE: f64 = 100.0;
/// Upper bound on raster supersampling; keeps a 5120x3840 render under ~320 MB of pixels.
pub const MAX_QUALITY_SCALE: f64 = 2.0;

/// Immutable input to a single render.
#[derive(Clone, Debug, PartialEq)]
pub struct WallpaperConfig {
    /// Title drawn above the grid.
    pub goal: String,
    /// First day of the range.
    pub start: NaiveDate,
    /// Target day (exclusive end of the dot range).
    pub end: NaiveDate,
    /// Output size in pixels.
    pub canvas: Canvas,
    pub theme: ThemeName,
    /// Overrides the theme's "today" color for the current-day dot and the stats highlight.
    pub accent: Option<Rgba8>,
    /// Pixels reserved at the top for lock-screen overlays.
    pub top_padding: u32,
    /// Pixels reserved at the bottom for lock-screen overlays.
    pub bottom_padding: u32,
    /// Grid and font size multiplier; also drives supersampling when > 1.
    pub scale: f64,
}

impl WallpaperConfig {
    /// Config with default presentation for the given range.
    pub fn new(goal: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            goal: goal.into(),
            start,
            end,
            canvas: Canvas {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            },
            theme: ThemeName::Dark,
            accent: None,
            top_padding: DEFAULT_TOP_PADDING,
            bottom_padding: DEFAULT_BOTTOM_PADDING,
            scale: DEFAULT_SCALE,
        }
    }

    pub fn validate(&self) -> GoalpaperResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > MAX_SCALE {
            return Err(GoalpaperError::validation(format!(
                "scale must be finite and in (0, {MAX_SCALE}]"
            )));
        }
        Ok(())
    }

    pub fn palette(&self) -> &'static Theme {
        self.theme.palette()
    }

    /// Color for today's dot and the stats highlight.
    pub fn accent_color(&self) -> Rgba8 {
        self.accent.unwrap_or(self.palette().today)
    }

    /// Raster supersampling factor: `scale` clamped to `[1, MAX_QUALITY_SCALE]`.
    pub fn quality_scale(&self) -> f64 {
        if self.scale.is_finite() {
            self.scale.clamp(1.0, MAX_QUALITY_SCALE)
        } else {
            1.0
        }
    }
}

/// Raw, untyped render parameters as they arrive from a query string or the command line.
///
/// Empty strings count as absent, and so does a numeric field that parses to zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct WallpaperParams {
    pub goal: Option<String>,
    pub start_date: Option<String>,
    pub goal_date: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub theme: Option<String>,
    /// Hex color without the leading `#` (a leading `#` is tolerated).
    pub accent: Option<String>,
    pub top_padding: Option<String>,
    pub bottom_padding: Option<String>,
    pub scale: Option<String>,
}

impl WallpaperParams {
    /// Apply defaults and bounds, producing a validated config.
    ///
    /// `today` supplies the default start date and the base for the default goal date.
    pub fn resolve(&self, today: NaiveDate) -> GoalpaperResult<WallpaperConfig> {
        let goal = present(&self.goal).unwrap_or(DEFAULT_GOAL).to_string();

        let start = match present(&self.start_date) {
            Some(s) => parse_date("start_date", s)?,
            None => today,
        };
        let end = match present(&self.goal_date) {
            Some(s) => parse_date("goal_date", s)?,
            None => default_goal_date(today)?,
        };

        let width = parse_int("width", &self.width, i64::from(DEFAULT_WIDTH))?;
        let height = parse_int("height", &self.height, i64::from(DEFAULT_HEIGHT))?;
        let canvas = Canvas::new(
            clamp_dim(width, MIN_WIDTH, MAX_WIDTH),
            clamp_dim(height, MIN_HEIGHT, MAX_HEIGHT),
        )?;

        let theme = present(&self.theme)
            .map(ThemeName::from_name_or_default)
            .unwrap_or_default();
        let accent = present(&self.accent)
            .map(|s| {
                Rgba8::from_hex(s).map_err(|e| match e {
                    GoalpaperError::Validation(msg) => {
                        GoalpaperError::validation(format!("accent: {msg}"))
                    }
                    other => other,
                })
            })
            .transpose()?;

        let top_padding = parse_padding("top_padding", &self.top_padding, DEFAULT_TOP_PADDING)?;
        let bottom_padding =
            parse_padding("bottom_padding", &self.bottom_padding, DEFAULT_BOTTOM_PADDING)?;

        let scale = match present(&self.scale) {
            Some(s) => {
                let v: f64 = s.trim().parse().map_err(|_| {
                    GoalpaperError::validation(format!("scale: \"{s}\" is not a number"))
                })?;
                if !v.is_finite() || v < 0.0 {
                    return Err(GoalpaperError::validation(format!(
                        "scale: {v} must be finite and >= 0"
                    )));
                }
                if v == 0.0 { DEFAULT_SCALE } else { v.min(MAX_SCALE) }
            }
            None => DEFAULT_SCALE,
        };

        let config = WallpaperConfig {
            goal,
            start,
            end,
            canvas,
            theme,
            accent,
            top_padding,
            bottom_padding,
            scale,
        };
        config.validate()?;
        Ok(config)
    }
}

/// `today` plus [`DEFAULT_GOAL_MONTHS`], clamped to the end of the target month.
pub fn default_goal_date(today: NaiveDate) -> GoalpaperResult<NaiveDate> {
    today
        .checked_add_months(Months::new(DEFAULT_GOAL_MONTHS))
        .ok_or_else(|| GoalpaperError::validation("default goal date is out of range"))
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (date part is used).
fn parse_date(field: &str, s: &str) -> GoalpaperResult<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| {
            GoalpaperError::validation(format!(
                "{field}: \"{s}\" is not a valid date (expected YYYY-MM-DD)"
            ))
        })
}

/// Zero falls back to `default`, like an absent value.
fn parse_int(field: &str, v: &Option<String>, default: i64) -> GoalpaperResult<i64> {
    match present(v) {
        Some(s) => match s.trim().parse::<i64>() {
            Ok(0) => Ok(default),
            Ok(n) => Ok(n),
            Err(_) => Err(GoalpaperError::validation(format!(
                "{field}: \"{s}\" is not an integer"
            ))),
        },
        None => Ok(default),
    }
}

fn parse_padding(field: &str, v: &Option<String>, default: u32) -> GoalpaperResult<u32> {
    let n = parse_int(field, v, i64::from(default))?;
    u32::try_from(n).map_err(|_| {
        GoalpaperError::validation(format!("{field}: {n} must be a non-negative pixel count"))
    })
}

fn clamp_dim(v: i64, lo: u32, hi: u32) -> u32 {
    // Bounds fit in u32, so the cast after clamping is lossless.
    v.clamp(i64::from(lo), i64::from(hi)) as u32
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
