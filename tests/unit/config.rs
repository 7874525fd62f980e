use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn params(pairs: &[(&str, &str)]) -> WallpaperParams {
    let mut p = WallpaperParams::default();
    for (k, v) in pairs {
        let v = Some((*v).to_string());
        match *k {
            "goal" => p.goal = v,
            "start_date" => p.start_date = v,
            "goal_date" => p.goal_date = v,
            "width" => p.width = v,
            "height" => p.height = v,
            "theme" => p.theme = v,
            "accent" => p.accent = v,
            "top_padding" => p.top_padding = v,
            "bottom_padding" => p.bottom_padding = v,
            "scale" => p.scale = v,
            other => panic!("unknown param {other}"),
        }
    }
    p
}

#[test]
fn defaults_fill_every_field() {
    let today = d(2025, 1, 15);
    let cfg = WallpaperParams::default().resolve(today).unwrap();

    assert_eq!(cfg.goal, "My Goal");
    assert_eq!(cfg.start, today);
    assert_eq!(cfg.end, d(2025, 4, 15));
    assert_eq!(cfg.canvas, Canvas { width: 3024, height: 1964 });
    assert_eq!(cfg.theme, ThemeName::Dark);
    assert_eq!(cfg.accent, None);
    assert_eq!(cfg.top_padding, 500);
    assert_eq!(cfg.bottom_padding, 400);
    assert_eq!(cfg.scale, 1.0);
}

#[test]
fn default_goal_date_clamps_to_month_end() {
    assert_eq!(default_goal_date(d(2025, 11, 30)).unwrap(), d(2026, 2, 28));
}

#[test]
fn empty_values_count_as_absent() {
    let cfg = params(&[("goal", ""), ("width", " "), ("accent", "")])
        .resolve(d(2025, 1, 1))
        .unwrap();
    assert_eq!(cfg.goal, "My Goal");
    assert_eq!(cfg.canvas.width, 3024);
    assert_eq!(cfg.accent, None);
}

#[test]
fn dimensions_are_clamped() {
    let cfg = params(&[("width", "99999"), ("height", "-4")])
        .resolve(d(2025, 1, 1))
        .unwrap();
    assert_eq!(cfg.canvas, Canvas { width: 5120, height: 100 });

    let cfg = params(&[("width", "10"), ("height", "99999")])
        .resolve(d(2025, 1, 1))
        .unwrap();
    assert_eq!(cfg.canvas, Canvas { width: 100, height: 3840 });
}

#[test]
fn zero_numbers_fall_back_to_defaults() {
    let cfg = params(&[
        ("width", "0"),
        ("height", "0"),
        ("top_padding", "0"),
        ("bottom_padding", "0"),
        ("scale", "0"),
    ])
    .resolve(d(2025, 1, 1))
    .unwrap();
    assert_eq!(cfg.canvas, Canvas { width: 3024, height: 1964 });
    assert_eq!(cfg.top_padding, 500);
    assert_eq!(cfg.bottom_padding, 400);
    assert_eq!(cfg.scale, 1.0);

    let cfg = params(&[("scale", "0.0"), ("top_padding", " 0 ")])
        .resolve(d(2025, 1, 1))
        .unwrap();
    assert_eq!(cfg.scale, 1.0);
    assert_eq!(cfg.top_padding, 500);
}

#[test]
fn non_numeric_dimensions_fail() {
    let err = params(&[("width", "wide")]).resolve(d(2025, 1, 1)).unwrap_err();
    assert!(err.to_string().contains("width"));

    assert!(params(&[("top_padding", "-1")]).resolve(d(2025, 1, 1)).is_err());
    assert!(params(&[("scale", "big")]).resolve(d(2025, 1, 1)).is_err());
    assert!(params(&[("scale", "-1")]).resolve(d(2025, 1, 1)).is_err());
    assert!(params(&[("scale", "NaN")]).resolve(d(2025, 1, 1)).is_err());
}

#[test]
fn malformed_dates_fail() {
    let err = params(&[("start_date", "2025-13-40")])
        .resolve(d(2025, 1, 1))
        .unwrap_err();
    assert!(err.to_string().contains("start_date"));
    assert!(params(&[("goal_date", "soon")]).resolve(d(2025, 1, 1)).is_err());
}

#[test]
fn rfc3339_dates_use_their_date_part() {
    let cfg = params(&[("goal_date", "2025-06-01T10:00:00Z")])
        .resolve(d(2025, 1, 1))
        .unwrap();
    assert_eq!(cfg.end, d(2025, 6, 1));
}

#[test]
fn accent_and_theme_parse() {
    let cfg = params(&[("accent", "22c55e"), ("theme", "forest")])
        .resolve(d(2025, 1, 1))
        .unwrap();
    assert_eq!(cfg.theme, ThemeName::Forest);
    assert_eq!(cfg.accent_color(), Rgba8::rgb(0x22, 0xc5, 0x5e));

    let cfg = params(&[("theme", "nope")]).resolve(d(2025, 1, 1)).unwrap();
    assert_eq!(cfg.theme, ThemeName::Dark);
    assert_eq!(cfg.accent_color(), ThemeName::Dark.palette().today);

    assert!(params(&[("accent", "orange")]).resolve(d(2025, 1, 1)).is_err());
}

#[test]
fn scale_is_bounded_and_drives_quality() {
    let cfg = params(&[("scale", "50")]).resolve(d(2025, 1, 1)).unwrap();
    assert_eq!(cfg.scale, 50.0);
    assert_eq!(cfg.quality_scale(), MAX_QUALITY_SCALE);

    let cfg = params(&[("scale", "1e9")]).resolve(d(2025, 1, 1)).unwrap();
    assert_eq!(cfg.scale, MAX_SCALE);

    let cfg = params(&[("scale", "0.01")]).resolve(d(2025, 1, 1)).unwrap();
    assert_eq!(cfg.scale, 0.01);

    let cfg = params(&[("scale", "0.5")]).resolve(d(2025, 1, 1)).unwrap();
    assert_eq!(cfg.scale, 0.5);
    assert_eq!(cfg.quality_scale(), 1.0);

    let cfg = params(&[("scale", "1.5")]).resolve(d(2025, 1, 1)).unwrap();
    assert_eq!(cfg.quality_scale(), 1.5);
}

#[test]
fn validate_rejects_bad_hand_built_configs() {
    let mut cfg = WallpaperConfig::new("x", d(2025, 1, 1), d(2025, 2, 1));
    assert!(cfg.validate().is_ok());

    cfg.scale = f64::INFINITY;
    assert!(cfg.validate().is_err());

    cfg.scale = MAX_SCALE * 2.0;
    assert!(cfg.validate().is_err());

    cfg.scale = 1.0;
    cfg.canvas.width = 0;
    assert!(cfg.validate().is_err());
}
