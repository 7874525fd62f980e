use super::*;

#[test]
fn table_order_matches_enum_order() {
    for (i, (name, _)) in THEMES.iter().enumerate() {
        assert_eq!(*name as usize, i);
        assert_eq!(ThemeName::ALL[i], *name);
    }
}

#[test]
fn known_names_resolve() {
    for name in ThemeName::ALL {
        assert_eq!(ThemeName::from_name_or_default(name.as_str()), name);
    }
}

#[test]
fn unknown_name_falls_back_to_dark() {
    assert_eq!(ThemeName::from_name_or_default("neon"), ThemeName::Dark);
    assert_eq!(ThemeName::from_name_or_default(""), ThemeName::Dark);
    assert_eq!(ThemeName::from_name_or_default("Dark"), ThemeName::Dark);
}

#[test]
fn forest_has_green_today_color() {
    let forest = ThemeName::Forest.palette();
    assert_eq!(forest.today, Rgba8::from_u24(0x10b981));
    assert_eq!(ThemeName::Dark.palette().bg.to_string(), "#1a1a1a");
}
