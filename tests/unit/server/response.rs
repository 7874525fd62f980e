use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn filename_embeds_the_date() {
    assert_eq!(
        wallpaper_filename(d(2025, 3, 7)),
        "goal-wallpaper-2025-03-07.png"
    );
}

#[test]
fn png_response_sets_headers() {
    let resp = png_response(vec![1, 2, 3], d(2025, 3, 7));
    assert_eq!(resp.status(), StatusCode::OK);

    let h = resp.headers();
    assert_eq!(h[header::CONTENT_TYPE], "image/png");
    assert_eq!(h[header::CONTENT_LENGTH], "3");
    assert_eq!(h[header::CACHE_CONTROL], CACHE_CONTROL);
    assert_eq!(
        h[header::CONTENT_DISPOSITION],
        "inline; filename=\"goal-wallpaper-2025-03-07.png\""
    );
}

#[test]
fn failure_is_a_json_500() {
    let resp = render_failure("boom");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
}
