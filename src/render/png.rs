use std::io::Cursor;

use crate::foundation::error::{GoalpaperError, GoalpaperResult};

/// Encode straight-alpha RGBA8 pixels as PNG bytes.
pub fn encode_png(img: &image::RgbaImage) -> GoalpaperResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| GoalpaperError::encode(format!("png: {e}")))?;
    Ok(buf)
}
