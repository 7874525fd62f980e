use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use usvg::fontdb;

/// Family registered from the bundled font file.
pub const PREFERRED_FAMILY: &str = "Inter";
/// Font file looked up when no explicit path is configured.
pub const DEFAULT_FONT_PATH: &str = "assets/Inter-Medium.ttf";
/// Environment variable overriding [`DEFAULT_FONT_PATH`].
pub const FONT_PATH_ENV: &str = "GOALPAPER_FONT";

/// A single resolved font face.
#[derive(Clone)]
pub struct FontFace {
    /// Primary family name reported by the face.
    pub family: String,
    /// Raw font file bytes (shared, never mutated).
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside `bytes` (non-zero for collections).
    pub index: u32,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Process-wide, read-only font selection made once at startup.
///
/// Loading is best-effort: a missing custom font falls back to a system sans-serif face, and
/// with no usable face at all the book is empty and text is simply not drawn.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    face: Option<FontFace>,
}

impl FontBook {
    /// A book with no faces; renders skip all text.
    pub fn empty() -> Self {
        Self { face: None }
    }

    /// Wrap an already-loaded face.
    pub fn from_face(face: FontFace) -> Self {
        Self { face: Some(face) }
    }

    /// Register `custom` (if any) on top of the system fonts and pick the best sans-serif face.
    #[tracing::instrument]
    pub fn load(custom: Option<&Path>) -> Self {
        let mut db = fontdb::Database::new();

        if let Some(path) = custom {
            match db.load_font_file(path) {
                Ok(()) => tracing::debug!(path = %path.display(), "registered custom font"),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "custom font unavailable; falling back to system fonts"
                ),
            }
        }
        db.load_system_fonts();

        let face = select_face(&db);
        match &face {
            Some(f) => tracing::info!(family = %f.family, faces = db.len(), "font selected"),
            None => tracing::warn!("no usable font face found; text will not be drawn"),
        }
        Self { face }
    }

    /// [`FontBook::load`] using `path`, else `$GOALPAPER_FONT`, else [`DEFAULT_FONT_PATH`].
    pub fn load_default(path: Option<&Path>) -> Self {
        let resolved = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(FONT_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH));
        Self::load(Some(&resolved))
    }

    pub fn face(&self) -> Option<&FontFace> {
        self.face.as_ref()
    }
}

/// Sans-serif families tried in order after [`PREFERRED_FAMILY`].
pub const FALLBACK_FAMILIES: [&str; 6] = [
    "Arial",
    "Helvetica",
    "Helvetica Neue",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
];

fn select_face(db: &fontdb::Database) -> Option<FontFace> {
    let id = select_face_id(db)?;
    let info = db.face(id)?;
    let family = info
        .families
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_default();

    let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
    Some(FontFace {
        family,
        bytes: Arc::new(bytes),
        index,
    })
}

/// Named sans families first, then the generic sans-serif mapping, then the proportional
/// upright face closest to medium weight.
fn select_face_id(db: &fontdb::Database) -> Option<fontdb::ID> {
    let families: Vec<fontdb::Family<'_>> = std::iter::once(PREFERRED_FAMILY)
        .chain(FALLBACK_FAMILIES)
        .map(fontdb::Family::Name)
        .chain(std::iter::once(fontdb::Family::SansSerif))
        .collect();
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight::MEDIUM,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    if let Some(id) = db.query(&query) {
        return Some(id);
    }

    db.faces()
        .filter(|f| !f.monospaced && f.style == fontdb::Style::Normal)
        .min_by_key(|f| f.weight.0.abs_diff(fontdb::Weight::MEDIUM.0))
        .or_else(|| db.faces().find(|f| !f.monospaced))
        .or_else(|| db.faces().next())
        .map(|f| f.id)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
