//! Font loading and text metrics.
//!
//! [`FontManager`] is an explicit resource manager: the window owns one and
//! passes it by reference into the measure/render/theme paths. Fonts are
//! keyed by `(path, size)`, loaded lazily, and cached for the life of the
//! manager - never evicted.
//!
//! Metrics use a deterministic cell model: every text cell (as counted by
//! Unicode display width) advances by half the point size, and a line is the
//! point size plus a quarter of leading. Rendering backends that rasterize
//! real glyphs can live with slightly generous boxes; layout and tests get
//! exact, reproducible numbers.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Handle to a loaded font. Cheap to copy, stable for the manager's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(u32);

#[cfg(test)]
impl FontId {
    /// Fabricate a handle without a manager, for tests that only record it.
    pub(crate) fn test(raw: u32) -> Self {
        Self(raw)
    }
}

/// Why a font failed to load.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to open font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid font size: {0}")]
    InvalidSize(u16),
}

struct Font {
    path: PathBuf,
    size: u16,
}

/// Lazily-populated `(path, size)` keyed font cache with metric queries.
#[derive(Default)]
pub struct FontManager {
    fonts: Vec<Font>,
    cache: HashMap<(PathBuf, u16), FontId>,
}

impl FontManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a font, reusing the cached handle when the same `(path, size)`
    /// was requested before.
    pub fn load(&mut self, path: impl AsRef<Path>, size: u16) -> Result<FontId, FontError> {
        let path = path.as_ref();
        if size == 0 {
            return Err(FontError::InvalidSize(size));
        }
        if let Some(&id) = self.cache.get(&(path.to_path_buf(), size)) {
            return Ok(id);
        }

        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(FontError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(FontError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(FontError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        let id = FontId(self.fonts.len() as u32);
        self.fonts.push(Font {
            path: path.to_path_buf(),
            size,
        });
        self.cache.insert((path.to_path_buf(), size), id);
        Ok(id)
    }

    /// Number of distinct fonts loaded so far.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Path and size behind a handle, for diagnostics.
    pub fn describe(&self, font: FontId) -> Option<(&Path, u16)> {
        let font = self.fonts.get(font.0 as usize)?;
        Some((font.path.as_path(), font.size))
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Horizontal advance of one text cell.
    pub fn advance(&self, font: FontId) -> i32 {
        let size = self.size_of(font);
        ((size + 1) / 2).max(1) as i32
    }

    /// Height of one text line, including leading.
    pub fn line_height(&self, font: FontId) -> i32 {
        let size = self.size_of(font);
        (size + size / 4) as i32
    }

    /// Pixel size of a text block. Width is the widest line; height is the
    /// number of lines times the line height. Empty text is zero-sized.
    pub fn text_size(&self, font: FontId, text: &str) -> (i32, i32) {
        if text.is_empty() {
            return (0, 0);
        }
        let advance = self.advance(font);
        let mut width = 0i32;
        let mut lines = 0i32;
        for line in text.split('\n') {
            lines += 1;
            width = width.max(line.width() as i32 * advance);
        }
        (width, lines * self.line_height(font))
    }

    /// Width of a single line of text.
    pub fn text_width(&self, font: FontId, line: &str) -> i32 {
        line.width() as i32 * self.advance(font)
    }

    fn size_of(&self, font: FontId) -> u16 {
        self.fonts.get(font.0 as usize).map_or(0, |f| f.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fake_font(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("face.ttf");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"not a real font, just bytes").unwrap();
        path
    }

    #[test]
    fn test_load_caches_by_path_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_font(&dir);
        let mut fonts = FontManager::new();

        let a = fonts.load(&path, 16).unwrap();
        let b = fonts.load(&path, 16).unwrap();
        let c = fonts.load(&path, 24).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(fonts.len(), 2);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let mut fonts = FontManager::new();
        let err = fonts.load("/nonexistent/nowhere.ttf", 16).unwrap_err();
        assert!(matches!(err, FontError::NotFound { .. }));
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut fonts = FontManager::new();
        let err = fonts.load("whatever.ttf", 0).unwrap_err();
        assert!(matches!(err, FontError::InvalidSize(0)));
    }

    #[test]
    fn test_metrics_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_font(&dir);
        let mut fonts = FontManager::new();
        let font = fonts.load(&path, 16).unwrap();

        assert_eq!(fonts.advance(font), 8);
        assert_eq!(fonts.line_height(font), 20);
        assert_eq!(fonts.text_size(font, "abcd"), (32, 20));
        assert_eq!(fonts.text_size(font, "ab\ncdef"), (32, 40));
        assert_eq!(fonts.text_size(font, ""), (0, 0));
    }

    #[test]
    fn test_wide_chars_count_double() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_font(&dir);
        let mut fonts = FontManager::new();
        let font = fonts.load(&path, 16).unwrap();

        // CJK is two cells per character.
        assert_eq!(fonts.text_width(font, "你好"), 4 * 8);
        assert_eq!(fonts.text_width(font, "ab"), 2 * 8);
    }
}
