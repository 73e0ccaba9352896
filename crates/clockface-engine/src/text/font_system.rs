use std::fmt;

use crate::coords::Vec2;

/// Line height used when no glyphs can be laid out, as a multiple of the font size.
const FALLBACK_LINE_HEIGHT: f32 = 1.2;

/// The bytes handed to [`FontSystem::load_font`] are not a usable font.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse font: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// The default handle refers to the first font loaded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct FontId(pub(crate) usize);

/// Fonts available for measuring labels.
///
/// Owned by the host scene and lent to widgets during measure and paint.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses a TrueType or OpenType font. The returned id is what text
    /// commands carry to the rasteriser.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Size of `text` set on one line: summed advances (with kerning) by the
    /// font's line height.
    ///
    /// An unknown `id` measures as zero width and one fallback line, so labels
    /// can still be centred before a font is loaded.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let Some(font) = self.fonts.get(id.0) else {
            return Vec2::new(0.0, size * FALLBACK_LINE_HEIGHT);
        };

        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            if let Some(left) = prev {
                width += font.horizontal_kern(left, ch, size).unwrap_or(0.0);
            }
            width += font.metrics(ch, size).advance_width;
            prev = Some(ch);
        }

        let height = font
            .horizontal_line_metrics(size)
            .map_or(size * FALLBACK_LINE_HEIGHT, |m| m.new_line_size);
        Vec2::new(width, height)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_measures_as_one_empty_line() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("12", FontId::default(), 20.0);
        assert_eq!(size, Vec2::new(0.0, 24.0));
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(&[0, 1, 2, 3]).unwrap_err();
        assert!(err.to_string().starts_with("cannot parse font: "));
    }
}
