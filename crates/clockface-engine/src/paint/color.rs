/// Linear RGBA color with premultiplied alpha.
///
/// Hosts receive colors already premultiplied; `r`, `g` and `b` never exceed `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn black() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }

    #[inline]
    pub const fn white() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        }
    }

    /// Opaque color from 8-bit channels, e.g. `Color::rgb(0xFF, 0, 0)`.
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Color from 8-bit straight-alpha channels.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        let a = f32::from(a) / 255.0;
        let premul = |c: u8| f32::from(c) / 255.0 * a;
        Self {
            r: premul(r),
            g: premul(g),
            b: premul(b),
            a,
        }
    }

    /// Opaque gray with all three channels set to `v`.
    #[inline]
    pub fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_match_byte_constructors() {
        assert_eq!(Color::rgb(0, 0, 0), Color::black());
        assert_eq!(Color::gray(0xFF), Color::white());
    }

    #[test]
    fn translucent_bytes_are_premultiplied() {
        let c = Color::rgba(0xFF, 0, 0, 51);
        assert_eq!(c.a, 0.2);
        assert_eq!(c.r, c.a);
    }

    #[test]
    fn gray_channels_are_equal() {
        let c = Color::gray(0x44);
        assert!(c.r == c.g && c.g == c.b);
        assert_eq!(c.a, 1.0);
    }
}
