use clockface_engine::paint::Color;

// Named grays.
const DARK_GRAY: u8 = 0x44;
const GRAY: u8 = 0x88;
const LIGHT_GRAY: u8 = 0xCC;

/// Colors for every element of the face under one theme.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FacePalette {
    pub bezel: Color,
    pub face: Color,
    pub minute_tick: Color,
    pub hour_tick: Color,
    pub numeral: Color,
    pub hand: Color,
    pub second_hand: Color,
    pub pivot_inner: Color,
    pub pivot_outer: Color,
    pub badge_background: Color,
    pub badge_text: Color,
}

impl FacePalette {
    pub fn day() -> Self {
        Self {
            face: Color::white(),
            hour_tick: Color::black(),
            numeral: Color::black(),
            hand: Color::black(),
            badge_background: Color::gray(LIGHT_GRAY),
            badge_text: Color::black(),
            ..Self::shared()
        }
    }

    pub fn night() -> Self {
        Self {
            face: Color::gray(DARK_GRAY),
            hour_tick: Color::white(),
            numeral: Color::white(),
            hand: Color::white(),
            badge_background: Color::black(),
            badge_text: Color::white(),
            ..Self::shared()
        }
    }

    #[inline]
    pub fn for_day(is_day: bool) -> Self {
        if is_day { Self::day() } else { Self::night() }
    }

    /// Colors that do not change between day and night.
    fn shared() -> Self {
        Self {
            bezel: Color::black(),
            face: Color::white(),
            minute_tick: Color::gray(GRAY),
            hour_tick: Color::black(),
            numeral: Color::black(),
            hand: Color::black(),
            second_hand: Color::rgb(0xFF, 0, 0),
            pivot_inner: Color::white(),
            pivot_outer: Color::gray(DARK_GRAY),
            badge_background: Color::gray(LIGHT_GRAY),
            badge_text: Color::black(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_swaps_face_and_ink() {
        let day = FacePalette::day();
        let night = FacePalette::night();
        assert_eq!(day.face, Color::white());
        assert_eq!(night.face, Color::gray(DARK_GRAY));
        assert_eq!(day.hand, Color::black());
        assert_eq!(night.hand, Color::white());
        assert_eq!(night.badge_background, Color::black());
    }

    #[test]
    fn bezel_and_second_hand_ignore_theme() {
        let (day, night) = (FacePalette::day(), FacePalette::night());
        assert_eq!(day.bezel, night.bezel);
        assert_eq!(day.second_hand, night.second_hand);
        assert_eq!(day.minute_tick, night.minute_tick);
        assert_eq!(FacePalette::for_day(false), night);
    }
}
