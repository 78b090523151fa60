use iced::theme::Palette;
use iced::{Color, Theme};

/// Resolved page colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SitePalette {
    pub(crate) accent: Color,
    pub(crate) accent_hover: Color,
    pub(crate) white: Color,
    pub(crate) black: Color,
    pub(crate) gray_50: Color,
    pub(crate) gray_100: Color,
    pub(crate) gray_200: Color,
    pub(crate) gray_300: Color,
    pub(crate) gray_400: Color,
    pub(crate) gray_600: Color,
    pub(crate) gray_700: Color,
    pub(crate) gray_800: Color,
    pub(crate) gray_900: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) shadow: Color,
}

impl Default for SitePalette {
    fn default() -> Self {
        Self {
            accent: Color::from_rgb8(0xFF, 0x00, 0x00),
            accent_hover: Color::from_rgb8(0xE6, 0x00, 0x00),
            white: Color::WHITE,
            black: Color::BLACK,
            gray_50: Color::from_rgb8(0xF9, 0xFA, 0xFB),
            gray_100: Color::from_rgb8(0xF3, 0xF4, 0xF6),
            gray_200: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            gray_300: Color::from_rgb8(0xD1, 0xD5, 0xDB),
            gray_400: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            gray_600: Color::from_rgb8(0x4B, 0x55, 0x63),
            gray_700: Color::from_rgb8(0x37, 0x41, 0x51),
            gray_800: Color::from_rgb8(0x1F, 0x29, 0x37),
            gray_900: Color::from_rgb8(0x11, 0x18, 0x27),
            success: Color::from_rgb8(0x16, 0xA3, 0x4A),
            danger: Color::from_rgb8(0xDC, 0x26, 0x26),
            shadow: Color::from_rgba8(0x00, 0x00, 0x00, 0.12),
        }
    }
}

/// Page theme shared by every view.
#[derive(Debug, Clone)]
pub(crate) struct SiteTheme {
    name: String,
    palette: SitePalette,
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self {
            name: String::from("Mustafa Canvas"),
            palette: SitePalette::default(),
        }
    }
}

impl SiteTheme {
    pub(crate) fn palette(&self) -> &SitePalette {
        &self.palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(self)
    }
}

impl From<&SiteTheme> for Theme {
    fn from(value: &SiteTheme) -> Self {
        let palette = &value.palette;
        let palette = Palette {
            background: palette.white,
            text: palette.gray_800,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.accent_hover,
        };

        Theme::custom(value.name.clone(), palette)
    }
}

/// Theme props passed through App -> Widget view -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a SiteTheme,
    /// Entrance/reveal opacity applied to every color drawn by the view.
    pub(crate) opacity: f32,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a SiteTheme) -> Self {
        Self {
            theme,
            opacity: 1.0,
        }
    }

    /// Same theme with the given opacity multiplier.
    pub(crate) fn with_opacity(self, opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    pub(crate) fn palette(&self) -> &'a SitePalette {
        self.theme.palette()
    }

    /// `color` with the current opacity applied.
    pub(crate) fn fade(&self, color: Color) -> Color {
        fade(color, self.opacity)
    }
}

/// Scale the alpha channel of `color` by `opacity`.
pub(crate) fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{SiteTheme, ThemeProps, fade};

    #[test]
    fn given_opacity_when_fading_then_only_alpha_scales() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.5);
        let faded = fade(color, 0.5);

        assert_eq!(faded.r, color.r);
        assert_eq!(faded.g, color.g);
        assert_eq!(faded.b, color.b);
        assert_eq!(faded.a, 0.25);
    }

    #[test]
    fn given_out_of_range_opacity_when_applied_then_clamps() {
        let theme = SiteTheme::default();
        let props = ThemeProps::new(&theme).with_opacity(3.0);
        assert_eq!(props.opacity, 1.0);

        let props = props.with_opacity(-1.0);
        assert_eq!(props.fade(Color::BLACK).a, 0.0);
    }

    #[test]
    fn given_default_theme_when_converted_then_primary_is_accent() {
        let theme = SiteTheme::default();
        let iced_theme = theme.iced_theme();
        assert_eq!(iced_theme.palette().primary, theme.palette().accent);
    }
}
