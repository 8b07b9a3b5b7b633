use fltk::enums::Color;
#[cfg(target_os = "windows")]
use fltk::{prelude::*, window::Window};

pub const THEME_GLYPH_DARK: &str = "\u{1f319}"; // 🌙
pub const THEME_GLYPH_LIGHT: &str = "\u{2600}"; // ☀

/// Every color the page uses, resolved once per theme switch.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window_bg: Color,
    pub nav_bg: Color,
    pub hero_bg: Color,
    pub card_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub track: Color,
    pub input_bg: Color,
    pub input_text: Color,
    pub error: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            window_bg: Color::from_rgb(17, 21, 28),
            nav_bg: Color::from_rgb(24, 29, 38),
            hero_bg: Color::from_rgb(30, 38, 52),
            card_bg: Color::from_rgb(28, 34, 44),
            text: Color::from_rgb(226, 230, 237),
            muted: Color::from_rgb(144, 152, 166),
            accent: Color::from_rgb(96, 165, 250),
            track: Color::from_rgb(44, 52, 66),
            input_bg: Color::from_rgb(34, 41, 53),
            input_text: Color::from_rgb(226, 230, 237),
            error: Color::from_rgb(248, 113, 113),
        }
    } else {
        Palette {
            window_bg: Color::from_rgb(248, 249, 251),
            nav_bg: Color::from_rgb(255, 255, 255),
            hero_bg: Color::from_rgb(228, 236, 248),
            card_bg: Color::from_rgb(255, 255, 255),
            text: Color::from_rgb(28, 32, 38),
            muted: Color::from_rgb(104, 112, 126),
            accent: Color::from_rgb(37, 99, 235),
            track: Color::from_rgb(226, 230, 237),
            input_bg: Color::from_rgb(255, 255, 255),
            input_text: Color::from_rgb(28, 32, 38),
            error: Color::from_rgb(185, 28, 28),
        }
    }
}

pub fn theme_glyph(is_dark: bool) -> &'static str {
    if is_dark {
        THEME_GLYPH_DARK
    } else {
        THEME_GLYPH_LIGHT
    }
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = palette(false);
        let dark = palette(true);
        assert_ne!(light.window_bg, dark.window_bg);
        assert_ne!(light.text, dark.text);
    }

    #[test]
    fn test_theme_glyphs() {
        assert_eq!(theme_glyph(true), THEME_GLYPH_DARK);
        assert_eq!(theme_glyph(false), THEME_GLYPH_LIGHT);
    }
}
