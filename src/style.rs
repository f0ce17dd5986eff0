use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels are clamped to [0,255] and truncated.
    pub(crate) fn from_f64(r: f64, g: f64, b: f64) -> Self {
        let ch = |v: f64| v.clamp(0.0, 255.0) as u8;
        Self::new(ch(r), ch(g), ch(b))
    }

    pub(crate) fn to_color(self) -> Color {
        Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

// #FF3355
pub(crate) const DANGER: Rgb = Rgb::new(255, 51, 85);
pub(crate) const SCATTER: Rgb = Rgb::new(24, 24, 24);

pub(crate) const TITLE: Color = Color::Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub(crate) const MUTED: Color = Color::DarkGrey;

/// Katakana occupy two terminal columns; everything else we draw takes one.
pub(crate) fn is_wide(ch: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&ch)
}

pub(crate) fn glyph_width(ch: char) -> usize {
    if is_wide(ch) {
        2
    } else {
        1
    }
}

/// Display width of `s`, skipping escape sequences (ESC through the first ASCII letter).
pub(crate) fn visible_width(s: &str) -> usize {
    let mut in_esc = false;
    let mut w = 0;
    for ch in s.chars() {
        if ch == '\x1b' {
            in_esc = true;
            continue;
        }
        if in_esc {
            if ch.is_ascii_alphabetic() {
                in_esc = false;
            }
            continue;
        }
        w += glyph_width(ch);
    }
    w
}
