use crate::grid::PlacedChar;
use crate::mask::{GRID_H, GRID_W};
use crate::quote::Quote;
use crate::style::{visible_width, MUTED, TITLE};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Overlay text starts this many columns in.
pub(crate) const INDENT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
    Title,
    Subtitle,
    Tagline,
}

#[derive(Clone, Debug)]
pub(crate) struct TextLine {
    pub(crate) section: Section,
    pub(crate) text: String,
}

impl TextLine {
    fn new(section: Section, text: impl Into<String>) -> Self {
        Self {
            section,
            text: text.into(),
        }
    }

    pub(crate) fn color(&self) -> Color {
        match self.section {
            Section::Title => TITLE,
            Section::Subtitle | Section::Tagline => MUTED,
        }
    }

    fn styled(&self) -> String {
        format!(
            "{}{}{}{}",
            SetForegroundColor(self.color()),
            " ".repeat(INDENT),
            self.text,
            ResetColor
        )
    }
}

/// Grid row -> text drawn at the start of that row.
pub(crate) type Overlay = BTreeMap<usize, TextLine>;

pub(crate) fn overlay() -> Overlay {
    BTreeMap::from([
        (3, TextLine::new(Section::Title, "VT")),
        (
            5,
            TextLine::new(
                Section::Subtitle,
                format!("vulnerable target v{}", env!("CARGO_PKG_VERSION")),
            ),
        ),
        (
            7,
            TextLine::new(Section::Tagline, "// spin up vulnerable targets"),
        ),
        (8, TextLine::new(Section::Tagline, "from your terminal //")),
    ])
}

/// Everything one banner draws. Both renderers read the same value.
pub(crate) struct Banner<'a> {
    pub(crate) chars: &'a [PlacedChar],
    pub(crate) overlay: &'a Overlay,
    pub(crate) quote: Option<&'a Quote>,
}

impl<'a> Banner<'a> {
    /// Placed characters that survive the title text zone.
    pub(crate) fn visible_chars(&self) -> impl Iterator<Item = &'a PlacedChar> + 'a {
        self.chars.iter().filter(|c| c.outside_text_zone())
    }
}

pub(crate) fn horizontal_rule() -> String {
    "─".repeat(GRID_W)
}

/// Writes the banner as one plain block: grid rows, a blank line, the quote, a rule.
pub(crate) fn write_banner<W: Write>(out: &mut W, banner: &Banner) -> io::Result<()> {
    let mut by_row: BTreeMap<usize, Vec<&PlacedChar>> = BTreeMap::new();
    for c in banner.visible_chars() {
        by_row.entry(c.row).or_default().push(c);
    }
    for row in by_row.values_mut() {
        row.sort_by_key(|c| c.col);
    }

    for y in 0..GRID_H {
        let mut col = 0;
        if let Some(line) = banner.overlay.get(&y) {
            let styled = line.styled();
            out.write_all(styled.as_bytes())?;
            col = visible_width(&styled);
        }

        for c in by_row.get(&y).into_iter().flatten() {
            if col < c.col {
                out.write_all(" ".repeat(c.col - col).as_bytes())?;
                col = c.col;
            }
            queue!(
                out,
                SetForegroundColor(c.color.to_color()),
                Print(c.glyph),
                ResetColor
            )?;
            col += c.width();
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    let quote = banner.quote.map(Quote::styled).unwrap_or_default();
    writeln!(out, "{}{}", " ".repeat(INDENT), quote)?;
    writeln!(
        out,
        "{}{}{}",
        SetForegroundColor(MUTED),
        horizontal_rule(),
        ResetColor
    )?;
    Ok(())
}
