use crate::compose::{horizontal_rule, write_banner, Banner, INDENT};
use crate::config::Timings;
use crate::grid::PlacedChar;
use crate::mask::GRID_H;
use crate::style::MUTED;
use crossterm::{
    cursor::{self, MoveTo},
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use log::debug;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::thread;
use std::time::Duration;

/// Screen row (0-based) of grid row 0.
const ORIGIN_ROW: usize = 0;

/// Keeps the cursor hidden while alive and shows it again on drop, however
/// the reveal ends.
pub(crate) struct HiddenCursor<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> HiddenCursor<'a, W> {
    pub(crate) fn hide(out: &'a mut W) -> io::Result<Self> {
        let guard = Self { out };
        queue!(guard.out, cursor::Hide)?;
        Ok(guard)
    }
}

impl<W: Write> Deref for HiddenCursor<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        &*self.out
    }
}

impl<W: Write> DerefMut for HiddenCursor<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut *self.out
    }
}

impl<W: Write> Drop for HiddenCursor<'_, W> {
    fn drop(&mut self) {
        let _ = queue!(self.out, cursor::Show);
        let _ = self.out.flush();
    }
}

/// Terminal output gets the animation; anything else gets the plain block.
pub(crate) fn render<W: Write>(
    out: &mut W,
    interactive: bool,
    banner: &Banner,
    timings: &Timings,
) -> io::Result<()> {
    if interactive {
        debug!("banner: animated reveal");
        animate(out, banner, timings)
    } else {
        debug!("banner: static block");
        write_banner(out, banner)
    }
}

/// Outermost first, so the reveal closes in on the center.
pub(crate) fn reveal_order<'a>(banner: &Banner<'a>) -> Vec<&'a PlacedChar> {
    let mut chars: Vec<&PlacedChar> = banner.visible_chars().collect();
    chars.sort_by(|a, b| b.dist.total_cmp(&a.dist));
    chars
}

fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

// A flaky terminal must not stop the reveal.
fn flush<W: Write>(out: &mut W) {
    let _ = out.flush();
}

fn move_to<W: Write>(out: &mut W, row: usize, col: usize) -> io::Result<()> {
    queue!(out, MoveTo(col as u16, row as u16))
}

pub(crate) fn animate<W: Write>(
    out: &mut W,
    banner: &Banner,
    timings: &Timings,
) -> io::Result<()> {
    let mut guard = HiddenCursor::hide(out)?;
    let out = &mut *guard;

    for c in reveal_order(banner) {
        move_to(out, ORIGIN_ROW + c.row, c.col)?;
        queue!(
            out,
            SetForegroundColor(c.color.to_color()),
            Print(c.glyph),
            ResetColor
        )?;
        flush(out);
        pause(timings.glyph);
    }

    let mut section = None;
    for (&row, line) in banner.overlay {
        let (lead, per_char) = timings.section(line.section);
        if section != Some(line.section) {
            pause(lead);
            section = Some(line.section);
        }
        move_to(out, ORIGIN_ROW + row, INDENT)?;
        for ch in line.text.chars() {
            queue!(out, SetForegroundColor(line.color()), Print(ch), ResetColor)?;
            flush(out);
            pause(per_char);
        }
    }

    pause(timings.quote_lead);
    move_to(out, ORIGIN_ROW + GRID_H + 1, INDENT)?;
    if let Some(quote) = banner.quote {
        for ch in quote.text.chars() {
            queue!(
                out,
                SetAttribute(Attribute::Italic),
                Print(ch),
                SetAttribute(Attribute::Reset)
            )?;
            flush(out);
            pause(timings.quote_char);
        }
        for ch in quote.attribution().chars() {
            queue!(out, Print(ch))?;
            flush(out);
            pause(timings.quote_char);
        }
    }

    pause(timings.rule_lead);
    move_to(out, ORIGIN_ROW + GRID_H + 2, 0)?;
    for cell in horizontal_rule().chars() {
        queue!(out, SetForegroundColor(MUTED), Print(cell), ResetColor)?;
        flush(out);
        pause(timings.rule_cell);
    }

    move_to(out, ORIGIN_ROW + GRID_H + 4, 0)?;
    queue!(out, Print('\n'))?;
    flush(out);
    Ok(())
}
