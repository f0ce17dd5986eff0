use crate::animate::render;
use crate::compose::{overlay, Banner};
use crate::config::{Args, Timings};
use crate::grid::RETICLE;
use crate::quote::random_quote;
use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use log::debug;
use std::io;

pub(crate) fn run(args: Args) -> Result<()> {
    let overlay = overlay();
    let banner = Banner {
        chars: &RETICLE,
        overlay: &overlay,
        quote: random_quote(),
    };

    let stdout = io::stdout();
    let interactive = !args.no_animation && stdout.is_tty();
    debug!(
        "banner: {} glyphs, interactive={interactive}",
        banner.visible_chars().count()
    );

    let mut out = stdout.lock();
    render(&mut out, interactive, &banner, &Timings::default())
        .context("failed to draw banner")?;
    Ok(())
}
