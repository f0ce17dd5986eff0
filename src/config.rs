use crate::compose::Section;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "vt", version)]
#[command(about = "Spin up vulnerable targets from your terminal", long_about = None)]
pub(crate) struct Args {
    /// Print the banner in one go, without the lock-on animation
    #[arg(long, default_value_t = false)]
    pub(crate) no_animation: bool,
}

/// Pauses of the animated reveal.
#[derive(Clone, Debug)]
pub(crate) struct Timings {
    pub(crate) glyph: Duration,
    pub(crate) title_lead: Duration,
    pub(crate) title_char: Duration,
    pub(crate) subtitle_lead: Duration,
    pub(crate) subtitle_char: Duration,
    pub(crate) tagline_lead: Duration,
    pub(crate) tagline_char: Duration,
    pub(crate) quote_lead: Duration,
    pub(crate) quote_char: Duration,
    pub(crate) rule_lead: Duration,
    pub(crate) rule_cell: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        let ms = Duration::from_millis;
        Self {
            glyph: ms(1),
            title_lead: ms(200),
            title_char: ms(40),
            subtitle_lead: ms(80),
            subtitle_char: ms(15),
            tagline_lead: ms(60),
            tagline_char: ms(10),
            quote_lead: ms(100),
            quote_char: ms(6),
            rule_lead: ms(80),
            rule_cell: ms(1),
        }
    }
}

impl Timings {
    /// (pause before the section starts, pause after each character)
    pub(crate) fn section(&self, section: Section) -> (Duration, Duration) {
        match section {
            Section::Title => (self.title_lead, self.title_char),
            Section::Subtitle => (self.subtitle_lead, self.subtitle_char),
            Section::Tagline => (self.tagline_lead, self.tagline_char),
        }
    }

    #[cfg(test)]
    pub(crate) fn instant() -> Self {
        let zero = Duration::ZERO;
        Self {
            glyph: zero,
            title_lead: zero,
            title_char: zero,
            subtitle_lead: zero,
            subtitle_char: zero,
            tagline_lead: zero,
            tagline_char: zero,
            quote_lead: zero,
            quote_char: zero,
            rule_lead: zero,
            rule_cell: zero,
        }
    }
}
