use crossterm::style::{Attribute, SetAttribute};
use log::warn;
use rand::{
    rngs::{OsRng, StdRng},
    Rng, RngCore, SeedableRng,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Quote {
    pub(crate) text: &'static str,
    pub(crate) author: &'static str,
}

impl Quote {
    const fn new(text: &'static str, author: &'static str) -> Self {
        Self { text, author }
    }

    /// Italic text, then the attribution.
    pub(crate) fn styled(&self) -> String {
        format!(
            "{}{}{}{}",
            SetAttribute(Attribute::Italic),
            self.text,
            SetAttribute(Attribute::Reset),
            self.attribution()
        )
    }

    pub(crate) fn attribution(&self) -> String {
        format!(" — {}", self.author)
    }
}

pub(crate) const QUOTES: [Quote; 9] = [
    Quote::new("Pirêze Hayat, Doxrî Yașanmaz.", "Pișo Meheme"),
    Quote::new("Talk is cheap. Show me the code.", "Linus Torvalds"),
    Quote::new(
        "Given enough eyeballs, all bugs are shallow.",
        "Eric S. Raymond",
    ),
    Quote::new(
        "The quieter you become, the more you are able to hear.",
        "Anonymous",
    ),
    Quote::new("Hack the planet!", "Hackers (1995)"),
    Quote::new("Code is poetry.", "WP Community"),
    Quote::new(
        "Think like a hacker, act like an engineer.",
        "Security Community",
    ),
    Quote::new("Open source is power.", "Open Source Advocates"),
    Quote::new("Information wants to be free.", "Stewart Brand"),
];

/// A quote picked with OS randomness, so it changes from run to run while
/// the reticle stays fixed. `None` if the OS source fails.
pub(crate) fn random_quote() -> Option<&'static Quote> {
    pick(OsRng, &QUOTES)
}

/// Uniform pick over `items`, from a generator seeded off `source`.
pub(crate) fn pick<T, R: RngCore>(source: R, items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let mut rng = match StdRng::from_rng(source) {
        Ok(rng) => rng,
        Err(err) => {
            warn!("quote: random source unavailable: {err}");
            return None;
        }
    };
    items.get(rng.gen_range(0..items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSource;

    impl RngCore for BrokenSource {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {}
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "no entropy",
            )))
        }
    }

    #[test]
    fn failing_source_degrades_to_none() {
        assert_eq!(pick(BrokenSource, &QUOTES), None);
    }

    #[test]
    fn empty_list_has_no_quote() {
        let empty: [Quote; 0] = [];
        assert_eq!(pick(StdRng::seed_from_u64(1), &empty), None);
    }

    #[test]
    fn every_quote_is_reachable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut hits = [0usize; QUOTES.len()];
        for _ in 0..2000 {
            let q = pick(&mut rng, &QUOTES).unwrap();
            let i = QUOTES.iter().position(|c| c == q).unwrap();
            hits[i] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0), "{hits:?}");
    }

    #[test]
    fn os_source_yields_a_listed_quote() {
        let q = random_quote().expect("OS randomness");
        assert!(QUOTES.contains(q));
    }

    #[test]
    fn styled_quote_shape() {
        let q = &QUOTES[1];
        assert_eq!(
            q.styled(),
            "\x1b[3mTalk is cheap. Show me the code.\x1b[0m — Linus Torvalds"
        );
    }
}
