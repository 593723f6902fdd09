//! Title quotes and table footers.

const QUOTES: &[&str] = &[
    "Now with 100% more tools!",
    "Debloat responsibly.",
    "Have you tried turning it off and on again?",
    "Powered by caffeine and PowerShell.",
    "Your PC, your rules.",
    "Fewer services, more FPS.",
    "One ISO a day keeps the boredom away.",
    "Read the command before you approve it.",
    "Made with love (and regex).",
    "Free as in freedom, and as in beer.",
];

/// Footers of the first three table columns. The last column shows the page.
pub const FOOTERS: [&str; 3] = ["[H] Help", "[N] Next page", "[B] Previous page"];

/// Quote at `index`, wrapping around the list.
pub fn pick(index: usize) -> &'static str {
    QUOTES[index % QUOTES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_wraps() {
        assert_eq!(pick(0), pick(QUOTES.len()));
        assert_ne!(pick(0), pick(1));
    }
}
