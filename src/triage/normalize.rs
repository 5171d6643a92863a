//! Text normalizer.
//!
//! Runs once per message before any matching. Output is lowercase, has
//! apostrophe variants folded to `'`, and has every whitespace run (line
//! breaks and tabs included) collapsed to one space with none at the ends.

/// UTF-8 bytes of U+2019 decoded as Windows-1252 and re-encoded (`â€™`).
const MISDECODED_APOSTROPHE: &str = "\u{e2}\u{20ac}\u{2122}";

/// Right single quotation mark as typed by phone keyboards.
const CURLY_APOSTROPHE: char = '\u{2019}';

/// Normalize raw message text for matching. Idempotent and infallible.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let repaired = if lowered.contains(MISDECODED_APOSTROPHE) {
        lowered.replace(MISDECODED_APOSTROPHE, "'")
    } else {
        lowered
    };
    repaired
        .replace(CURLY_APOSTROPHE, "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  I Need ICE Water \n"), "i need ice water");
    }

    #[test]
    fn repairs_misdecoded_apostrophe() {
        assert_eq!(normalize("I canâ€™t breathe"), "i can't breathe");
    }

    #[test]
    fn repairs_uppercased_misdecoded_apostrophe() {
        // Upper-casing turns the leading byte into `Â`; lowercasing restores it.
        let shouted = "I canâ€™t breathe".to_uppercase();
        assert_eq!(normalize(&shouted), "i can't breathe");
    }

    #[test]
    fn folds_curly_apostrophe() {
        assert_eq!(normalize("baby won\u{2019}t wake"), "baby won't wake");
    }

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(normalize("I can't  breathe"), "i can't breathe");
        assert_eq!(normalize("help\nI can't\r\n\tbreathe"), "help i can't breathe");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn idempotent() {
        for raw in [
            "My Blood Pressure was 165/100",
            "  canâ€™t  ",
            "Baby\u{2019}s lips are BLUE",
            "asdkjasdlkj",
            "help\n\ni  can't\tbreathe",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
