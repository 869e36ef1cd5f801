//! Personalization: weaves a staff member's name into a review template.
//!
//! Rules, in order:
//! 1. Empty (after trim) name → template unchanged.
//! 2. First whole-word "staff" (any case) → "staff, especially <name>".
//! 3. Else first whole-word "team" → "team, particularly <name>".
//! 4. Else append one random thank-you sentence after a single space.
//!
//! The matched word is rewritten in lowercase; every other byte of the
//! template is left untouched. Matching is ASCII-only: case folding and word
//! boundaries ignore non-ASCII letters.

mod highlight;

pub use highlight::{highlight, Segment};

use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

/// Thank-you sentences appended when the template has no anchor word.
/// `{name}` is replaced with the trimmed staff name.
pub const THANK_YOU_ENDINGS: [&str; 5] = [
    "Special thanks to {name} for the excellent assistance.",
    "{name} made the visit even better with top-notch service.",
    "Thanks to {name} for being so helpful and professional.",
    "If you go, ask for {name} – they were wonderful.",
    "{name}'s support really stood out during my visit.",
];

struct Anchor {
    pattern: &'static str,
    word: &'static str,
    joiner: &'static str,
}

const ANCHORS: [Anchor; 2] = [
    Anchor {
        pattern: r"(?i-u)\bstaff\b",
        word: "staff",
        joiner: "especially",
    },
    Anchor {
        pattern: r"(?i-u)\bteam\b",
        word: "team",
        joiner: "particularly",
    },
];

fn anchor_regexes() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        ANCHORS
            .iter()
            .map(|a| Regex::new(a.pattern).expect("anchor patterns are valid"))
            .collect()
    })
}

/// Integrate `staff_name` into `template`.
///
/// `rng` is only consulted when an ending has to be appended.
pub fn integrate<R: Rng + ?Sized>(template: &str, staff_name: &str, rng: &mut R) -> String {
    let name = staff_name.trim();
    if name.is_empty() {
        return template.to_string();
    }

    for (anchor, re) in ANCHORS.iter().zip(anchor_regexes()) {
        if let Some(m) = re.find(template) {
            let mut out = String::with_capacity(template.len() + name.len() + 16);
            out.push_str(&template[..m.start()]);
            out.push_str(anchor.word);
            out.push_str(", ");
            out.push_str(anchor.joiner);
            out.push(' ');
            out.push_str(name);
            out.push_str(&template[m.end()..]);
            return out;
        }
    }

    let ending = THANK_YOU_ENDINGS[rng.gen_range(0..THANK_YOU_ENDINGS.len())].replace("{name}", name);
    format!("{} {}", template, ending)
}
