//! Local review synthesis from fixed phrase banks.
//!
//! Used whenever the remote path is unavailable. Never fails and is never
//! cached.

use crate::business::BusinessType;
use rand::seq::SliceRandom;
use rand::Rng;

pub const OPENINGS: [&str; 10] = [
    "Absolutely amazing experience at",
    "Outstanding quality and service at",
    "Highly recommend",
    "Exceptional collection at",
    "Fantastic shopping experience at",
    "Impressed by the quality at",
    "Beautiful selection available at",
    "Top-notch service and products at",
    "Wonderful experience shopping at",
    "Excellent quality and variety at",
];

pub const MIDDLES: [&str; 10] = [
    "The quality is unmatched and the designs are stunning.",
    "Perfect blend of traditional and modern styles.",
    "Excellent craftsmanship and attention to detail.",
    "Beautiful designs with authentic certification.",
    "Great variety and competitive pricing.",
    "Outstanding customer service and product quality.",
    "Impressive collection with certified authenticity.",
    "Professional staff and genuine products.",
    "Remarkable quality and beautiful presentation.",
    "Exceptional value and premium quality.",
];

pub const ENDINGS: [&str; 10] = [
    "Will definitely shop here again!",
    "Highly recommended for all jewelry needs.",
    "Perfect place for authentic jewelry shopping.",
    "Excellent choice for quality jewelry.",
    "Great experience, will return soon!",
    "Best place for certified jewelry.",
    "Outstanding service and products.",
    "Definitely worth visiting!",
    "Impressed with everything!",
    "Five stars well deserved!",
];

const KEYWORD_COUNT: usize = 3;

/// Compose a review for `business_name` from the phrase banks.
pub fn synthesize<R: Rng + ?Sized>(
    business_name: &str,
    business_type: BusinessType,
    rng: &mut R,
) -> String {
    let mut keywords = business_type.fallback_keywords().to_vec();
    keywords.shuffle(rng);
    keywords.truncate(KEYWORD_COUNT);

    let opening = OPENINGS[rng.gen_range(0..OPENINGS.len())];
    let middle = MIDDLES[rng.gen_range(0..MIDDLES.len())];
    let ending = ENDINGS[rng.gen_range(0..ENDINGS.len())];

    format!(
        "{opening} {business_name}! Their {} collection is exceptional. {middle} The staff is knowledgeable and helpful throughout the process. {ending}",
        keywords.join(", ")
    )
}
