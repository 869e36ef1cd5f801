//! Staff-name highlighting for display.
//!
//! Plain case-insensitive substring matching on the rendered text. A name
//! that happens to occur inside a longer word is highlighted there as well.

use regex::RegexBuilder;

/// A run of output text, flagged when it is an occurrence of the staff name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Split `text` into segments, marking every occurrence of `staff_name`.
///
/// Concatenating the returned segments always reproduces `text`.
pub fn highlight(text: &str, staff_name: &str) -> Vec<Segment> {
    let name = staff_name.trim();
    if name.is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }

    let re = match RegexBuilder::new(&regex::escape(name))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            log::warn!("[HIGHLIGHT] Could not build matcher for {:?}: {}", name, e);
            return vec![Segment::plain(text)];
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::plain(&text[last..m.start()]));
        }
        segments.push(Segment::marked(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }
    segments
}
