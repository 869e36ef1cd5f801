//! WhatsApp share link for the launcher itself.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SHARE_BASE: &str = "https://wa.me/?text=";

/// Message inviting people to use the launcher at `app_url`.
pub fn share_message(app_url: &str) -> String {
    format!(
        "✨ Help us grow! Use this Review Launcher to easily post reviews for our jewellery stores:\n\n{}\n\nJust copy the review and paste it on Google Maps. Thank you for your support! 💍✔️",
        app_url
    )
}

/// `wa.me` link carrying the encoded share message.
pub fn share_link(app_url: &str) -> String {
    let message = share_message(app_url);
    format!("{}{}", SHARE_BASE, utf8_percent_encode(&message, COMPONENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn message_embeds_url_between_blank_lines() {
        let msg = share_message("https://reviews.example/app");
        assert!(msg.starts_with("✨ Help us grow!"));
        assert!(msg.contains("stores:\n\nhttps://reviews.example/app\n\nJust copy"));
    }

    #[test]
    fn link_encodes_like_encode_uri_component() {
        let link = share_link("https://a.b/c?d=1&e=2");
        let encoded = link.strip_prefix(SHARE_BASE).unwrap();
        assert!(encoded.starts_with("%E2%9C%A8%20Help%20us%20grow!%20"));
        assert!(encoded.contains("https%3A%2F%2Fa.b%2Fc%3Fd%3D1%26e%3D2"));
        assert!(encoded.contains("%0A%0A"));
        assert!(!encoded.contains(' '));
    }

    #[test]
    fn link_decodes_back_to_message() {
        let url = "https://reviews.example/app";
        let link = share_link(url);
        let decoded = percent_decode_str(link.strip_prefix(SHARE_BASE).unwrap())
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, share_message(url));
    }
}
