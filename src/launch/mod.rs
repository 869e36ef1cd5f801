//! Launch flow: personalize the selected template, copy it to the clipboard,
//! open the business's review page.
//!
//! Clipboard and browser access sit behind `Clipboard` / `UrlOpener` so the
//! flow can run against recording fakes in tests.

pub mod share;

use crate::business::Business;
use crate::error::{LauncherError, Result};
use crate::personalize;
use rand::Rng;

/// Write-only clipboard capability.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// "Open this URL in a new browser context" capability.
pub trait UrlOpener {
    fn open_url(&mut self, url: &str) -> Result<()>;
}

/// System clipboard via arboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| LauncherError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| LauncherError::Clipboard(e.to_string()))?;
        log::info!("[LAUNCH] Copied {} chars to clipboard", text.len());
        Ok(())
    }
}

/// Default browser via the `open` crate.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open_url(&mut self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| LauncherError::Browser {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        log::info!("[LAUNCH] Opened {}", url);
        Ok(())
    }
}

/// What happened during a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Personalized review text now on the clipboard.
    pub text: String,
    /// False when the review page could not be opened.
    pub opened: bool,
}

impl LaunchOutcome {
    pub fn status_message(&self) -> &'static str {
        if self.opened {
            "Review copied and review box opened! Paste your review and submit."
        } else {
            "Review copied, but the review page could not be opened. Open it manually and paste your review."
        }
    }
}

/// Personalize `template`, copy it, and open `business.review_url`.
///
/// A clipboard failure aborts the launch. A browser failure after the copy
/// succeeded is reported through `LaunchOutcome::opened`.
pub fn launch_review<R: Rng + ?Sized>(
    business: &Business,
    template: &str,
    staff_name: &str,
    rng: &mut R,
    clipboard: &mut dyn Clipboard,
    opener: &mut dyn UrlOpener,
) -> Result<LaunchOutcome> {
    let text = personalize::integrate(template, staff_name, rng);

    clipboard.set_text(&text).map_err(|e| {
        log::error!("[LAUNCH] Failed to launch review: {}", e);
        e
    })?;

    let opened = match opener.open_url(business.review_url) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[LAUNCH] {}", e);
            false
        }
    };

    Ok(LaunchOutcome { text, opened })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(LauncherError::Clipboard("no display".to_string()));
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        urls: Vec<String>,
        fail: bool,
    }

    impl UrlOpener for RecordingOpener {
        fn open_url(&mut self, url: &str) -> Result<()> {
            if self.fail {
                return Err(LauncherError::Browser {
                    url: url.to_string(),
                    reason: "blocked".to_string(),
                });
            }
            self.urls.push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn copies_personalized_text_and_opens_review_page() {
        let shop = business::find("dda-jewels").unwrap();
        let mut clipboard = RecordingClipboard::default();
        let mut opener = RecordingOpener::default();

        let outcome = launch_review(
            shop,
            "Great staff and service.",
            "Asha",
            &mut StdRng::seed_from_u64(1),
            &mut clipboard,
            &mut opener,
        )
        .unwrap();

        assert_eq!(outcome.text, "Great staff, especially Asha and service.");
        assert!(outcome.opened);
        assert_eq!(clipboard.text.as_deref(), Some(outcome.text.as_str()));
        assert_eq!(opener.urls, vec![shop.review_url.to_string()]);
    }

    #[test]
    fn clipboard_failure_aborts_before_opening() {
        let shop = business::find("deen-dayal").unwrap();
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let mut opener = RecordingOpener::default();

        let result = launch_review(
            shop,
            "Nice.",
            "",
            &mut StdRng::seed_from_u64(1),
            &mut clipboard,
            &mut opener,
        );
        assert!(matches!(result, Err(LauncherError::Clipboard(_))));
        assert!(opener.urls.is_empty());
    }

    #[test]
    fn blocked_browser_still_leaves_text_copied() {
        let shop = business::find("deen-dayal").unwrap();
        let mut clipboard = RecordingClipboard::default();
        let mut opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };

        let outcome = launch_review(
            shop,
            "Nice.",
            "",
            &mut StdRng::seed_from_u64(1),
            &mut clipboard,
            &mut opener,
        )
        .unwrap();
        assert!(!outcome.opened);
        assert_eq!(clipboard.text.as_deref(), Some("Nice."));
        assert!(outcome.status_message().contains("could not be opened"));
    }
}
