//! Command-line surface.
//!
//! Template indices are 1-based on the command line and converted at the
//! edge. Every mutating command saves the library before printing.

use crate::business::{self, Business};
use crate::config::{self, GeneratorConfig};
use crate::error::{LauncherError, Result};
use crate::generator::{FileCacheStore, ReviewGenerator};
use crate::launch::{self, share, SystemBrowser, SystemClipboard, UrlOpener};
use crate::llm::{provider, GenerationRequest};
use crate::personalize::{self, Segment};
use crate::settings;
use crate::templates::{TemplateLibrary, TemplateStore};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;

#[derive(Debug, Parser)]
#[command(
    name = "review-launcher",
    version,
    about = "Generate, personalize and launch review text"
)]
pub struct Cli {
    /// Business to operate on (defaults to the active one)
    #[arg(short, long, global = true, value_name = "KEY")]
    pub business: Option<String>,

    /// Staff member to credit in the review
    #[arg(short, long, global = true, value_name = "NAME", default_value = "")]
    pub staff: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered businesses
    Businesses,
    /// List templates for the business
    List,
    /// Show the selected template, personalized
    Show,
    /// Select a template by number
    Select { index: usize },
    /// Select a random template
    Random,
    /// Append a template
    Add { text: String },
    /// Remove a template (defaults to the selected one)
    Remove { index: Option<usize> },
    /// Make a business the active one
    Use { business: String },
    /// Generate a new template and select it
    Generate,
    /// Copy the personalized review and open the review page
    Launch,
    /// Open a WhatsApp share link for the launcher
    Share {
        /// Public launcher URL (defaults to REVIEW_LAUNCHER_SHARE_URL)
        #[arg(long)]
        url: Option<String>,
        /// Print the link instead of opening it
        #[arg(long)]
        print: bool,
    },
    /// Manage the API key
    Key {
        #[command(subcommand)]
        action: KeyCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum KeyCommand {
    /// Store the key in the OS keychain
    Set { key: String },
    /// Check that the configured key is accepted
    Test,
}

/// Execute one parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    let data_dir = config::data_dir();
    let store = TemplateStore::in_dir(&data_dir);
    let mut library = store.load();
    let key = cli
        .business
        .clone()
        .unwrap_or_else(|| library.active_key().to_string());
    let business = business::find(&key)?;
    let mut rng = rand::thread_rng();

    match cli.command {
        Command::Businesses => {
            for b in business::all_businesses() {
                let marker = if b.key == library.active_key() { "*" } else { " " };
                println!("{} {:<12} {} ({})", marker, b.key, b.name, b.category);
            }
        }
        Command::List => print_list(&library, business, &cli.staff)?,
        Command::Show => print_selected(&library, business, &cli.staff)?,
        Command::Select { index } => {
            let set = library.set_mut(business.key)?;
            set.select(to_zero_based(index, set.len())?)?;
            store.save(&library)?;
            print_selected(&library, business, &cli.staff)?;
        }
        Command::Random => {
            library.set_mut(business.key)?.randomize(&mut rng);
            store.save(&library)?;
            print_selected(&library, business, &cli.staff)?;
        }
        Command::Add { text } => {
            let set = library.set_mut(business.key)?;
            set.add(&text)?;
            let count = set.len();
            store.save(&library)?;
            println!("Added template #{} for {}", count, business.name);
        }
        Command::Remove { index } => {
            let set = library.set_mut(business.key)?;
            let index = match index {
                Some(i) => to_zero_based(i, set.len())?,
                None => set.selected_index(),
            };
            let removed = set.remove(index)?;
            store.save(&library)?;
            println!("Removed: {}", removed);
        }
        Command::Use { business: target } => {
            library.set_active(&target)?;
            store.save(&library)?;
            println!("Active business: {}", business::find(&target)?.name);
        }
        Command::Generate => {
            let config = GeneratorConfig::from_env().with_api_key(settings::resolve_api_key());
            let generator =
                ReviewGenerator::new(&config, Box::new(FileCacheStore::in_dir(&data_dir)));
            let request = GenerationRequest::for_business(business, &cli.staff);
            let generated = generator.generate(&request, &mut rng).await;

            library.set_mut(business.key)?.prepend(generated.text())?;
            store.save(&library)?;
            println!("{}", generated.status_message());
            print_selected(&library, business, &cli.staff)?;
        }
        Command::Launch => {
            let template = library.set(business.key)?.selected().to_string();
            let outcome = launch::launch_review(
                business,
                &template,
                &cli.staff,
                &mut rng,
                &mut SystemClipboard,
                &mut SystemBrowser,
            )?;
            println!("{}", outcome.status_message());
            if !outcome.opened {
                println!("{}", business.review_url);
            }
        }
        Command::Share { url, print } => {
            let url = url
                .filter(|u| !u.trim().is_empty())
                .or_else(config::share_url)
                .ok_or(LauncherError::MissingShareUrl)?;
            let link = share::share_link(&url);
            if print {
                println!("{}", link);
            } else {
                SystemBrowser.open_url(&link)?;
            }
        }
        Command::Key { action } => match action {
            KeyCommand::Set { key } => {
                settings::save_api_key(&key)?;
                println!("API key saved to the OS keychain.");
            }
            KeyCommand::Test => {
                let config =
                    GeneratorConfig::from_env().with_api_key(settings::resolve_api_key());
                let name = provider::groq().name;
                if settings::test_provider(&config).await? {
                    println!("{}: connection OK", name);
                } else {
                    println!("{}: key rejected or service unavailable", name);
                }
            }
        },
    }

    Ok(())
}

/// Convert a 1-based command-line index into a checked 0-based one.
fn to_zero_based(index: usize, len: usize) -> Result<usize> {
    if index == 0 || index > len {
        return Err(LauncherError::IndexOutOfRange { index, len });
    }
    Ok(index - 1)
}

fn print_list(library: &TemplateLibrary, business: &Business, staff: &str) -> Result<()> {
    let set = library.set(business.key)?;
    println!("{} ({})", business.name, business.category);
    for (i, template) in set.templates().iter().enumerate() {
        let marker = if i == set.selected_index() { ">" } else { " " };
        println!("{} {:>2}. {}", marker, i + 1, render(template, staff));
    }
    Ok(())
}

fn print_selected(library: &TemplateLibrary, business: &Business, staff: &str) -> Result<()> {
    let set = library.set(business.key)?;
    // Preview only: the ending drawn here may differ from the one `launch` picks.
    let preview = personalize::integrate(set.selected(), staff, &mut rand::thread_rng());
    println!(
        "[{}/{}] {}",
        set.selected_index() + 1,
        set.len(),
        render(&preview, staff)
    );
    Ok(())
}

/// Render `text` with staff-name occurrences emphasized on a terminal.
fn render(text: &str, staff: &str) -> String {
    paint(&personalize::highlight(text, staff), std::io::stdout().is_terminal())
}

fn paint(segments: &[Segment], ansi: bool) -> String {
    segments
        .iter()
        .map(|s| {
            if s.highlighted && ansi {
                format!("\x1b[1;33m{}\x1b[0m", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "review-launcher",
            "launch",
            "--business",
            "deen-dayal",
            "--staff",
            "Asha",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Launch));
        assert_eq!(cli.business.as_deref(), Some("deen-dayal"));
        assert_eq!(cli.staff, "Asha");
    }

    #[test]
    fn remove_index_is_optional() {
        let cli = Cli::try_parse_from(["review-launcher", "remove"]).unwrap();
        assert!(matches!(cli.command, Command::Remove { index: None }));
        let cli = Cli::try_parse_from(["review-launcher", "remove", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Remove { index: Some(2) }));
    }

    #[test]
    fn key_subcommands_parse() {
        let cli = Cli::try_parse_from(["review-launcher", "key", "set", "gsk_x"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Key { action: KeyCommand::Set { ref key } } if key == "gsk_x"
        ));
    }

    #[test]
    fn one_based_indices() {
        assert_eq!(to_zero_based(1, 3).unwrap(), 0);
        assert_eq!(to_zero_based(3, 3).unwrap(), 2);
        assert!(to_zero_based(0, 3).is_err());
        assert!(to_zero_based(4, 3).is_err());
    }

    #[test]
    fn paint_marks_only_highlighted_segments() {
        let segments = personalize::highlight("Thanks Asha!", "asha");
        assert_eq!(paint(&segments, false), "Thanks Asha!");
        assert_eq!(paint(&segments, true), "Thanks \x1b[1;33mAsha\x1b[0m!");
    }
}
