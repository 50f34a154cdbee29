// altspell-cli: resource loading and the stdin -> stdout filter behind the
// `altspell` binary.

pub mod diff;
pub mod resources;

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use altspell_subst::{Policy, backward, forward};

use crate::resources::{ResourceError, ResourceLoader};

/// Restore native letters (umlauts, eszett, ...) in text typed with
/// alternative spellings, or spell them out again.
#[derive(Parser, Debug, Clone)]
#[command(name = "altspell")]
#[command(about = "Replace alternative spellings with native characters, reading stdin")]
#[command(version)]
pub struct Args {
    /// Language code, e.g. "de"
    pub language: String,

    /// Substitute every occurrence without consulting the dictionary
    #[arg(short, long)]
    pub force: bool,

    /// Replace native characters with their alternative spellings
    #[arg(short, long)]
    pub reverse: bool,

    /// Print a line diff of the changes to stderr
    #[arg(short, long)]
    pub diff: bool,

    /// Resource directory containing languages.json and dicts/
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Neither read nor write the filtered dictionary cache
    #[arg(long)]
    pub no_cache: bool,

    /// Enable detailed logging
    #[arg(long)]
    pub debug: bool,
}

/// What a run does to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Alternative spellings -> native characters, validated by dictionary.
    Dictionary,
    /// Alternative spellings -> native characters, every occurrence.
    Force,
    /// Native characters -> alternative spellings.
    Reverse,
}

impl Args {
    /// `--reverse` takes precedence over `--force`.
    pub fn mode(&self) -> Mode {
        if self.reverse {
            Mode::Reverse
        } else if self.force {
            Mode::Force
        } else {
            Mode::Dictionary
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over the `debug` flag; without either only warnings and
/// errors are shown.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Transform `text` for `language` in the given mode.
///
/// The dictionary is only loaded in [`Mode::Dictionary`].
pub fn transform(
    text: &str,
    language: &str,
    mode: Mode,
    loader: &ResourceLoader,
) -> Result<String, ResourceError> {
    let mapping = loader.mapping(language)?;
    debug!(language, ?mode, "transforming");
    Ok(match mode {
        Mode::Reverse => backward(text, mapping),
        Mode::Force => forward(text, mapping, Policy::Force),
        Mode::Dictionary => {
            let dict = loader.dictionary(language)?;
            forward(text, mapping, Policy::dictionary(&*dict))
        }
    })
}

/// Read all of `input`, write the transformed text to `out` and, with
/// `--diff`, the changed lines to `diff_out`.
///
/// Line endings are kept as they are, including a missing final newline.
pub fn run<R: Read, W: Write, E: Write>(
    args: &Args,
    mut input: R,
    out: &mut W,
    diff_out: &mut E,
) -> anyhow::Result<()> {
    let loader = ResourceLoader::discover(args.resources.as_deref())?
        .with_filtered_cache(!args.no_cache);
    loader.mapping(&args.language)?;

    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read input")?;

    if text.trim().is_empty() {
        warn!("input is empty, nothing to do");
        out.write_all(text.as_bytes())?;
        return Ok(());
    }

    let output = transform(&text, &args.language, args.mode(), &loader)?;
    out.write_all(output.as_bytes())
        .context("failed to write output")?;

    if args.diff {
        diff_out.write_all(diff::line_diff(&text, &output).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("altspell").chain(args.iter().copied()))
    }

    #[test]
    fn mode_from_flags() {
        assert_eq!(parse(&["de"]).mode(), Mode::Dictionary);
        assert_eq!(parse(&["-f", "de"]).mode(), Mode::Force);
        assert_eq!(parse(&["--reverse", "de"]).mode(), Mode::Reverse);
        assert_eq!(parse(&["-f", "-r", "de"]).mode(), Mode::Reverse);
    }

    #[test]
    fn parses_options() {
        let args = parse(&["-d", "--no-cache", "--resources", "/tmp/res", "sv"]);
        assert_eq!(args.language, "sv");
        assert!(args.diff);
        assert!(args.no_cache);
        assert!(!args.debug);
        assert_eq!(args.resources, Some(PathBuf::from("/tmp/res")));
    }

    #[test]
    fn language_is_required() {
        assert!(Args::try_parse_from(["altspell"]).is_err());
    }
}
