use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;

use podgen::{
    DEFAULT_BRANCH, DEFAULT_HOST, GenerateOptions, NoopReporter, ProgressEvent, ProgressReporter,
    SharedProgressReporter, generate_feed,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("\u{1F399}\u{FE0F}  ", "");
static HEADPHONES: Emoji<'_, '_> = Emoji("\u{1F3A7} ", "[i] ");
static SEARCH: Emoji<'_, '_> = Emoji("\u{1F50D} ", "[~] ");
static NOTE: Emoji<'_, '_> = Emoji("\u{1F3B5} ", "[+] ");
static PARTY: Emoji<'_, '_> = Emoji("\u{1F389} ", "[*] ");
static FOLDER: Emoji<'_, '_> = Emoji("\u{1F4C1} ", "");

/// Generate a podcast RSS feed from a directory of audio files
#[derive(Parser, Debug)]
#[command(name = "podgen")]
#[command(about = "Generate a podcast RSS feed from a directory of audio files")]
#[command(version)]
struct Args {
    /// Directory with config.json and the audio files, relative to the repository root
    directory: PathBuf,

    /// Owner of the repository hosting the audio files
    owner: String,

    /// Name of the repository hosting the audio files
    repo: String,

    /// Branch the audio files are served from
    #[arg(short, long, default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Host serving raw repository content
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Treat a directory without audio files as an error
    #[arg(long)]
    fail_if_empty: bool,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Progress reporter printing colored status lines to the terminal
struct TerminalReporter;

impl ProgressReporter for TerminalReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::ConfigLoaded { podcast_title } => {
                println!("{HEADPHONES}{}", podcast_title.bold().green());
            }

            ProgressEvent::DirectoryScanned { audio_files } => {
                println!(
                    "{SEARCH}{} audio {} found",
                    audio_files.to_string().cyan(),
                    if audio_files == 1 { "file" } else { "files" }
                );
            }

            ProgressEvent::EpisodePrepared {
                file_name,
                size_bytes,
                episode_index,
                total_episodes,
            } => {
                println!(
                    "  {NOTE}[{}/{}] {} {}",
                    (episode_index + 1).to_string().cyan(),
                    total_episodes.to_string().cyan(),
                    file_name,
                    format!("({size_bytes} bytes)").dimmed()
                );
            }

            ProgressEvent::FeedWritten { episode_count, .. } => {
                println!(
                    "\n{PARTY}{} {} {}",
                    "Feed written:".bold().green(),
                    episode_count.to_string().green().bold(),
                    if episode_count == 1 {
                        "episode"
                    } else {
                        "episodes"
                    }
                );
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podgen".bold().magenta(),
            "- Podcast Feed Generator".dimmed()
        );
    }

    let options = GenerateOptions {
        owner: args.owner,
        repo: args.repo,
        branch: args.branch,
        host: args.host,
        fail_when_empty: args.fail_if_empty,
    };

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(TerminalReporter)
    };

    let summary =
        generate_feed(&args.directory, &options, reporter).context("Failed to generate feed")?;

    if !args.quiet {
        println!(
            "\n{FOLDER}Feed: {}\n",
            summary.feed_path.display().to_string().cyan()
        );
    }

    Ok(())
}
