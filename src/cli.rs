use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_MANIFEST_PATH: &str = "Audio/audio-manifest.json";
pub const DEFAULT_AUDIO_ROOT: &str = "Audio";

#[derive(Parser, Debug)]
#[command(name = "koemap", version, about = "Voice audio manifest toolkit")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_MANIFEST_PATH,
        help = "Path to the persisted audio manifest"
    )]
    pub manifest: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_AUDIO_ROOT,
        help = "Root directory containing voice folders"
    )]
    pub audio_root: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check terms against the manifest and the audio files on disk
    Check {
        #[arg(
            long,
            help = "Newline-separated terms (stdin is read when neither --terms nor --terms-file is given)"
        )]
        terms: Option<String>,
        #[arg(long, help = "Path to a file with one term per line")]
        terms_file: Option<PathBuf>,
    },
    /// Rebuild the manifest from the wav files under the audio root
    Rebuild,
    /// Normalize wav filenames, then rebuild the manifest
    Rename,
}
