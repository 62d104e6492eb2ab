use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::AppError;

const DEFAULT_SOURCE: &str = "data/source/clubs.csv";
const DEFAULT_IMAGE_ROOT: &str = "public/clubs/ANSXtra";
const DEFAULT_IMAGE_BASE: &str = "/clubs/ANSXtra";
const DEFAULT_OUTPUT: &str = "data/clubs.json";

/// Generate the club catalog JSON from the spreadsheet export.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV export (relative paths resolve against the project root)
    #[arg(env = "CSV_PATH")]
    pub csv: Option<PathBuf>,

    /// Project root used to resolve relative paths
    #[arg(long, env = "CLUBS_PROJECT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Directory holding one image folder per club
    #[arg(long, env = "CLUBS_IMAGE_ROOT", default_value = DEFAULT_IMAGE_ROOT)]
    pub image_root: PathBuf,

    /// Public URL prefix for club images
    #[arg(long, env = "CLUBS_IMAGE_BASE", default_value = DEFAULT_IMAGE_BASE)]
    pub image_base: String,

    /// Where to write the generated catalog
    #[arg(long, short, env = "CLUBS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Resolved, validated paths for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub image_root: PathBuf,
    pub image_base: String,
    pub output_path: PathBuf,
}

impl Config {
    /// Fails when the CSV does not exist; nothing else is checked up front.
    pub fn from_args(args: Args) -> Result<Self, AppError> {
        let csv = args.csv.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
        let source_path = resolve(&args.root, &csv);
        if !source_path.is_file() {
            return Err(AppError::SourceNotFound(source_path.display().to_string()));
        }

        let image_base = args.image_base.trim().to_string();
        if image_base.is_empty() {
            return Err(AppError::Config("image base must not be empty".to_string()));
        }

        Ok(Self {
            source_path,
            image_root: resolve(&args.root, &args.image_root),
            image_base,
            output_path: resolve(&args.root, &args.output),
        })
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
