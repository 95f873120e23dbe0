//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use image_pipeline::Tier;

#[derive(Debug, Parser)]
#[command(name = "pro-headshot", version, about = "AI headshot editing pipeline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Edit a selfie with a preset or custom instruction
    Edit(EditArgs),
    /// List the preset edit prompts
    Presets,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Source image (JPG, PNG, or WEBP, max 5MB)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Free-form edit instruction
    #[arg(long, conflicts_with = "preset")]
    pub instruction: Option<String>,

    /// Preset prompt id (see `pro-headshot presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Subscription tier (free output is a 512px watermarked preview)
    #[arg(long, default_value = "free")]
    pub tier: Tier,

    /// Normalized horizontal crop center, in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub center_x: f64,

    /// Normalized vertical crop center, in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub center_y: f64,

    /// Crop zoom factor, at least 1.0
    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,

    /// Skip the square crop and submit the source as-is
    #[arg(long)]
    pub no_crop: bool,

    /// Directory the artifact is written to
    #[arg(long, short = 'o', default_value = ".")]
    pub output: PathBuf,

    /// Override the image model
    #[arg(long)]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_args_parse_with_defaults() {
        let cli = Cli::parse_from(["pro-headshot", "edit", "-i", "selfie.jpg", "--instruction", "fix lighting"]);
        let Command::Edit(args) = cli.command else {
            panic!("expected edit subcommand");
        };
        assert_eq!(args.tier, Tier::Free);
        assert_eq!(args.center_x, 0.5);
        assert_eq!(args.zoom, 1.0);
        assert!(!args.no_crop);
    }

    #[test]
    fn tier_flag_parses_pro() {
        let cli = Cli::parse_from([
            "pro-headshot", "edit", "-i", "selfie.jpg", "--preset", "professional-studio",
            "--tier", "pro",
        ]);
        let Command::Edit(args) = cli.command else {
            panic!("expected edit subcommand");
        };
        assert_eq!(args.tier, Tier::Pro);
    }

    #[test]
    fn instruction_conflicts_with_preset() {
        let result = Cli::try_parse_from([
            "pro-headshot", "edit", "-i", "selfie.jpg",
            "--instruction", "x", "--preset", "professional-studio",
        ]);
        assert!(result.is_err());
    }
}
