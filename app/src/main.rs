//! pro-headshot CLI entry point.
//!
//! Wires configuration, the Gemini client, and the image pipeline into the
//! `edit` and `presets` subcommands.

mod cli;
mod config;
mod pipeline;
mod presets;

use anyhow::Context;
use clap::Parser;
use gemini_client::GeminiClient;
use image_pipeline::{GenerationQuota, font};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, EditArgs};
use pipeline::{CropView, EditError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Edit(args) => run_edit_command(args).await,
        Command::Presets => {
            print_presets();
            Ok(())
        }
    }
}

async fn run_edit_command(args: EditArgs) -> anyhow::Result<()> {
    let config = config::AppConfig::from_env();
    let instruction = resolve_instruction(&args)?;

    let mut client = GeminiClient::from_env()?;
    if let Some(model) = &args.model {
        client = client.with_model(model.clone());
    }

    let font = font::resolve_font(config.watermark_font.as_deref())?;

    let source_bytes = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let mut quota = GenerationQuota::default();
    if !quota.try_consume(args.tier) {
        return Err(EditError::QuotaExhausted.into());
    }

    let view = (!args.no_crop).then_some(CropView {
        center_x: args.center_x,
        center_y: args.center_y,
        zoom: args.zoom,
    });

    let artifact =
        pipeline::run_edit(&client, &font, &source_bytes, view, &instruction, args.tier).await?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let path = args.output.join(&artifact.suggested_filename);
    std::fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), size = artifact.bytes.len(), "Saved artifact");
    println!("{}", path.display());
    Ok(())
}

/// Resolve the effective instruction from `--instruction` / `--preset`.
fn resolve_instruction(args: &EditArgs) -> anyhow::Result<String> {
    if let Some(instruction) = &args.instruction {
        return Ok(instruction.clone());
    }
    if let Some(id) = &args.preset {
        let preset = presets::find_preset(id)
            .with_context(|| format!("Unknown preset '{id}', see `pro-headshot presets`"))?;
        if preset.id == presets::CUSTOM_PRESET_ID {
            anyhow::bail!(
                "The '{}' preset needs --instruction (e.g. \"{}\")",
                preset.label,
                presets::DEFAULT_CUSTOM_PROMPT
            );
        }
        return Ok(preset.prompt.to_string());
    }
    anyhow::bail!("Pass --instruction or --preset, see `pro-headshot presets`")
}

fn print_presets() {
    for preset in presets::PRESET_PROMPTS {
        println!("{:<22} {:<18} {}", preset.id, preset.label, preset.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit_args(instruction: Option<&str>, preset: Option<&str>) -> EditArgs {
        let mut argv = vec![
            "pro-headshot".to_string(),
            "edit".to_string(),
            "-i".to_string(),
            "selfie.jpg".to_string(),
        ];
        if let Some(i) = instruction {
            argv.push("--instruction".to_string());
            argv.push(i.to_string());
        }
        if let Some(p) = preset {
            argv.push("--preset".to_string());
            argv.push(p.to_string());
        }
        let cli = Cli::parse_from(argv);
        match cli.command {
            Command::Edit(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn resolve_instruction_prefers_explicit_text() {
        let args = edit_args(Some("make it moody"), None);
        assert_eq!(resolve_instruction(&args).unwrap(), "make it moody");
    }

    #[test]
    fn resolve_instruction_expands_preset() {
        let args = edit_args(None, Some("professional-studio"));
        let instruction = resolve_instruction(&args).unwrap();
        assert!(instruction.contains("studio headshot"));
    }

    #[test]
    fn resolve_instruction_rejects_bare_custom_preset() {
        let args = edit_args(None, Some(presets::CUSTOM_PRESET_ID));
        assert!(resolve_instruction(&args).is_err());
    }

    #[test]
    fn resolve_instruction_requires_some_source() {
        let args = edit_args(None, None);
        assert!(resolve_instruction(&args).is_err());
    }
}
