//! Subcommand handlers

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use app_forge::{classify, design_prompt, DesignGenerator, GenerationRequest};
use forge_inference::constants::env;
use forge_inference::BackendRegistry;

use crate::args::{Cli, Commands, ConfigCommand, GenerateArgs};
use crate::attachment;
use crate::config::ForgeConfig;

pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.or_else(ForgeConfig::default_path);

    match cli.command {
        Commands::Generate(args) => {
            let config = load_config(config_path.as_deref()).await?;
            generate(config, args).await
        }
        Commands::Classify { idea, json } => classify_idea(&idea, json),
        Commands::Backends => list_backends(),
        Commands::Config { command } => config_command(command, config_path).await,
    }
}

async fn load_config(path: Option<&Path>) -> Result<ForgeConfig> {
    let mut config = match path {
        Some(path) => ForgeConfig::load(path)
            .await
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => ForgeConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

fn apply_overrides(config: &mut ForgeConfig, args: &GenerateArgs) {
    if let Some(ref backend) = args.backend {
        config.backend = backend.clone();
    }
    if let Some(ref model) = args.model {
        config.model = model.clone();
    }
    if let Some(temperature) = args.temperature {
        config.temperature = temperature;
    }
    if let Some(ref base_url) = args.base_url {
        config.connection.base_url = Some(base_url.clone());
    }
    if let Some(timeout) = args.timeout {
        config.connection.timeout_secs = Some(timeout);
    }
}

async fn generate(mut config: ForgeConfig, args: GenerateArgs) -> Result<()> {
    apply_overrides(&mut config, &args);

    let registry = BackendRegistry::new();
    let backend = registry
        .create(&config.backend, &config.connection)
        .with_context(|| format!("Cannot create backend '{}'", config.backend))?;

    if backend.capabilities().requires_api_key && config.connection.api_key().is_none() {
        bail!(
            "{} needs an API key: set {} or {}, or add it to the config file",
            backend.name(),
            env::API_KEY,
            env::GEMINI_API_KEY
        );
    }

    let mut request = GenerationRequest::new(args.idea.as_str());
    if let Some(ref image) = args.image {
        request = request.with_attachment(attachment::load(image, args.mime.as_deref()).await?);
    }

    let generator = DesignGenerator::new(Arc::from(backend), config.generation_settings());
    let result = generator
        .generate(&request)
        .await
        .context("Design generation failed")?;

    if let Some(ref path) = args.prompt_output {
        match design_prompt(&result.html) {
            Some(prompt) => write_file(path, prompt).await?,
            None => log::warn!("Generated HTML has no embedded design prompt"),
        }
    }

    match args.output {
        Some(ref path) => write_file(path, &result.html).await?,
        None => println!("{}", result.html),
    }

    Ok(())
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {:?}", path))?;
    log::info!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}

fn classify_idea(idea: &str, json: bool) -> Result<()> {
    let profile = classify(idea);

    if json {
        let value = serde_json::json!({
            "category": profile.category,
            "name": profile.name,
            "design_style": profile.design_style,
            "key_features": profile.key_features,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Category:     {}", profile.name);
        println!("Design style: {}", profile.design_style);
        println!("Key features: {}", profile.key_features);
    }
    Ok(())
}

fn list_backends() -> Result<()> {
    for info in BackendRegistry::new().list() {
        println!("{}", info.name);
        println!("    {}", info.description);
        println!(
            "    vision: {}, api key required: {}",
            info.capabilities.vision, info.capabilities.requires_api_key
        );
    }
    Ok(())
}

async fn config_command(command: ConfigCommand, path: Option<PathBuf>) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let mut config = load_config(path.as_deref()).await?;
            if config.connection.api_key.is_some() {
                config.connection.api_key = Some("<redacted>".to_string());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            let path = path.context("No config directory available; pass --config")?;
            if path.exists() && !force {
                bail!("{:?} already exists; use --force to overwrite", path);
            }
            ForgeConfig::default().save(&path).await?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
