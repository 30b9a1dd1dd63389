use crate::artifact::CompressedArtifact;
use crate::config::{ToolConfig, DEFAULT_CONFIG_FILE};
use crate::engine::{compress, decompress};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "huffpress")]
#[command(about = "Huffman file compression")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, help = "Config file path")]
    config: Option<String>,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Overwrite existing output files")]
    force: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a .hprs artifact
    Compress {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    /// Restore the original file from an artifact
    Decompress {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    /// Show the code table and size statistics of an artifact
    Inspect {
        input: PathBuf,
    },
    /// Write the default config file
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

impl Cli {
    pub fn log_filter(&self) -> Result<String> {
        let config = ToolConfig::load(self.config.as_deref())?;
        Ok(config.log_filter)
    }
}

pub fn run_cli(cli: Cli) -> Result<()> {
    let mut config = ToolConfig::load(cli.config.as_deref())?;
    if cli.force {
        config.overwrite = true;
    }

    match cli.command {
        Commands::Compress { input, output } => {
            let output = output.unwrap_or_else(|| {
                append_extension(&input, &config.compressed_extension)
            });
            run_compress(&input, &output, &config, cli.json)
        }
        Commands::Decompress { input, output } => {
            let output = output.unwrap_or_else(|| {
                default_decompressed_path(&input, &config)
            });
            run_decompress(&input, &output, &config, cli.json)
        }
        Commands::Inspect { input } => run_inspect(&input, cli.json),
        Commands::GenerateConfig { output } => {
            ToolConfig::default().save(&output)?;
            println!("Config written to {}", output);
            Ok(())
        }
    }
}

fn run_compress(input: &Path, output: &Path, config: &ToolConfig, json: bool) -> Result<()> {
    check_output(output, config)?;

    let data = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let artifact = compress(&data)?;
    let bytes = artifact.to_bytes();
    std::fs::write(output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let ratio = bytes.len() as f64 / data.len() as f64;
    info!(
        "compressed {} ({} bytes) to {} ({} bytes)",
        input.display(),
        data.len(),
        output.display(),
        bytes.len()
    );

    if json {
        println!(
            "{}",
            serde_json::json!({
                "input": input.display().to_string(),
                "output": output.display().to_string(),
                "original_size": data.len(),
                "compressed_size": bytes.len(),
                "ratio": ratio,
                "symbols": artifact.table.len(),
            })
        );
    } else {
        println!(
            "{} -> {} ({} -> {} bytes, ratio {:.3})",
            input.display(),
            output.display(),
            data.len(),
            bytes.len(),
            ratio
        );
    }
    Ok(())
}

fn run_decompress(input: &Path, output: &Path, config: &ToolConfig, json: bool) -> Result<()> {
    check_output(output, config)?;

    let bytes = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let artifact = CompressedArtifact::parse(&bytes)?;
    let data = decompress(&artifact)?;
    std::fs::write(output, &data)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!("restored {} bytes to {}", data.len(), output.display());

    if json {
        println!(
            "{}",
            serde_json::json!({
                "input": input.display().to_string(),
                "output": output.display().to_string(),
                "restored_size": data.len(),
            })
        );
    } else {
        println!("{} -> {} ({} bytes)", input.display(), output.display(), data.len());
    }
    Ok(())
}

fn run_inspect(input: &Path, json: bool) -> Result<()> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let artifact = CompressedArtifact::parse(&bytes)?;

    if json {
        let codes: Vec<_> = artifact
            .table
            .iter()
            .map(|(symbol, code)| {
                serde_json::json!({
                    "symbol": symbol,
                    "code": render_code(code),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "symbols": artifact.table.len(),
                "payload_bits": artifact.bit_len,
                "payload_bytes": artifact.payload.len(),
                "artifact_bytes": bytes.len(),
                "codes": codes,
            })
        );
        return Ok(());
    }

    println!("Artifact: {}", input.display());
    println!("  symbols:       {}", artifact.table.len());
    println!("  payload bits:  {}", artifact.bit_len);
    println!("  payload bytes: {}", artifact.payload.len());
    println!("  total bytes:   {}", bytes.len());
    println!("Codes:");
    for (symbol, code) in artifact.table.iter() {
        println!("  {:>6} {}", render_symbol(symbol), render_code(code));
    }
    Ok(())
}

fn render_code(code: &[bool]) -> String {
    code.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

fn render_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        format!("'{}'", symbol as char)
    } else {
        format!("0x{:02x}", symbol)
    }
}

fn check_output(output: &Path, config: &ToolConfig) -> Result<()> {
    if output.exists() && !config.overwrite {
        bail!("output file {} already exists (use --force)", output.display());
    }
    Ok(())
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn default_decompressed_path(input: &Path, config: &ToolConfig) -> PathBuf {
    let suffix = format!(".{}", config.compressed_extension);
    let name = input.to_string_lossy();
    if let Some(stripped) = name.strip_suffix(&suffix) {
        PathBuf::from(stripped.to_string())
    } else {
        append_extension(input, &config.decompressed_extension)
    }
}
