//! Fleet OpenAPI converter CLI
//!
//! Command-line interface for converting markdown REST API documentation
//! into an OpenAPI 3.1 specification (YAML and JSON).

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use fleet_openapi_converter_generator::SpecWriter;
use fleet_openapi_converter_parser::MarkdownParser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleet-openapi-converter")]
#[command(version, about = "Convert markdown REST API documentation to OpenAPI 3.1", long_about = None)]
struct Cli {
    /// Path to the markdown API documentation
    #[arg(default_value = "rest-api.md")]
    input: PathBuf,

    /// Path for the generated YAML specification (the JSON form is written
    /// next to it)
    #[arg(default_value = "openapi.yaml")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{} Reading {}", "→".cyan(), cli.input.display());
    let parser = MarkdownParser::from_file(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    if cli.verbose {
        println!("  Lines: {}", parser.line_count());
    }

    println!("{} Parsing markdown...", "→".cyan());
    let document = parser.parse().context("Failed to parse documentation")?;

    println!(
        "{} Writing OpenAPI spec to {}",
        "→".cyan(),
        cli.output.display()
    );
    let writer = SpecWriter::new(document);
    let written = writer
        .write(&cli.output)
        .context("Failed to write OpenAPI spec")?;

    println!("\n{}", "✓ OpenAPI spec generated successfully!".green().bold());
    println!("  - YAML: {}", written.yaml.display());
    println!("  - JSON: {}", written.json.display());
    println!("  - Paths found: {}", writer.document().paths.len());

    if cli.verbose {
        println!("\n{}", "Paths:".bold());
        for (path, item) in &writer.document().paths {
            let methods: Vec<&str> = item.methods().iter().map(|m| m.as_str()).collect();
            println!("  • {} ({})", path.cyan(), methods.join(", "));
        }
    }

    Ok(())
}
