//! Command-line interface implementation

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::emit::{EmitOptions, Emitter, KotlinEmitter, SwiftEmitter};
use crate::output::{generate_output_path, write_text};
use crate::parser::parse_spec;
use crate::schema::TokenSpec;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Tokgen - generate platform source modules from a design token spec
#[derive(Parser)]
#[command(name = "tokgen")]
#[command(about = "Tokgen - generate platform source modules from a design token spec")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Target platform selection for the generate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    /// iOS / SwiftUI (DesignTokens.swift)
    Swift,
    /// Android / Jetpack Compose (DesignTokens.kt)
    Kotlin,
    /// Both platforms
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate platform source files from a token spec
    Generate {
        /// Input JSON token specification
        input: PathBuf,

        /// Output file or directory.
        /// If omitted: DesignTokens.{ext} next to the input.
        /// If directory (ends with /): dir/DesignTokens.{ext}
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target platform
        #[arg(long, value_enum, default_value_t = Platform::All)]
        platform: Platform,
    },

    /// Validate a token spec without generating output
    Check {
        /// Input JSON token specification
        input: PathBuf,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output, platform } => {
            run_generate(&input, output.as_deref(), platform)
        }
        Commands::Check { input } => run_check(&input),
    }
}

fn emitters_for(platform: Platform) -> Vec<Box<dyn Emitter>> {
    match platform {
        Platform::Swift => vec![Box::new(SwiftEmitter::new())],
        Platform::Kotlin => vec![Box::new(KotlinEmitter::new())],
        Platform::All => vec![Box::new(SwiftEmitter::new()), Box::new(KotlinEmitter::new())],
    }
}

/// Execute the generate command
fn run_generate(input: &Path, output: Option<&Path>, platform: Platform) -> ExitCode {
    let source = match fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let spec = match parse_spec(&source) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let emitters = emitters_for(platform);
    let is_single_platform = emitters.len() == 1;
    let options = EmitOptions::new(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

    for emitter in &emitters {
        let document = emitter.generate(&spec, &options);
        let path = generate_output_path(
            input,
            output,
            &emitter.default_file_name(),
            emitter.extension(),
            is_single_platform,
        );
        if let Err(e) = write_text(&document, &path) {
            eprintln!("Error: Cannot write '{}': {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("Generated {} ({})", path.display(), emitter.platform_name());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the check command: parse-only validation
fn run_check(input: &Path) -> ExitCode {
    let source = match fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match parse_spec(&source) {
        Ok(spec) => {
            println!(
                "OK: {} token categories, {} components",
                category_count(&spec),
                spec.components.as_ref().map_or(0, |c| c.len())
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn category_count(spec: &TokenSpec) -> usize {
    let tokens = &spec.tokens;
    [
        tokens.color.is_some(),
        tokens.typography.is_some(),
        tokens.spacing.is_some(),
        tokens.border_radius.is_some(),
        tokens.shadow.is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count()
}
