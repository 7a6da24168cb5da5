//! crock32 CLI - Command-line interface for Crockford base-32 codes.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{check, decode, encode, pad};

#[derive(Parser)]
#[command(name = "crock32")]
#[command(about = "Encode, decode and verify Crockford base-32 codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an unsigned 32-bit integer
    Encode {
        /// Integer to encode
        value: u32,
        /// Append the check symbol
        #[arg(long)]
        check: bool,
        /// Left-pad the digits with zeros to at least WIDTH characters
        #[arg(long)]
        width: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode base-32 text (normalized first) into an integer
    Decode {
        /// Base-32 text, hyphens and look-alike letters allowed
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the canonical form of base-32 text
    Normalize {
        /// Base-32 text, hyphens and look-alike letters allowed
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the check symbol for an integer
    Check {
        /// Integer to compute the check symbol for
        value: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify base-32 text against a check symbol
    Verify {
        /// Base-32 value
        value: String,
        /// Check symbol
        check: String,
        /// Exit with error code if the check does not match
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify a value written with its trailing check symbol
    VerifyCode {
        /// Value followed by its check symbol
        code: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Left-pad a base-32 value with zeros
    Pad {
        /// Base-32 value
        value: String,
        /// Minimum width
        width: usize,
    },
    /// Strip zero padding from a base-32 value
    Trim {
        /// Padded base-32 text
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            value,
            check,
            width,
            json,
        } => encode::run(value, check, width, json),
        Commands::Decode { text, json } => decode::run(text, json),
        Commands::Normalize { text, json } => decode::normalize(text, json),
        Commands::Check { value, json } => check::generate(value, json),
        Commands::Verify {
            value,
            check,
            strict,
            json,
        } => check::verify(value, check, strict, json),
        Commands::VerifyCode { code, json } => check::verify_code(code, json),
        Commands::Pad { value, width } => pad::pad(value, width),
        Commands::Trim { text } => pad::trim(text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
