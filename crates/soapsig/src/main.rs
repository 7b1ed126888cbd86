#![forbid(unsafe_code)]

//! soapsig CLI: verify, canonicalize and sign legacy SOAP messages.

use clap::{Parser, Subcommand};
use soapsig::Error;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "soapsig",
    about = "Verify RSA/SHA-512 signatures over the body of legacy SOAP messages",
    version
)]
struct Cli {
    /// Verbose output (debug logging on stderr; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the signature embedded in a message
    Verify {
        /// Message file ("-" for stdin)
        file: PathBuf,

        /// Public key (PEM, BEGIN PUBLIC KEY)
        #[arg(short = 'k', long, env = "SOAPSIG_PUBLIC_KEY")]
        key: PathBuf,
    },

    /// Write the canonical body bytes that the signature covers
    Canonicalize {
        /// Message file ("-" for stdin)
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the base64 signature value from the message header
    ExtractSignature {
        /// Message file ("-" for stdin)
        file: PathBuf,
    },

    /// Sign a message template whose header holds a Signature element
    Sign {
        /// Template file ("-" for stdin)
        template: PathBuf,

        /// Private key (PEM, PKCS#8 or PKCS#1)
        #[arg(short = 'k', long, env = "SOAPSIG_PRIVATE_KEY")]
        key: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the fixed message profile
    Info,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    soapsig::init();

    let result = match cli.command {
        Commands::Verify { file, key } => cmd_verify(file, key),
        Commands::Canonicalize { file, output } => cmd_canonicalize(file, output),
        Commands::ExtractSignature { file } => cmd_extract_signature(file),
        Commands::Sign {
            template,
            key,
            output,
        } => cmd_sign(template, key, output),
        Commands::Info => cmd_info(),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            tracing::debug!(stage = e.stage(), "command failed");
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_verify(file: PathBuf, key: PathBuf) -> Result<i32, Error> {
    let xml = read_input(&file)?;
    let key = soapsig::keys::load_public_key_file(&key)?;
    tracing::debug!(file = %file.display(), "verifying");

    let signature = soapsig::extract_signature(&xml)?;
    let valid = soapsig::verify(&xml, &signature, &key)?;
    println!("Signature is valid: {valid}");
    Ok(if valid { 0 } else { 1 })
}

fn cmd_canonicalize(file: PathBuf, output: Option<PathBuf>) -> Result<i32, Error> {
    let xml = read_input(&file)?;
    let canonical = soapsig::canonicalize_body(&xml)?;
    write_output(output, &canonical)?;
    Ok(0)
}

fn cmd_extract_signature(file: PathBuf) -> Result<i32, Error> {
    let xml = read_input(&file)?;
    println!("{}", soapsig::extract_signature(&xml)?);
    Ok(0)
}

fn cmd_sign(template: PathBuf, key: PathBuf, output: Option<PathBuf>) -> Result<i32, Error> {
    let xml = read_input(&template)?;
    let key = soapsig::keys::load_private_key_file(&key)?;
    tracing::debug!(file = %template.display(), "signing");

    let signed = soapsig::sign_message(&xml, &key)?;
    write_output(output, signed.as_bytes())?;
    Ok(0)
}

fn cmd_info() -> Result<i32, Error> {
    use soapsig::core::{algorithm, ns};

    println!("soapsig: legacy SOAP body signatures");
    println!();
    println!("Envelope namespace:");
    println!("  {}", ns::SOAP_ENV);
    println!();
    println!("Signature location:");
    println!("  {}", ns::path::SIGNATURE);
    println!();
    println!("Signed content:");
    println!("  element children of {}, namespaces stripped,", ns::path::BODY);
    println!("  C14N 1.0 without comments, concatenated");
    println!("  {}", algorithm::C14N);
    println!();
    println!("Digest:");
    println!("  {}", algorithm::SHA512);
    println!();
    println!("Signature algorithms:");
    for name in soapsig::crypto::registry().signature_names() {
        println!("  {name}");
    }
    println!();
    println!("Key formats:");
    println!("  PEM SubjectPublicKeyInfo (RSA) for verification");
    println!("  PEM PKCS#8 / PKCS#1 (RSA) for signing");
    Ok(0)
}

// ── Utility functions ────────────────────────────────────────────────

fn read_input(path: &Path) -> Result<String, Error> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn write_output(path: Option<PathBuf>, data: &[u8]) -> Result<(), Error> {
    match path {
        Some(p) => Ok(std::fs::write(&p, data)?),
        None => Ok(std::io::stdout().write_all(data)?),
    }
}
