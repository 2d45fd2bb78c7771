use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::error;

use sepal::{
    adapters::FileSecureElement,
    api::{ObjectClass, ObjectHandle},
    config::{LabelConfig, ObjectEntryConfig},
    get_value_cleanup, ObjectDirectory,
};

#[derive(Parser, Debug)]
#[command(name = "sepal")]
#[command(about = "PKCS#11 object directory on a file backed secure element", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Directory holding the emulated data objects
    #[arg(long, default_value = "sepal-store")]
    pub store: PathBuf,

    /// Label (and slot address) of the device certificate
    #[arg(long)]
    pub certificate_label: Option<String>,

    /// Label (and slot address) of the device private key
    #[arg(long)]
    pub private_key_label: Option<String>,

    /// Label (and slot address) of the device public key
    #[arg(long)]
    pub public_key_label: Option<String>,

    /// Label (and slot address) of the code verification key
    #[arg(long)]
    pub code_verification_label: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the handle of the object with the given label
    Find { label: String },

    /// Store an object read from a file or stdin under the given label
    Save {
        label: String,

        /// Read the object from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Input is hex encoded
        #[arg(long)]
        hex: bool,
    },

    /// Write the value of the object with the given handle to stdout
    Get {
        handle: u64,

        /// Hex encode the output
        #[arg(long)]
        hex: bool,
    },

    /// Show the object table
    Info,
}

impl Cli {
    fn label_config(&self) -> LabelConfig {
        let overrides = [
            (ObjectClass::DeviceCertificate, &self.certificate_label),
            (ObjectClass::DevicePrivateKey, &self.private_key_label),
            (ObjectClass::DevicePublicKey, &self.public_key_label),
            (ObjectClass::CodeVerificationKey, &self.code_verification_label),
        ];

        overrides
            .into_iter()
            .fold(LabelConfig::default(), |config, (class, label)| match label {
                Some(label) => config.with_entry(class, ObjectEntryConfig::new(label.as_str())),
                None => config,
            })
    }
}

fn read_input(input: Option<&PathBuf>, hex_encoded: bool) -> anyhow::Result<Vec<u8>> {
    let raw = match input {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read object from stdin")?;
            buf
        }
    };

    if hex_encoded {
        let text = String::from_utf8(raw).context("Hex input is not UTF-8")?;
        hex::decode(text.trim()).map_err(|e| anyhow::anyhow!("Invalid hex input: {}", e))
    } else {
        Ok(raw)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let element = FileSecureElement::open(&cli.store)
        .with_context(|| format!("Failed to open store {}", cli.store.display()))?;
    let mut directory = ObjectDirectory::with_config(element, &cli.label_config())
        .context("Invalid label configuration")?;

    match &cli.command {
        Commands::Find { label } => {
            let handle = directory.find(label.as_bytes());
            if !handle.is_valid() {
                anyhow::bail!("No object is labelled {:?}", label);
            }
            println!("{}", handle);
        }

        Commands::Save {
            label,
            input,
            hex: hex_input,
        } => {
            let data = read_input(input.as_ref(), *hex_input)?;
            let handle = directory
                .try_save(label.as_bytes(), &data)
                .with_context(|| format!("Failed to save object {:?}", label))?;
            println!("{}", handle);
        }

        Commands::Get {
            handle,
            hex: hex_output,
        } => {
            let value = match directory.get_value(ObjectHandle::new(*handle)) {
                Ok(value) => value,
                Err(e) => {
                    error!("Reading object {} failed: {}", handle, e);
                    anyhow::bail!("{}", e.return_value());
                }
            };

            let mut stdout = io::stdout().lock();
            if *hex_output {
                writeln!(stdout, "{}", hex::encode(value.as_bytes()))?;
            } else {
                stdout.write_all(value.as_bytes())?;
            }
            stdout.flush()?;
            get_value_cleanup(Some(value));
        }

        Commands::Info => {
            println!("store: {}", directory.secure_element().root().display());
            for entry in directory.entries() {
                let slot = match entry.slot() {
                    Ok(oid) if entry.is_transferable() => oid.to_string(),
                    Ok(oid) => format!("{} (on chip only)", oid),
                    Err(e) => format!("unusable: {}", e),
                };
                println!(
                    "{:>2}  {:<22}  label={:<12}  slot={}",
                    entry.handle().value(),
                    entry.class().name(),
                    entry.label().to_string(),
                    slot
                );
            }
        }
    }

    Ok(())
}
