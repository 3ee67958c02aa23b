// Command line front end
// Parses the `encrypt`, `decrypt` and `genkey` subcommands and runs them

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, Rng};
use tracing::{debug, warn};

use crate::rsa::codec::{encode_str, parse_decimal};
use crate::rsa::{self, KeyGenConfig};
use crate::util::file_ops::{load_key, save_key, KeyKind};

/// Textbook RSA: no padding, for study only
#[derive(Parser, Debug)]
#[command(name = "rsa", version, about)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt a message with a public key and print the ciphertext in decimal
    Encrypt {
        /// Key file containing n and e
        keyfile: PathBuf,
        message: String,
    },

    /// Decrypt a decimal ciphertext with a private key and print the message
    Decrypt {
        /// Key file containing n and d
        keyfile: PathBuf,
        ciphertext: String,

        /// Print the recovered bytes hex-encoded
        #[arg(long)]
        hex: bool,
    },

    /// Generate a key pair and print the private key file
    Genkey {
        /// Modulus size, a multiple of 16
        numbits: u32,

        /// Preferred public exponent
        #[arg(long, value_name = "E")]
        exponent: Option<u64>,

        /// Write the private key here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also write the public key to this file
        #[arg(long, value_name = "FILE")]
        public_output: Option<PathBuf>,
    },
}

/// Run one parsed command, writing its result to `out`.
///
/// Nothing is written to `out` unless the command succeeds.
pub fn run_with<R, W>(cli: &Cli, rng: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: Rng + CryptoRng + ?Sized,
    W: Write,
{
    match &cli.command {
        Command::Encrypt { keyfile, message } => {
            let key = load_key(keyfile, KeyKind::Public).context("failed to load public key")?;
            debug!(bits = key.bits(), "loaded public key");

            let c = rsa::encrypt(&encode_str(message), &key)
                .with_context(|| format!("cannot encrypt with a {}-bit key", key.bits()))?;
            writeln!(out, "{}", c)?;
        }

        Command::Decrypt {
            keyfile,
            ciphertext,
            hex: as_hex,
        } => {
            let key = load_key(keyfile, KeyKind::Private).context("failed to load private key")?;
            debug!(bits = key.bits(), "loaded private key");

            let Some(c) = parse_decimal(ciphertext.trim()) else {
                bail!("ciphertext must be a non-negative decimal integer");
            };
            let plaintext = rsa::decrypt_to_bytes(&c, &key).context("decryption failed")?;

            if *as_hex {
                writeln!(out, "{}", hex::encode(&plaintext))?;
            } else {
                out.write_all(&plaintext)?;
                writeln!(out)?;
            }
        }

        Command::Genkey {
            numbits,
            exponent,
            output,
            public_output,
        } => {
            let mut config = KeyGenConfig::default();
            if let Some(e) = exponent {
                config = config.with_public_exponent(*e);
            }

            let key = rsa::generate_with_config(*numbits, &config, rng)
                .with_context(|| format!("cannot generate a {}-bit key", numbits))?;

            // Private file first; a failed public write must not leave it behind
            if let Some(path) = output {
                save_key(path, &key, KeyKind::Private)?;
            }
            if let Some(path) = public_output {
                if let Err(err) = save_key(path, &key, KeyKind::Public) {
                    if let Some(private_path) = output {
                        if let Err(cleanup) = fs::remove_file(private_path) {
                            warn!(
                                path = %private_path.display(),
                                %cleanup,
                                "cannot remove private key file"
                            );
                        }
                    }
                    return Err(err.into());
                }
            }
            if output.is_none() {
                out.write_all(rsa::write_private(&key)?.as_bytes())?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
