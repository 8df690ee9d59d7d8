//! Command execution

use crate::config::KeygenConfig;
use anyhow::Context;
use fusekey_key::{EntropySource, HmacKey, KeyFile, KeyGenerator};
use log::info;
use std::io::Write;
use std::path::Path;

/// Label preceding a freshly generated key on stdout
pub const GENERATED_LABEL: &str = "Chiave generata:";

/// Label preceding a key read back from disk
pub const LOADED_LABEL: &str = "Chiave letta:";

/// Label preceding a fingerprint when key output is suppressed
pub const FINGERPRINT_LABEL: &str = "Impronta:";

/// Generate a key from the OS CSPRNG, save it, and report it on `out`
///
/// # Errors
///
/// Fails if entropy is unavailable, the key file cannot be written, or
/// `out` cannot be written.
pub fn generate(config: &KeygenConfig, out: &mut impl Write) -> anyhow::Result<()> {
    generate_with(&mut KeyGenerator::new(), config, out)
}

/// [`generate`] with an explicit generator
///
/// The file is written before anything is printed, so a reported key is
/// always one that reached disk.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with<E: EntropySource>(
    generator: &mut KeyGenerator<E>,
    config: &KeygenConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let key = generator.generate().context("Key generation failed")?;

    let file = KeyFile::new(&config.output);
    file.save(&key)
        .with_context(|| format!("Failed to write key file {}", file.path().display()))?;

    report(&key, GENERATED_LABEL, config.print_key, out)
}

/// Read a key file and report it on `out`
///
/// # Errors
///
/// Fails if the file cannot be read or is not exactly 32 bytes.
pub fn inspect(path: &Path, print_key: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let key = KeyFile::new(path)
        .load()
        .with_context(|| format!("Failed to read key file {}", path.display()))?;
    info!("Key file {} is valid", path.display());

    report(&key, LOADED_LABEL, print_key, out)
}

fn report(
    key: &HmacKey,
    label: &str,
    print_key: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if print_key {
        writeln!(out, "{label} {}", key.to_hex())?;
    } else {
        writeln!(out, "{FINGERPRINT_LABEL} {}", key.fingerprint())?;
    }
    out.flush()?;
    Ok(())
}
