use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use vcardkit_core::config::SerializationConfig;
use vcardkit_core::constants::PRODUCT_ID;
use vcardkit_rfc::rfc::vcard::core::TextProperty;
use vcardkit_rfc::rfc::vcard::encoding::decode_bytes;
use vcardkit_rfc::rfc::vcard::{VCardVersion, VcfOptions, parse, serialize};

/// ## Summary
/// Reads a VCF file, refusing files larger than `max_size` bytes.
///
/// Input that is not valid UTF-8 is decoded with replacement characters.
///
/// ## Errors
/// Returns an error if the file cannot be inspected or read, or exceeds
/// `max_size`.
pub fn read_vcf(path: &Path, max_size: u64) -> anyhow::Result<String> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to inspect {}", path.display()))?;
    if metadata.len() > max_size {
        bail!(
            "{} is {} bytes, larger than the limit of {max_size} bytes",
            path.display(),
            metadata.len()
        );
    }

    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), size = bytes.len(), "Read input file");

    Ok(decode_bytes(&bytes, None))
}

/// ## Summary
/// Parses a VCF document and writes it back with the configured version
/// and options. Cards without a `PRODID` are stamped with ours.
///
/// ## Errors
/// Returns an error if the configured version is unknown.
pub fn convert(input: &str, config: &SerializationConfig) -> anyhow::Result<String> {
    let version: VCardVersion = config
        .version
        .trim()
        .parse()
        .map_err(|()| anyhow::anyhow!("unsupported vCard version {}", config.version))?;
    let options = VcfOptions::from(config);

    let mut cards = parse(input).context("failed to parse vCard document")?;
    for card in &mut cards {
        if card.product_id.is_none() {
            card.product_id = Some(TextProperty::new(PRODUCT_ID));
        }
    }

    tracing::info!(count = cards.len(), %version, "Converting vCards");

    Ok(serialize(&cards, version, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(version: &str) -> SerializationConfig {
        SerializationConfig {
            version: version.to_string(),
            write_groups: true,
            write_empty_properties: false,
            write_non_standard_properties: true,
            write_non_standard_parameters: false,
            write_rfc9554_extensions: false,
            include_agent_as_separate_vcard: false,
            limit_line_length: true,
        }
    }

    const INPUT: &str = "BEGIN:VCARD\r\nVERSION:2.1\r\nFN:Jane Doe\r\nEND:VCARD\r\n";

    #[test_log::test]
    fn converts_to_configured_version() {
        let output = convert(INPUT, &config("4.0")).unwrap();

        assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\n"));
        assert!(output.contains(&format!("PRODID:{PRODUCT_ID}\r\n")));
        assert!(output.contains("FN:Jane Doe\r\n"));
    }

    #[test]
    fn keeps_existing_product_id() {
        let input = "BEGIN:VCARD\r\nVERSION:3.0\r\nPRODID:-//Other//EN\r\nFN:x\r\nEND:VCARD\r\n";
        let output = convert(input, &config("3.0")).unwrap();

        assert!(output.contains("PRODID:-//Other//EN\r\n"));
        assert!(!output.contains(PRODUCT_ID));
    }

    #[test]
    fn rejects_unknown_version() {
        assert!(convert(INPUT, &config("5.0")).is_err());
    }

    #[test]
    fn unknown_input_version_still_converts() {
        let input = "BEGIN:VCARD\r\nVERSION:9.9\r\nFN:Someone\r\nEND:VCARD\r\n";
        let output = convert(input, &config("4.0")).unwrap();

        assert!(output.contains("FN:Someone\r\n"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_vcf(Path::new("does/not/exist.vcf"), 1024).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.vcf"));
    }
}
