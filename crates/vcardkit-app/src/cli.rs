use std::path::PathBuf;

use clap::Parser;
use vcardkit_core::config::{LoggingConfig, SerializationConfig};

/// Converts vCard files between versions 2.1, 3.0 and 4.0
#[derive(Parser, Debug)]
#[command(name = "vcardkit", author, version, about, long_about = None)]
pub struct Cli {
    /// VCF files to convert; the cards are written to stdout in order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Target vCard version, overriding `serialization.version`
    #[arg(short, long = "to", value_name = "VERSION", value_parser = ["2.1", "3.0", "4.0"])]
    pub target: Option<String>,

    /// Write embedded AGENT cards as documents of their own (4.0 only)
    #[arg(long)]
    pub separate_agents: bool,

    /// Keep long lines unfolded
    #[arg(long)]
    pub no_fold: bool,

    /// Log filter, overriding `logging.level`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Applies the command-line switches on top of the loaded settings.
    pub fn apply(&self, serialization: &mut SerializationConfig, logging: &mut LoggingConfig) {
        if let Some(version) = &self.target {
            serialization.version.clone_from(version);
        }
        if self.separate_agents {
            serialization.include_agent_as_separate_vcard = true;
        }
        if self.no_fold {
            serialization.limit_line_length = false;
        }
        if let Some(level) = &self.log_level {
            logging.level.clone_from(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn settings() -> (SerializationConfig, LoggingConfig) {
        let serialization = SerializationConfig {
            version: "3.0".to_string(),
            write_groups: true,
            write_empty_properties: false,
            write_non_standard_properties: true,
            write_non_standard_parameters: false,
            write_rfc9554_extensions: false,
            include_agent_as_separate_vcard: false,
            limit_line_length: true,
        };
        let logging = LoggingConfig {
            level: "info".to_string(),
        };
        (serialization, logging)
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn files_are_required() {
        let err = Cli::try_parse_from(["vcardkit"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn help_is_not_a_file() {
        let err = Cli::try_parse_from(["vcardkit", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let err = Cli::try_parse_from(["vcardkit", "--to", "5.0", "a.vcf"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn switches_override_settings() {
        let cli = Cli::try_parse_from([
            "vcardkit",
            "-t",
            "4.0",
            "--separate-agents",
            "--no-fold",
            "--log-level",
            "debug",
            "a.vcf",
            "b.vcf",
        ])
        .unwrap();
        assert_eq!(cli.files, [PathBuf::from("a.vcf"), PathBuf::from("b.vcf")]);

        let (mut serialization, mut logging) = settings();
        cli.apply(&mut serialization, &mut logging);

        assert_eq!(serialization.version, "4.0");
        assert!(serialization.include_agent_as_separate_vcard);
        assert!(!serialization.limit_line_length);
        assert_eq!(logging.level, "debug");
    }

    #[test]
    fn settings_kept_without_switches() {
        let cli = Cli::try_parse_from(["vcardkit", "a.vcf"]).unwrap();

        let (mut serialization, mut logging) = settings();
        cli.apply(&mut serialization, &mut logging);

        assert_eq!(serialization.version, "3.0");
        assert!(serialization.limit_line_length);
        assert_eq!(logging.level, "info");
    }
}
