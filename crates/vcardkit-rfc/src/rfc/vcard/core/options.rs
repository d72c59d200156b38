//! Serialization option flags.

use bitflags::bitflags;
use vcardkit_core::config::SerializationConfig;

bitflags! {
    /// Switches consulted by the serializer and by each property while it
    /// prepares and appends its value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VcfOptions: u32 {
        /// Write `group.` prefixes.
        const WRITE_GROUPS = 1;
        /// Write properties whose value is empty.
        const WRITE_EMPTY_PROPERTIES = 1 << 1;
        /// Write `X-` properties.
        const WRITE_NON_STANDARD_PROPERTIES = 1 << 2;
        /// Write `X-` parameters.
        const WRITE_NON_STANDARD_PARAMETERS = 1 << 3;
        /// Write the RFC 9554 components of N and ADR (4.0 only).
        const WRITE_RFC9554_EXTENSIONS = 1 << 4;
        /// In 4.0, write embedded relation cards as documents of their own.
        const INCLUDE_AGENT_AS_SEPARATE_VCARD = 1 << 5;
        /// Fold lines longer than 75 octets.
        const LIMIT_LINE_LENGTH = 1 << 6;
    }
}

impl Default for VcfOptions {
    fn default() -> Self {
        Self::WRITE_GROUPS | Self::WRITE_NON_STANDARD_PROPERTIES | Self::LIMIT_LINE_LENGTH
    }
}

impl From<&SerializationConfig> for VcfOptions {
    fn from(config: &SerializationConfig) -> Self {
        let mut options = Self::empty();
        options.set(Self::WRITE_GROUPS, config.write_groups);
        options.set(Self::WRITE_EMPTY_PROPERTIES, config.write_empty_properties);
        options.set(
            Self::WRITE_NON_STANDARD_PROPERTIES,
            config.write_non_standard_properties,
        );
        options.set(
            Self::WRITE_NON_STANDARD_PARAMETERS,
            config.write_non_standard_parameters,
        );
        options.set(Self::WRITE_RFC9554_EXTENSIONS, config.write_rfc9554_extensions);
        options.set(
            Self::INCLUDE_AGENT_AS_SEPARATE_VCARD,
            config.include_agent_as_separate_vcard,
        );
        options.set(Self::LIMIT_LINE_LENGTH, config.limit_line_length);
        options
    }
}
