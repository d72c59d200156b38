//! Raw vCard parameters as they appear on a content line.

/// A parameter before interpretation.
///
/// Parameters can have multiple values (e.g., `TYPE=home,work`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Interprets a vCard 2.1 parameter written without a name
    /// (`TEL;HOME;VOICE:`, `NOTE;QUOTED-PRINTABLE:`).
    ///
    /// Transfer encodings become `ENCODING`, everything else `TYPE`.
    #[must_use]
    pub fn bare(token: &str) -> Self {
        let token = token.trim();
        let name = if ["QUOTED-PRINTABLE", "BASE64", "8BIT", "7BIT", "B"]
            .iter()
            .any(|encoding| encoding.eq_ignore_ascii_case(token))
        {
            "ENCODING"
        } else {
            "TYPE"
        };
        Self::new(name, token)
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_single_value() {
        let param = VCardParameter::new("type", "home");
        assert_eq!(param.name, "TYPE");
        assert_eq!(param.value(), Some("home"));
    }

    #[test]
    fn parameter_has_value() {
        let param = VCardParameter::multi("TYPE", vec!["home".into(), "work".into()]);
        assert!(param.has_value("home"));
        assert!(param.has_value("HOME"));
        assert!(param.has_value("work"));
        assert!(!param.has_value("cell"));
    }

    #[test]
    fn bare_parameters() {
        assert_eq!(VCardParameter::bare("HOME"), VCardParameter::new("TYPE", "HOME"));
        assert_eq!(
            VCardParameter::bare("quoted-printable"),
            VCardParameter::new("ENCODING", "quoted-printable")
        );
    }
}
