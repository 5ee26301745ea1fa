use bh_lexer::DEFAULT_MAX_TAGS;
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Options controlling conversion.
///
/// All fields are optional in config file:
///
/// ```toml
/// max_tags = 200
/// center = true
/// report_unknown_tags = false
/// sanitize = false
/// strict_sanitize = false
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Max count of tags recognized in one input.
    ///
    /// Tag-shaped text after the limit is kept as plain text.
    pub max_tags: usize,

    /// Support `[center]` or not.
    ///
    /// When disabled, the tag is handled as an unknown tag.
    pub center: bool,

    /// Record [ConvertError::UnknownTag](crate::ConvertError::UnknownTag) on unsupported
    /// tags instead of dropping them silently.
    pub report_unknown_tags: bool,

    /// Run the generated html through a html5 parser and serialize it again, to fix
    /// unbalanced or misnested elements.
    pub sanitize: bool,

    /// Fail sanitizing on any error the parser reported, rather than the recovered result.
    ///
    /// Only works with `sanitize`.
    pub strict_sanitize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_tags: DEFAULT_MAX_TAGS,
            center: true,
            report_unknown_tags: false,
            sanitize: false,
            strict_sanitize: false,
        }
    }
}

impl Options {
    /// Load options from toml text.
    ///
    /// # Errors
    ///
    /// When the text is not valid toml, or has unknown fields or wrong value types.
    pub fn from_toml_str(data: &str) -> Result<Self, OptionsError> {
        let options = toml::from_str(data)?;
        Ok(options)
    }
}
