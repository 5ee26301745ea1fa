/// Problems met when converting bbcode.
///
/// Except [ConvertError::Sanitize], all errors are recoverable: they are recorded and the
/// conversion goes on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Tag name not supported.
    ///
    /// Only reported when enabled in options.
    ///
    /// * 0: tag name.
    #[error("bbcode: unknown tag '{0}'")]
    UnknownTag(String),

    /// Url is not an absolute http(s) url with host.
    ///
    /// Also used when an image expects url but got another tag.
    ///
    /// * 0: the invalid url, or the tag name.
    #[error("bbcode: invalid url '{0}'")]
    InvalidUrl(String),

    /// Tag not closed or opened, or the content it requires is missing.
    ///
    /// * 0: tag name.
    #[error("bbcode: incomplete tag '{0}'")]
    IncompleteTag(String),

    /// Html sanitizing failed, no html produced.
    #[error("bbcode: {0}")]
    Sanitize(#[from] SanitizeError),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    /// Parser reported errors in strict mode.
    ///
    /// * 0: messages from parser.
    #[error("failed to parse html: {0:?}")]
    Parse(Vec<String>),

    #[error("parsed html has no root element")]
    MissingRoot,
}

/// Error loading [Options](crate::Options).
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid options: {0}")]
    Invalid(#[from] toml::de::Error),
}
