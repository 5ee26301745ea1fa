use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::SanitizeError;

/// Post-process on generated html.
///
/// Takes a html fragment and returns a well-formed one, or fails without any output.
pub trait Sanitizer: Send + Sync {
    /// Sanitize the html `fragment`.
    ///
    /// # Errors
    ///
    /// When the fragment can not be turned into well-formed html.
    fn sanitize(&self, fragment: &str) -> Result<String, SanitizeError>;
}

impl<F> Sanitizer for F
where
    F: Fn(&str) -> Result<String, SanitizeError> + Send + Sync,
{
    fn sanitize(&self, fragment: &str) -> Result<String, SanitizeError> {
        self(fragment)
    }
}

/// Sanitizer parsing the fragment as the body of a html5 document then serializing it back.
///
/// The html5 parser recovers from all syntax errors like misnested elements: the recovered
/// tree is serialized. Use [Html5Sanitizer::strict] to reject input having any error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Html5Sanitizer {
    strict: bool,
}

impl Html5Sanitizer {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Accept the result recovered by parser.
    pub fn lenient() -> Self {
        Self::new(false)
    }

    /// Fail on any parse error.
    pub fn strict() -> Self {
        Self::new(true)
    }
}

impl Sanitizer for Html5Sanitizer {
    fn sanitize(&self, fragment: &str) -> Result<String, SanitizeError> {
        let document = Html::parse_fragment(fragment);

        if !document.errors.is_empty() {
            if self.strict {
                return Err(SanitizeError::Parse(
                    document.errors.iter().map(|x| x.to_string()).collect(),
                ));
            }
            for error in document.errors.iter() {
                debug!("recovered html parse error: {error}");
            }
        }

        // Fragment nodes are children of the synthetic `<html>` root.
        let root = document
            .tree
            .root()
            .children()
            .find_map(ElementRef::wrap)
            .ok_or(SanitizeError::MissingRoot)?;

        Ok(root.inner_html())
    }
}
