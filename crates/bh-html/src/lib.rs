//! Convert bbcode into html.
//!
//! ```
//! let conversion = bh_html::convert("[b]bold[/b] [url=http://www.google.com]google[/url]");
//! assert!(conversion.is_clean());
//! assert_eq!(
//!     conversion.html,
//!     r#"<strong>bold</strong> <a href="http://www.google.com">google</a>"#
//! );
//! ```
//!
//! Supported tags: `[b]`, `[i]`, `[center]`, `[url]`, `[url=$URL]` and `[img]`.
//!
//! Problems in input never abort the conversion, they are collected in
//! [Conversion::errors] along with the html produced.

use std::fmt;

use bh_lexer::Tokenizer;
use tracing::trace;

mod error;
mod escape;
mod options;
mod sanitizer;
mod translator;
mod validate;

pub use error::{ConvertError, OptionsError, SanitizeError};
pub use escape::escape_html;
pub use options::Options;
pub use sanitizer::{Html5Sanitizer, Sanitizer};
pub use validate::validate_url;

use crate::translator::{translate, Translation};

/// Output of one conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Generated html, may be partial when errors occurred.
    pub html: String,

    /// Errors in the order they occurred.
    pub errors: Vec<ConvertError>,
}

impl Conversion {
    /// No error occurred.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Treat any error as failure.
    ///
    /// # Errors
    ///
    /// All errors occurred, if any.
    pub fn into_result(self) -> Result<String, Vec<ConvertError>> {
        if self.errors.is_empty() {
            Ok(self.html)
        } else {
            Err(self.errors)
        }
    }
}

/// Converter holding options.
///
/// Each call to [Converter::convert] is independent, a converter can be shared between
/// threads.
pub struct Converter {
    options: Options,

    sanitizer: Option<Box<dyn Sanitizer>>,
}

impl Converter {
    /// Build with `options`.
    ///
    /// An [Html5Sanitizer] is installed if `options.sanitize` is set.
    pub fn new(options: Options) -> Self {
        let sanitizer = if options.sanitize {
            Some(Box::new(Html5Sanitizer::new(options.strict_sanitize)) as Box<dyn Sanitizer>)
        } else {
            None
        };
        Self { options, sanitizer }
    }

    /// Use `sanitizer` on generated html, no matter `sanitize` is set in options or not.
    pub fn with_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizer = Some(Box::new(sanitizer));
        self
    }

    /// Convert bbcode `source` into html.
    ///
    /// When sanitizer fails, the html is empty and the failure is the last error.
    pub fn convert(&self, source: &str) -> Conversion {
        trace!(len = source.len(), "converting");

        let mut tokenizer = Tokenizer::new(source, self.options.max_tags);
        let Translation {
            fragments,
            mut errors,
        } = translate(&mut tokenizer, &self.options);
        let html = fragments.concat();

        let html = match &self.sanitizer {
            Some(sanitizer) => match sanitizer.sanitize(&html) {
                Ok(v) => v,
                Err(e) => {
                    errors.push(e.into());
                    String::new()
                }
            },
            None => html,
        };

        Conversion { html, errors }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("options", &self.options)
            .field("sanitizer", &self.sanitizer.is_some())
            .finish()
    }
}

/// Convert bbcode `source` into html with default [Options].
pub fn convert(source: &str) -> Conversion {
    Converter::default().convert(source)
}
