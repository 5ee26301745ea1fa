/// Kinds of tag the converter knows.
///
/// Any other name falls into [TagKind::Unknown].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `[b][/b]`.
    Bold,

    /// `[i][/i]`.
    Italic,

    /// `[center][/center]`.
    Center,

    /// `[url]$URL[/url]` or `[url=$URL]$DATA[/url]`.
    Link,

    /// `[img]$URL[/img]`.
    Image,

    Unknown,
}

impl TagKind {
    /// Classify a tag name.
    ///
    /// The name is expected to be lowercase already.
    pub fn from_name(name: &str) -> Self {
        match name {
            "b" => TagKind::Bold,
            "i" => TagKind::Italic,
            "center" => TagKind::Center,
            "url" => TagKind::Link,
            "img" => TagKind::Image,
            _ => TagKind::Unknown,
        }
    }
}
