/// Block delimiter comments, `<!-- wp:name {attrs} -->` and friends.
///
/// All knowledge of the marker syntax lives here; the classifier only finds
/// comments and hands their bodies over.
pub struct BlockComment;

/// A recognised block marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `<!-- wp:name {attrs} -->`
    Open { name: String, attrs: Option<String> },
    /// `<!-- wp:name {attrs} /-->`
    Void { name: String, attrs: Option<String> },
    /// `<!-- /wp:name -->`
    Close { name: String },
}

impl BlockComment {
    /// Prefix of a start marker's body.
    pub const OPEN_PREFIX: &'static str = "wp:";
    /// Prefix of an end marker's body.
    pub const CLOSE_PREFIX: &'static str = "/wp:";
    /// Trailing mark of a void (self-closing) marker.
    pub const VOID_SUFFIX: char = '/';
    /// Namespace assumed when a name has none.
    pub const DEFAULT_NAMESPACE: &'static str = "core";

    /// Returns true if a comment body looks like it was meant as a marker,
    /// whether or not it parses.
    pub fn looks_like_marker(body: &str) -> bool {
        let body = body.trim_start();
        body.starts_with(Self::OPEN_PREFIX) || body.starts_with(Self::CLOSE_PREFIX)
    }

    /// Returns true if a comment body opens a block. Only these are fatal
    /// when their comment never closes.
    pub fn starts_open_marker(body: &str) -> bool {
        body.trim_start().starts_with(Self::OPEN_PREFIX)
    }

    /// Parses the body of an HTML comment (the text between `<!--` and
    /// `-->`). Returns `None` for ordinary comments and garbled markers.
    pub fn parse(body: &str) -> Option<Marker> {
        let body = body.trim();

        if let Some(rest) = body.strip_prefix(Self::CLOSE_PREFIX) {
            let name = Self::qualify(rest)?;
            return Some(Marker::Close { name });
        }

        let rest = body.strip_prefix(Self::OPEN_PREFIX)?;
        let (rest, is_void) = match rest.strip_suffix(Self::VOID_SUFFIX) {
            Some(r) => (r.trim_end(), true),
            None => (rest, false),
        };

        let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let name = Self::qualify(&rest[..name_end])?;

        let attrs = rest[name_end..].trim();
        let attrs = if attrs.is_empty() {
            None
        } else if attrs.starts_with('{') && attrs.ends_with('}') {
            Some(attrs.to_string())
        } else {
            return None;
        };

        Some(if is_void {
            Marker::Void { name, attrs }
        } else {
            Marker::Open { name, attrs }
        })
    }

    /// Validates a raw name and adds the default namespace when missing.
    fn qualify(raw: &str) -> Option<String> {
        let (namespace, name) = match raw.split_once('/') {
            Some((ns, name)) => (ns, name),
            None => (Self::DEFAULT_NAMESPACE, raw),
        };
        (is_name_part(namespace) && is_name_part(name)).then(|| format!("{namespace}/{name}"))
    }
}

/// `[a-z][a-z0-9_-]*`
fn is_name_part(s: &str) -> bool {
    let mut bytes = s.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_lowercase())
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}
