use super::Tag;

/// Anchor element with owned delimiter constants.
pub struct Anchor;

impl Anchor {
    /// Start of an anchor tag, compared ignoring ASCII case.
    pub const OPEN: &'static [u8; 2] = b"<a";
    /// The attribute holding the link target.
    pub const HREF: &'static str = "href";

    /// Returns true if `b` can follow `<a` in an anchor start tag.
    ///
    /// Rules out `<abbr>`, `<aside>` and friends.
    pub fn is_name_end(b: u8) -> bool {
        Tag::ends_name(b)
    }
}
