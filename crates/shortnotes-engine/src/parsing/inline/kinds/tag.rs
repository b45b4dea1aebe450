/// HTML tag delimiters.
pub struct Tag;

impl Tag {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const END_MARK: u8 = b'/';
    pub const DECLARATION_MARK: u8 = b'!';

    /// Returns true if `b`, following `<`, starts a tag rather than a
    /// literal less-than sign.
    pub fn starts_tag(b: u8) -> bool {
        b.is_ascii_alphabetic() || b == Self::END_MARK || b == Self::DECLARATION_MARK || b == b'?'
    }

    /// Returns true if `b` ends a tag name.
    pub fn ends_name(b: u8) -> bool {
        b.is_ascii_whitespace() || b == Self::CLOSE || b == Self::END_MARK
    }
}

/// HTML comment delimiters. Block markers are comments too.
pub struct Comment;

impl Comment {
    pub const OPEN: &'static [u8; 4] = b"<!--";
    pub const CLOSE: &'static [u8; 3] = b"-->";
}
