/// A byte cursor over markup with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the enclosing document (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset in the document (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    /// Like [`Cursor::starts_with`] but ignoring ASCII case.
    pub fn starts_with_ignore_case(&self, pat: &[u8]) -> bool {
        let rest = self.rest();
        rest.len() >= pat.len() && rest[..pat.len()].eq_ignore_ascii_case(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, clamped to the end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Skips ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.i += 1;
        }
    }

    /// Moves to the next occurrence of `pat`, leaving the cursor on its first
    /// byte. Returns false (and moves to EOF) when there is none.
    pub fn seek(&mut self, pat: &[u8]) -> bool {
        match find(self.rest(), pat) {
            Some(off) => {
                self.i += off;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }

    /// Returns the text between local index `from` and the cursor.
    pub fn text_from(&self, from: usize) -> &'a str {
        &self.s[from..self.i]
    }

    fn rest(&self) -> &'a [u8] {
        self.s.as_bytes().get(self.i..).unwrap_or_default()
    }
}

fn find(haystack: &[u8], pat: &[u8]) -> Option<usize> {
    if pat.is_empty() {
        return Some(0);
    }
    haystack.windows(pat.len()).position(|w| w == pat)
}
