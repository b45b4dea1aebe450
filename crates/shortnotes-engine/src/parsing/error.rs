/// Structural problems in block markup.
///
/// Everything else (unknown block names, garbled markers, stray end markers)
/// degrades to best-effort text instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("block `{name}` opened at byte {offset} is never closed")]
    UnterminatedBlock { name: String, offset: usize },

    #[error("block marker comment at byte {offset} is never closed")]
    UnterminatedMarker { offset: usize },
}
