pub mod io;
pub mod note;
pub mod parsing;
pub mod render;
pub mod reply;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use note::*;
pub use parsing::{
    ParseError, ParsedNote,
    blocks::{Block, BlockKind},
    inline::{Link, Links, extract_links},
    parse_note,
};
pub use render::*;
pub use reply::*;
