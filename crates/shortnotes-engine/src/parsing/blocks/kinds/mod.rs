pub mod block_comment;

pub use block_comment::{BlockComment, Marker};
