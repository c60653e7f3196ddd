mod resolver;
pub(crate) mod texture;

pub use resolver::{resolve, PreviewContent, PreviewRequest};
