pub mod html;
pub mod node;
pub mod text;

pub use html::to_html;
pub use node::{Element, Node};
pub use text::{TextOptions, to_text};
