pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod image;
pub mod list;
pub mod math;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use image::BlockImage;
pub use list::{Checkbox, List, ListMarker, MarkerKind};
pub use math::MathBlock;
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
