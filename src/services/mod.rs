//! Pure rendering services sitting between the schema and the screens.

pub mod format;
pub mod render;

pub use render::{format_list_item, render_detail};
