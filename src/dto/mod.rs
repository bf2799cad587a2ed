//! DTO modules that bridge the rendering services with the screens.

pub mod customer;

pub use customer::{CustomerListItem, FieldView, SectionView};
