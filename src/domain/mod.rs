//! Domain entities exposed by the lookup application.

pub mod criteria;
pub mod customer;
