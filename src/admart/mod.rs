//! Core [`Admart`] type orchestrating marketplace lifecycle, queries, and
//! mutations.

mod autocomplete;
mod catalog;
mod dashboard;
pub mod lifecycle;
mod mutation;
mod search;

pub use lifecycle::Admart;
