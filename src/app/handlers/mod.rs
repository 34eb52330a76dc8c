//! Feature-Handler, an die der Controller mutierende Commands dispatcht.

pub mod dialog;
pub mod editing;
pub mod view;
