#![allow(clippy::doc_markdown)]

pub mod battery;
pub mod prelude;
pub mod quantity;
