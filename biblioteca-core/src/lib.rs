#![forbid(unsafe_code)]

pub mod announce;
pub mod cards;
pub mod counter;
pub mod search;
pub mod theme;
