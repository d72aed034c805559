//! Library components of the diabetes risk CLI.

pub mod input;
pub mod logging;
pub mod messages;
pub mod render;
