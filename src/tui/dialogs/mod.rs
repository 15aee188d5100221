//! Overlays drawn above the page: the help dialog and the command palette

pub mod command_palette;
pub mod help;
