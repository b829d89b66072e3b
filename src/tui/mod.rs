//! Terminal UI components built on ratatui/crossterm.

pub mod picker;

pub use picker::pick_boundary;
