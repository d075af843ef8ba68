//! Minimal retained UI for menu scenes
//!
//! Just enough widgetry for arcade front-ends: a vertical menu with
//! keyboard navigation, drawn with the built-in bitmap font.

mod menu;

pub use menu::{Menu, MenuItem, MenuStyle};
