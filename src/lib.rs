//! Words that scatter away from the pointer and drift back home.
//!
//! [`text`] holds the layout pass and the per-frame motion rules, free of any
//! rendering; [`visual`], [`input`] and [`camera`] host them in a Bevy app.

pub mod camera;
pub mod color;
pub mod config;
pub mod input;
pub mod text;
pub mod visual;
