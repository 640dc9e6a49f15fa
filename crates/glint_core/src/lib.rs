//! Glint Core Primitives
//!
//! This crate provides the shared value types for the Glint presentation
//! stack. Higher layers (theming, widgets, painting) agree on these types so
//! that a resolved style can flow from the theme engine to a renderer without
//! conversion.
//!
//! Currently this is:
//!
//! - [`Color`]: RGBA color in linear space with hex construction and
//!   interpolation helpers

pub mod color;

pub use color::Color;
