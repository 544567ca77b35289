//! SwipeChat UI Components
//!
//! This crate provides the Dioxus building blocks the chat screen is made of:
//! icon buttons, the swipe action buttons, and the composer input.
//!
//! ## Palette
//!
//! - **Blue (#2196F3)**: message bubbles, reply action, send icon
//! - **Green (#4CAF50)**: edit action
//! - **Red (#FF3B30)**: delete action
//! - **Grey (#7C7C7C / #999)**: inert composer icons and the dismiss cross
//!
//! Styles live in the application shell; components here only emit the
//! class names documented on each component.

pub mod components;

pub use components::*;
