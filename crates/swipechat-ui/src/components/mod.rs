//! Reusable UI components for the chat screen

mod button;
mod icon;
mod input;

pub use button::*;
pub use icon::*;
pub use input::*;
