//! Color constants for the chat screen palette.

#![allow(dead_code)]

// === SURFACES ===
pub const SCREEN_BG: &str = "#F0F0F0";
pub const BAR_BG: &str = "#FFFFFF";
pub const INPUT_BG: &str = "#F2F2F2";
pub const DIVIDER: &str = "#E8E8E8";

// === ACTIONS ===
pub const BLUE: &str = "#2196F3";
pub const GREEN: &str = "#4CAF50";
pub const RED: &str = "#FF3B30";

// === TEXT ===
pub const TEXT_ON_BUBBLE: &str = "#FFFFFF";
pub const TEXT_EDITED: &str = "rgba(255, 255, 255, 0.7)";
pub const TEXT_QUOTE: &str = "#666666";
pub const TEXT_TIMESTAMP: &str = "#8E8E93";
pub const ICON_MUTED: &str = "#7C7C7C";
pub const PLACEHOLDER: &str = "#999999";
