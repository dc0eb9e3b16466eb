//! UI components for Today's Trash
//!
//! This module contains all user interface components built with Dioxus.

pub mod confirm_modal;
pub mod countdown;
pub mod layout;
pub mod particles;
pub mod trash_input;
pub mod trash_list;

pub use layout::Layout;
