//! Today's Trash library
//!
//! Core library for the Today's Trash widget: a note box whose entries are
//! wiped at local midnight, plus the static site builder for its localized
//! landing pages.

pub mod app;
pub mod clock;
pub mod countdown;
pub mod i18n;
pub mod particles;
pub mod site;
pub mod storage;
pub mod submission;
pub mod types;
pub mod ui;
