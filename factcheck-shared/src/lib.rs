#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]
//! Data model and view decisions shared by the fact-check front-end.
//!
//! Everything in this crate is free of DOM access so it can be exercised by
//! plain `cargo test`; the Yew components in `factcheck-web` only translate
//! these decisions into markup.

pub mod attribution;
pub mod avatar;
pub mod clipboard;
pub mod config;
pub mod fragments;
pub mod layout;
pub mod models;
pub mod profile_menu;
pub mod reply_view;
pub mod template;
pub mod text;
pub mod time;
