//! ConsultPro marketing site library.
//!
//! A server-rendered site for a strategy consulting firm: a home page, a
//! searchable insights blog fed by a headless CMS, a contact form, and
//! visitor theme preferences kept in cookies.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod listing;
pub mod theme;
pub mod web;
