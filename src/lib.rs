//! Page chrome behavior for the forum's server-rendered pages.
//!
//! This crate is compiled to WebAssembly and attaches two small behaviors to
//! markup the server already rendered: a persisted dark/light theme toggle and
//! a close button for the flash message. It renders nothing itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Installs both behaviors; WASM entry point under `hydrate` |
//! | [`theme`] | Theme state machine and toggle wiring |
//! | [`message`] | Flash message dismissal |
//! | [`storage`] | Preference store trait, stored literals, in-memory store |
//! | [`dom`] | Page traits the controllers are written against |
//! | [`config`] | Selectors, classes, labels and log level with page overrides |
//! | [`error`] | Shared error type |
//! | `browser` | `web-sys` implementations (`hydrate` only) |

pub mod app;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod dom;
pub mod error;
pub mod message;
pub mod storage;
pub mod theme;
