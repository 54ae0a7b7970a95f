//! Decorative canvas effects for the marketing site: a pointer-reactive
//! particle field and a "chaos to clarity" lens, plus the page's small DOM
//! interactions.
//!
//! `core` is plain Rust and is what the host-side tests exercise; everything
//! that touches the browser is compiled for `wasm32` only.

pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod render;

pub use error::FxError;
