//! Anim Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Farb-Rotor, Animations-Zustandsmaschinen, Kommando-Auswertung und
//! Seiten-Renderer laufen identisch auf dem Host (Tests) und auf dem
//! ESP32.

#![no_std]

pub mod animation;
pub mod pages;
pub mod render;
pub mod rotor;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use animation::AnimationEngine;
pub use render::{RESPONSE_CAPACITY, RenderError, ResponseBuffer, render_page, render_response};
pub use rotor::{ColorRotor, ColorState};
pub use traits::{LedError, LedOutputs, LedPin};
pub use types::{
    AnimationKind, Command, REQUEST_PATH_CAPACITY, Reply, RequestPath, Selection, SpeedLevel,
};
