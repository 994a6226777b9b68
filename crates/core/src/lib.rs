#![deny(unsafe_code)]
//! Core types and functions for value-ramp.
//!
//! Provides HSV/RGB/HEX conversion (`color`), value-ramp generation (`ramp`),
//! text-field parsing with an opt-in strict range policy (`input`), the host
//! capability traits `PixelSampler` and `Clipboard` (`host`), and the
//! `RampController` that holds one window's state (`controller`).
//!
//! Everything here is pure and synchronous; I/O lives in host crates.

pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod input;
pub mod ramp;

pub use color::{hsv_to_rgb, rgb_to_hex, rgb_to_hsv, HexColor, Hsv, Rgb};
pub use controller::RampController;
pub use error::RampError;
pub use host::{Clipboard, PixelSampler};
pub use input::{RampForm, RangePolicy};
pub use ramp::{generate_ramp, ColorRow, RampRequest, RampResult, RowField};
