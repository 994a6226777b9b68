#![deny(unsafe_code)]
//! Host adapters for value-ramp.
//!
//! This crate provides concrete implementations of the capability traits in
//! `value-ramp-core`: an image-backed [`PixelSampler`](value_ramp_core::PixelSampler)
//! for the eyedropper and a [`Clipboard`](value_ramp_core::Clipboard) that
//! shells out to the platform clipboard command. Platform conditionals live
//! here and nowhere in the core.

pub mod clipboard;

#[cfg(feature = "png")]
pub mod sampler;

pub use clipboard::SystemClipboard;

#[cfg(feature = "png")]
pub use sampler::ImageSampler;
