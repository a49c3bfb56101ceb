//! # rip-core
//!
//! CMYK halftoning and PRN raster serialization for the Nocai family of
//! CMYK piezo inkjet printers.
//!
//! Given a source RGB image and a pair of ICC profiles, this crate builds
//! a device-ready `.PRN` raster stream: four CMYK planes, blue-noise
//! dithered, classified into variable-sized dots, promoted where
//! neighborhoods are dense, packed at 2 bits per pixel, and emitted in
//! Y-M-C-K interleaved scan-line order behind a fixed 48-byte header.
//!
//! ## Pipeline
//!
//! The stages run strictly in order inside [`pipeline::RipPipeline`]:
//!
//! 1. [`color::profile`] — open the two ICC profiles.
//! 2. [`color::transform`] — build and apply the RGB8→CMYK8 transform.
//! 3. [`channel`] — split interleaved CMYK bytes into four planes.
//! 4. [`mask`] — load and tile the four blue-noise threshold masks.
//! 5. [`dotmap`] — per channel, threshold and classify dot sizes.
//! 6. [`promote`] — per channel, promote dots in dense neighborhoods.
//! 7. [`pack`] — per channel, pack dot sizes to 2 bits per pixel.
//! 8. [`prn`] — write the header and interleaved rows.
//!
//! This crate never logs to external sinks; callers are responsible for
//! surfacing [`error::Error`] to an operator or UI.

pub mod channel;
pub mod color;
pub mod dotmap;
pub mod error;
pub mod image_buffer;
pub mod job;
pub mod mask;
pub mod pack;
pub mod pipeline;
pub mod promote;
pub mod prn;
pub mod types;

pub use error::{Error, Result};
pub use job::Job;
pub use pipeline::RipPipeline;
pub use types::Plane;
