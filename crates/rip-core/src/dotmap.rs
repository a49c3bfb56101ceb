//! Dot Classifier (`spec.md` §4.5).
//!
//! Combines the original two-pass "FX threshold, then classify" procedure
//! into one pass: a pixel only has a dot at all when the channel's ink
//! value is at least the mask's threshold at that position, and the dot's
//! size class is read off the mask value itself.

use crate::channel::ChannelPlane;
use crate::error::{Error, Result};
use crate::mask::ThresholdMask;
use crate::types::{Plane, dot_size};

/// Per-pixel dot size class (0..=3) for one channel.
#[derive(Debug, Clone)]
pub struct DotMap {
    pub plane: Plane,
    pub width: u32,
    pub height: u32,
    /// One byte per pixel, value in `0..=3`.
    pub data: Vec<u8>,
}

impl DotMap {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        self.data[(y * self.width + x) as usize] = value;
    }
}

/// Classify every pixel of `channel` against `mask` into a dot size.
pub fn classify(channel: &ChannelPlane, mask: &ThresholdMask) -> Result<DotMap> {
    if channel.plane != mask.plane {
        return Err(Error::Internal(format!(
            "channel/mask plane mismatch: {:?} vs {:?}",
            channel.plane, mask.plane
        )));
    }
    if channel.width != mask.width || channel.height != mask.height {
        return Err(Error::Internal(format!(
            "channel/mask size mismatch: {}x{} vs {}x{}",
            channel.width, channel.height, mask.width, mask.height
        )));
    }

    let mut data = vec![dot_size::NONE; channel.pixel_count()];
    for (i, (&ink, &threshold)) in channel.data.iter().zip(mask.data.iter()).enumerate() {
        if ink < threshold {
            continue;
        }
        data[i] = if threshold >= 192 {
            dot_size::SMALL
        } else if threshold >= 128 {
            dot_size::MEDIUM
        } else {
            dot_size::LARGE
        };
    }

    Ok(DotMap {
        plane: channel.plane,
        width: channel.width,
        height: channel.height,
        data,
    })
}
