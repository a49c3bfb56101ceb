//! # rip-tests
//!
//! Integration tests exercising `rip-core`'s public API end to end,
//! plus fixture-gated tests against real ICC profiles when available.
//!
//! This pack ships no vendored `.icc` binaries, so any test needing a
//! real profile checks for its fixture under [`icc_dir`] first and
//! prints a skip notice rather than failing when it's absent — the same
//! convention the wider corpus's color-management test suites use.

use std::path::{Path, PathBuf};

use rip_core::channel::ChannelPlane;
use rip_core::mask::ThresholdMask;
use rip_core::types::Plane;

/// Directory real ICC fixtures would live in, if present.
pub fn icc_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/icc")
}

/// Build a `width`x`height` channel plane filled with a single ink value.
pub fn solid_channel(plane: Plane, width: u32, height: u32, value: u8) -> ChannelPlane {
    ChannelPlane {
        plane,
        width,
        height,
        data: vec![value; (width * height) as usize],
    }
}

/// Build a `width`x`height` threshold mask filled with a single value.
pub fn solid_mask(plane: Plane, width: u32, height: u32, value: u8) -> ThresholdMask {
    ThresholdMask {
        plane,
        width,
        height,
        data: vec![value; (width * height) as usize],
    }
}

/// Read a little-endian `u32` out of a PRN header buffer at field index
/// `field` (0-based, 4 bytes per field).
pub fn header_field(bytes: &[u8], field: usize) -> u32 {
    let start = field * 4;
    u32::from_le_bytes(bytes[start..start + 4].try_into().unwrap())
}

/// Read a written `.prn` file and check its header against expected
/// `(xdpi, ydpi, bytes_per_row, height, width)` values.
pub fn check_prn_header(
    path: &Path,
    xdpi: u32,
    ydpi: u32,
    bytes_per_row: u32,
    height: u32,
    width: u32,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(path)?;
    anyhow::ensure!(bytes.len() >= 48, "PRN file shorter than its own header");

    anyhow::ensure!(header_field(&bytes, 0) == 0x0000_5555, "bad magic");
    anyhow::ensure!(header_field(&bytes, 1) == xdpi, "xdpi mismatch");
    anyhow::ensure!(header_field(&bytes, 2) == ydpi, "ydpi mismatch");
    anyhow::ensure!(
        header_field(&bytes, 3) == bytes_per_row,
        "bytes_per_row mismatch"
    );
    anyhow::ensure!(header_field(&bytes, 4) == height, "height mismatch");
    anyhow::ensure!(header_field(&bytes, 5) == width, "width mismatch");

    Ok(())
}
