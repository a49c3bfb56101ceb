//! PRN Writer (`spec.md` §4.8).
//!
//! Emits the 48-byte little-endian header followed by the packed scan
//! lines, each row carrying its four channels in the printer's fixed
//! Y, M, C, K order.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::pack::PackedPlane;
use crate::types::Plane;

/// The fixed 12-field, 48-byte PRN header.
///
/// Field 0 is a magic constant, fields 6..12 are reserved/fixed values
/// observed in every sample file this format was distilled from.
#[derive(Debug, Clone, Copy)]
pub struct PrnHeader {
    pub xdpi: u32,
    pub ydpi: u32,
    pub bytes_per_row: u32,
    pub height: u32,
    pub width: u32,
}

const PRN_MAGIC: u32 = 0x0000_5555;

impl PrnHeader {
    /// Serialize to the 48-byte little-endian layout written to disk.
    pub fn to_bytes(self) -> [u8; 48] {
        let fields: [u32; 12] = [
            PRN_MAGIC,
            self.xdpi,
            self.ydpi,
            self.bytes_per_row,
            self.height,
            self.width,
            0,
            4,
            1,
            1,
            0,
            0,
        ];

        let mut bytes = [0u8; 48];
        for (i, field) in fields.iter().enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&field.to_le_bytes());
        }
        bytes
    }
}

/// Write a finished PRN file to `path`.
///
/// `planes` must be indexed by [`Plane::cmyk_index`] (C, M, Y, K order);
/// rows are emitted in the firmware's Y, M, C, K order internally.
pub fn write_prn(
    path: &Path,
    xdpi: u32,
    ydpi: u32,
    planes: &[PackedPlane; 4],
) -> Result<()> {
    match write_prn_inner(path, xdpi, ydpi, planes) {
        Ok(()) => Ok(()),
        Err(err) => {
            // No partial output on disk (`spec.md` §7): a short write or
            // disk error mid-stream must not leave a truncated PRN behind.
            let _ = std::fs::remove_file(path);
            Err(err)
        }
    }
}

fn write_prn_inner(
    path: &Path,
    xdpi: u32,
    ydpi: u32,
    planes: &[PackedPlane; 4],
) -> Result<()> {
    let width = planes[0].width;
    let height = planes[0].height;
    let bytes_per_row = planes[0].bytes_per_row;

    let header = PrnHeader {
        xdpi,
        ydpi,
        bytes_per_row,
        height,
        width,
    };

    let mut out = std::fs::File::create(path)?;
    out.write_all(&header.to_bytes())?;

    for y in 0..height {
        for plane in Plane::EMISSION_ORDER {
            let packed = &planes[plane.cmyk_index()];
            out.write_all(packed.row(y))?;
        }
    }

    Ok(())
}
