//! 2BPP Packer (`spec.md` §4.7).
//!
//! Packs each row's dot sizes (2 bits each, MSB-first) into bytes, then
//! pads the row to a multiple of 4 bytes — not merely a multiple of 4
//! pixels. For widths not already a multiple of 16 pixels these two
//! paddings differ, and the printer firmware expects the byte-aligned
//! one.

use crate::dotmap::DotMap;
use crate::types::Plane;

/// A 2-bit-per-pixel packed plane, one row at a time.
#[derive(Debug, Clone)]
pub struct PackedPlane {
    pub plane: Plane,
    pub width: u32,
    pub height: u32,
    /// Byte length of every packed row, already padded to a multiple of 4.
    pub bytes_per_row: u32,
    /// Concatenated packed rows, length `bytes_per_row * height`.
    pub data: Vec<u8>,
}

impl PackedPlane {
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.bytes_per_row) as usize;
        let end = start + self.bytes_per_row as usize;
        &self.data[start..end]
    }
}

/// Pack a classified dot map into 2-bit-per-pixel rows.
pub fn pack(dotmap: &DotMap) -> PackedPlane {
    let width = dotmap.width;
    let height = dotmap.height;

    let mut rows: Vec<Vec<u8>> = Vec::with_capacity(height as usize);
    let mut bytes_per_row = 0usize;

    for y in 0..height {
        let mut row = Vec::with_capacity(((width + 3) / 4) as usize);
        let mut byte = 0u8;
        let mut idx = 0usize;

        for x in 0..width {
            let level = dotmap.get(x, y) & 0x03;
            byte |= level << ((3 - (idx % 4)) * 2);
            idx += 1;

            if idx % 4 == 0 {
                row.push(byte);
                byte = 0;
            }
        }

        if idx % 4 != 0 {
            row.push(byte);
        }
        while row.len() % 4 != 0 {
            row.push(0);
        }

        bytes_per_row = row.len();
        rows.push(row);
    }

    let mut data = Vec::with_capacity(bytes_per_row * height as usize);
    for row in rows {
        data.extend_from_slice(&row);
    }

    PackedPlane {
        plane: dotmap.plane,
        width,
        height,
        bytes_per_row: bytes_per_row as u32,
        data,
    }
}
