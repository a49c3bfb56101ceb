//! Neighborhood Promoter (`spec.md` §4.6).
//!
//! Scans each non-maximal pixel's enclosing 4×4 neighborhood (from
//! `(y-1, x-1)` to `(y+2, x+2)`) and promotes it to the largest dot size
//! if at least 12 of those 16 neighbors already carry ink. Mutation is
//! in place during a single row-major pass, so a promotion can itself
//! feed the neighbor count of pixels visited later in the same pass —
//! this matches the original firmware's behavior exactly and is not an
//! accidental artifact of using one shared buffer.

use crate::dotmap::DotMap;
use crate::types::dot_size;

const PROMOTION_THRESHOLD: u32 = 12;

/// Apply 4×4 neighborhood promotion to `dotmap` in place.
///
/// Images smaller than 4 pixels in either dimension have no interior
/// pixels eligible for promotion and are left untouched.
pub fn promote(dotmap: &mut DotMap) {
    let width = dotmap.width;
    let height = dotmap.height;
    if width < 4 || height < 4 {
        return;
    }

    for y in 1..(height - 2) {
        for x in 1..(width - 2) {
            if dotmap.get(x, y) == dot_size::LARGE {
                continue;
            }

            let mut count = 0u32;
            for dy in -1i32..=2 {
                for dx in -1i32..=2 {
                    let ny = (y as i32 + dy) as u32;
                    let nx = (x as i32 + dx) as u32;
                    if dotmap.get(nx, ny) > dot_size::NONE {
                        count += 1;
                    }
                }
            }

            if count >= PROMOTION_THRESHOLD {
                dotmap.set(x, y, dot_size::LARGE);
            }
        }
    }
}
