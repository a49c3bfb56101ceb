//! Mask Provider (`spec.md` §4.4).
//!
//! Loads the four per-channel blue-noise threshold masks, tiling a
//! smaller-than-image mask with randomly rotated copies, cropping to the
//! image size, then circularly rolling each channel's mask by its
//! `(64k, 64k)` offset.
//!
//! `spec.md` flags the original tile-rotation PRNG as unseeded and hence
//! non-reproducible; this implementation resolves that by seeding a
//! `ChaCha8Rng` from [`crate::job::Job::mask_seed`].

use std::path::Path;

use image::GrayImage;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::error::{Error, Result};
use crate::types::Plane;

/// A tiled, rolled, image-sized 8-bit grayscale threshold plane.
#[derive(Debug, Clone)]
pub struct ThresholdMask {
    pub plane: Plane,
    pub width: u32,
    pub height: u32,
    /// Grayscale bytes, length `width * height`.
    pub data: Vec<u8>,
}

/// Load and prepare the four threshold masks for an image of size
/// `(width, height)`.
pub fn load_masks(
    paths: &[std::path::PathBuf; 4],
    width: u32,
    height: u32,
    seed: u64,
) -> Result<[ThresholdMask; 4]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut masks: Vec<ThresholdMask> = Vec::with_capacity(4);
    for plane in Plane::ALL {
        let path = &paths[plane.cmyk_index()];
        masks.push(load_one_mask(path, plane, width, height, &mut rng)?);
    }

    Ok(masks.try_into().unwrap_or_else(|_| unreachable!()))
}

fn load_one_mask(
    path: &Path,
    plane: Plane,
    width: u32,
    height: u32,
    rng: &mut ChaCha8Rng,
) -> Result<ThresholdMask> {
    let dyn_image = image::open(path).map_err(|source| Error::MaskLoad {
        path: path.display().to_string(),
        source,
    })?;
    let tile = dyn_image.to_luma8();

    let fitted = if tile.dimensions() == (width, height) {
        tile.into_raw()
    } else {
        tile_and_crop(&tile, width, height, rng)
    };

    let offset = 64 * plane.cmyk_index() as u32;
    let rolled = roll(&fitted, width, height, offset, offset);

    Ok(ThresholdMask {
        plane,
        width,
        height,
        data: rolled,
    })
}

/// Expand `tile` to cover `(target_w, target_h)` by tiling copies of it,
/// each independently rotated by a uniform random choice from
/// {0°, 90°, 180°, 270°}, appended column-wise within a row of tiles and
/// then row-wise into the mosaic, then cropped to `(target_w, target_h)`.
///
/// `spec.md` §4.4 only requires a "fixed tile size", not a square one, so
/// a 90°/270° rotation — which swaps a non-square tile's dimensions —
/// would no longer fit the `tw`×`th` grid cell this function reserves for
/// it. [`rotate_random`] restricts rotation to the dimension-preserving
/// {0°, 180°} pair whenever the tile isn't square, keeping every rotated
/// copy within its reserved cell.
fn tile_and_crop(tile: &GrayImage, target_w: u32, target_h: u32, rng: &mut ChaCha8Rng) -> Vec<u8> {
    let (tw, th) = tile.dimensions();
    let tile_cols = target_w.div_ceil(tw.max(1));
    let tile_rows = target_h.div_ceil(th.max(1));
    let mosaic_w = tile_cols * tw;
    let mosaic_h = tile_rows * th;

    let mut mosaic = vec![0u8; (mosaic_w * mosaic_h) as usize];
    for row in 0..tile_rows {
        for col in 0..tile_cols {
            let rotated = rotate_random(tile, rng);
            blit(
                &mut mosaic,
                mosaic_w,
                &rotated,
                col * tw,
                row * th,
            );
        }
    }

    crop(&mosaic, mosaic_w, mosaic_h, target_w, target_h)
}

/// Rotate `tile` by a uniform random multiple of 90°. Non-square tiles
/// only draw from {0°, 180°}, since 90°/270° would swap their width and
/// height and no longer fit the grid cell `tile_and_crop` reserved for
/// them.
fn rotate_random(tile: &GrayImage, rng: &mut ChaCha8Rng) -> GrayImage {
    let (tw, th) = tile.dimensions();
    if tw == th {
        match rng.gen_range(0u8..4) {
            0 => tile.clone(),
            1 => image::imageops::rotate90(tile),
            2 => image::imageops::rotate180(tile),
            3 => image::imageops::rotate270(tile),
            _ => unreachable!(),
        }
    } else {
        match rng.gen_range(0u8..2) {
            0 => tile.clone(),
            1 => image::imageops::rotate180(tile),
            _ => unreachable!(),
        }
    }
}

fn blit(dst: &mut [u8], dst_width: u32, src: &GrayImage, dst_x: u32, dst_y: u32) {
    let (src_w, src_h) = src.dimensions();
    for y in 0..src_h {
        for x in 0..src_w {
            let px = src.get_pixel(x, y).0[0];
            let out_x = dst_x + x;
            let out_y = dst_y + y;
            dst[(out_y * dst_width + out_x) as usize] = px;
        }
    }
}

fn crop(data: &[u8], src_width: u32, _src_height: u32, target_w: u32, target_h: u32) -> Vec<u8> {
    let mut out = vec![0u8; (target_w * target_h) as usize];
    for y in 0..target_h {
        let src_row_start = (y * src_width) as usize;
        let dst_row_start = (y * target_w) as usize;
        out[dst_row_start..dst_row_start + target_w as usize]
            .copy_from_slice(&data[src_row_start..src_row_start + target_w as usize]);
    }
    out
}

/// Circularly shift `data` (a `width`x`height` grayscale plane) so that
/// `rolled[y][x] == data[(y - offset_y) mod height][(x - offset_x) mod width]`,
/// matching the wrap semantics of `numpy.roll`.
fn roll(data: &[u8], width: u32, height: u32, offset_x: u32, offset_y: u32) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    let ox = if w == 0 { 0 } else { offset_x as usize % w };
    let oy = if h == 0 { 0 } else { offset_y as usize % h };

    let mut out = vec![0u8; w * h];
    for y in 0..h {
        let src_y = (y + h - oy) % h.max(1);
        for x in 0..w {
            let src_x = (x + w - ox) % w.max(1);
            out[y * w + x] = data[src_y * w + src_x];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_gray(dir: &Path, name: &str, width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> std::path::PathBuf {
        let img = GrayImage::from_fn(width, height, |x, y| image::Luma([f(x, y)]));
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn mask_matching_image_size_is_used_as_is_before_roll() {
        let dir = tempfile::tempdir().unwrap();
        // Distinctive pattern so we can check post-roll wrapping precisely.
        let path = save_gray(dir.path(), "c.png", 4, 4, |x, y| (y * 4 + x) as u8);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mask = load_one_mask(&path, Plane::Cyan, 4, 4, &mut rng).unwrap();
        assert_eq!(mask.width, 4);
        assert_eq!(mask.height, 4);
        assert_eq!(mask.data.len(), 16);
    }

    #[test]
    fn roll_wraps_like_numpy_roll() {
        // 1-D behavior check using a 4x1 "image".
        let data = [0u8, 1, 2, 3];
        let rolled = roll(&data, 4, 1, 1, 0);
        // np.roll([0,1,2,3], 1) == [3,0,1,2]
        assert_eq!(rolled, vec![3, 0, 1, 2]);
    }

    #[test]
    fn roll_by_full_period_is_identity() {
        let data = [5u8, 6, 7, 8, 9, 10, 11, 12];
        let rolled = roll(&data, 4, 2, 4, 2);
        assert_eq!(rolled, data);
    }

    #[test]
    fn tiling_covers_a_larger_target_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_gray(dir.path(), "tile.png", 2, 2, |x, y| (x + y) as u8 * 10);

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mask = load_one_mask(&path, Plane::Magenta, 5, 3, &mut rng).unwrap();
        assert_eq!(mask.width, 5);
        assert_eq!(mask.height, 3);
        assert_eq!(mask.data.len(), 15);
    }

    #[test]
    fn non_square_tile_tiles_without_panicking() {
        // A 2x3 tile rotated 90/270 would be 3x2, which must not be let
        // loose on a grid of 2x3-sized cells.
        let dir = tempfile::tempdir().unwrap();
        let path = save_gray(dir.path(), "tile.png", 2, 3, |x, y| (x + y * 2) as u8 * 10);

        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mask = load_one_mask(&path, Plane::Yellow, 7, 8, &mut rng).unwrap();
        assert_eq!(mask.width, 7);
        assert_eq!(mask.height, 8);
        assert_eq!(mask.data.len(), 56);
    }

    #[test]
    fn different_channels_get_different_offsets() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_gray(dir.path(), "c.png", 256, 256, |x, y| ((x + y) % 256) as u8);

        let mut rng_c = ChaCha8Rng::seed_from_u64(7);
        let mut rng_k = ChaCha8Rng::seed_from_u64(7);
        let cyan = load_one_mask(&path, Plane::Cyan, 256, 256, &mut rng_c).unwrap();
        let black = load_one_mask(&path, Plane::Black, 256, 256, &mut rng_k).unwrap();

        // Cyan rolls by (0,0) (k=0), Black rolls by (192,192) (k=3) — different
        // unless the source tile happens to be periodic at that shift.
        assert_ne!(cyan.data, black.data);
    }

    #[test]
    fn missing_mask_file_is_mask_load_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = load_one_mask(
            Path::new("/nonexistent/mask.tiff"),
            Plane::Cyan,
            4,
            4,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MaskLoad { .. }));
    }
}
