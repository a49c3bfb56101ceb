//! The RIP pipeline: `spec.md` §2-§8 wired into a single state machine.
//!
//! The original implementation stores all intermediate state as mutable
//! members of one class and lets callers invoke its methods in any order
//! they like. Here the same three stages are instead modeled as a
//! `RipPipeline` enum that only offers the methods valid for its current
//! state, so calling `apply_icc_conversion` before `load_input_image` is a
//! compile-time non-option for the state you're in and a clear
//! [`Error::State`] at runtime for code that holds the enum behind a
//! trait object or otherwise can't see the state statically.

use rayon::prelude::*;

use crate::channel::{self, ChannelPlane};
use crate::color::{ColorTransform, IccProfile};
use crate::dotmap;
use crate::error::{Error, Result};
use crate::image_buffer::{self, ImageBuffer, LoadedImage};
use crate::job::Job;
use crate::mask;
use crate::pack::{self, PackedPlane};
use crate::prn;
use crate::promote;

/// State reached after `load_input_image`: the source decoded, not yet
/// color-converted.
pub struct Loaded {
    image: LoadedImage,
}

/// State reached after `apply_icc_conversion`: CMYK channels extracted and
/// ready for halftoning.
pub struct Transformed {
    width: u32,
    height: u32,
    channels: [ChannelPlane; 4],
}

/// State reached after `generate_final_prn`: the PRN file is on disk.
pub struct Written {
    pub output_path: std::path::PathBuf,
}

/// A RIP job pipeline, carrying only the state its current stage needs.
pub enum RipPipeline {
    Empty { job: Job },
    Loaded { job: Job, state: Loaded },
    Transformed { job: Job, state: Transformed },
    Written { job: Job, state: Written },
}

impl RipPipeline {
    /// Start a pipeline for `job`. Nothing is read from disk yet.
    pub fn new(job: Job) -> Self {
        RipPipeline::Empty { job }
    }

    /// Decode `job.source_image` (`spec.md` §4's input stage).
    ///
    /// Requires the pipeline to be [`RipPipeline::Empty`].
    pub fn load_input_image(self) -> Result<Self> {
        let job = match self {
            RipPipeline::Empty { job } => job,
            _ => return Err(Error::State("load_input_image requires an Empty pipeline")),
        };

        let image = image_buffer::load_input_image(&job.source_image)?;
        Ok(RipPipeline::Loaded {
            job,
            state: Loaded { image },
        })
    }

    /// Run ICC RGB8→CMYK8 conversion and channel separation (`spec.md`
    /// §4.1-§4.3).
    ///
    /// Requires the pipeline to be [`RipPipeline::Loaded`].
    pub fn apply_icc_conversion(self) -> Result<Self> {
        let (job, loaded) = match self {
            RipPipeline::Loaded { job, state } => (job, state),
            _ => {
                return Err(Error::State(
                    "apply_icc_conversion requires a Loaded pipeline",
                ));
            }
        };

        let ImageBuffer { width, height, rgb } = loaded.image.buffer;

        let input_profile = IccProfile::open(&job.input_profile)?;
        let output_profile = IccProfile::open(&job.output_profile)?;
        let transform = ColorTransform::new(&input_profile, &output_profile)?;

        let cmyk = transform.apply(&rgb, width, height)?;
        let channels = channel::separate_channels(&cmyk, width, height)?;

        Ok(RipPipeline::Transformed {
            job,
            state: Transformed {
                width,
                height,
                channels,
            },
        })
    }

    /// Halftone, promote, pack, and write the final `.PRN` file (`spec.md`
    /// §4.4-§4.8).
    ///
    /// Requires the pipeline to be [`RipPipeline::Transformed`]. The four
    /// channels are halftoned, promoted and packed independently and in
    /// parallel, since neither operation reads across channels.
    pub fn generate_final_prn(self) -> Result<Self> {
        let (job, state) = match self {
            RipPipeline::Transformed { job, state } => (job, state),
            _ => {
                return Err(Error::State(
                    "generate_final_prn requires a Transformed pipeline",
                ));
            }
        };

        let masks = mask::load_masks(&job.masks, state.width, state.height, job.mask_seed)?;

        let mut packed_by_plane: [Option<PackedPlane>; 4] = [None, None, None, None];
        let results: Vec<Result<PackedPlane>> = state
            .channels
            .into_par_iter()
            .zip(masks.into_par_iter())
            .map(|(channel, channel_mask)| {
                let mut dots = dotmap::classify(&channel, &channel_mask)?;
                promote::promote(&mut dots);
                Ok(pack::pack(&dots))
            })
            .collect();

        for result in results {
            let packed = result?;
            packed_by_plane[packed.plane.cmyk_index()] = Some(packed);
        }

        let planes: [PackedPlane; 4] = packed_by_plane.map(|p| {
            p.unwrap_or_else(|| unreachable!("every plane is produced exactly once"))
        });

        prn::write_prn(&job.output_path, job.xdpi, job.ydpi, &planes)?;

        let output_path = job.output_path.clone();
        Ok(RipPipeline::Written {
            job,
            state: Written { output_path },
        })
    }

    /// Run the whole pipeline end to end.
    pub fn run(job: Job) -> Result<std::path::PathBuf> {
        let pipeline = RipPipeline::new(job)
            .load_input_image()?
            .apply_icc_conversion()?
            .generate_final_prn()?;

        match pipeline {
            RipPipeline::Written { state, .. } => Ok(state.output_path),
            _ => unreachable!("generate_final_prn always returns Written or an Err"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_order_calls_return_state_errors() {
        let job = Job::new(
            "in.png",
            "src.icc",
            "dst.icc",
            ["c.tiff", "m.tiff", "y.tiff", "k.tiff"],
            "out.prn",
            600,
            600,
        );

        let pipeline = RipPipeline::new(job);
        let err = pipeline.apply_icc_conversion().unwrap_err();
        assert!(matches!(err, Error::State(_)));
    }

    #[test]
    fn missing_source_image_surfaces_as_image_load_error() {
        let job = Job::new(
            "/nonexistent/source.png",
            "src.icc",
            "dst.icc",
            ["c.tiff", "m.tiff", "y.tiff", "k.tiff"],
            "out.prn",
            600,
            600,
        );

        let err = RipPipeline::new(job).load_input_image().unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
