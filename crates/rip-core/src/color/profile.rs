//! ICC Profile Loader (`spec.md` §4.1).

use std::path::Path;

use lcms2::Profile;

use crate::error::{Error, Result};

/// An opened ICC profile handle.
///
/// Opaque and read-only once constructed; released when dropped, which is
/// `lcms2`'s own `Drop` impl closing the underlying `cmsHPROFILE`. Callers
/// that want scoped acquisition simply let the value go out of scope —
/// there is no separate explicit-close API, since Rust ownership already
/// gives deterministic release on every exit path, including panics.
pub struct IccProfile {
    path: String,
    inner: Profile<lcms2::GlobalContext>,
}

impl IccProfile {
    /// Open an ICC profile from a filesystem path.
    ///
    /// Fails with [`Error::ProfileOpen`] if the file is absent, unreadable,
    /// or not a valid ICC profile.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = Profile::new_file(path).map_err(|_| Error::ProfileOpen {
            path: path.display().to_string(),
        })?;

        Ok(Self {
            path: path.display().to_string(),
            inner,
        })
    }

    /// The path this profile was opened from (for error messages).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn lcms_profile(&self) -> &Profile<lcms2::GlobalContext> {
        &self.inner
    }
}
