//! Artifact emission for voicepack.
//!
//! An artifact is a logical, relative path paired with a JSON document.  The
//! build pipeline assembles an [`ArtifactSet`] in memory and hands it to an
//! [`ArtifactWriter`]:
//!
//! - [`FsArtifactWriter`] writes pretty-printed JSON under an output root,
//!   creating parent directories as needed.
//! - [`MemoryArtifactWriter`] keeps documents in memory for dry runs and
//!   tests.
//!
//! [`write_all`] issues every write concurrently and fails as soon as one
//! write fails.

pub mod artifact;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use artifact::{Artifact, ArtifactSet};
pub use error::{Result, WriteError};
pub use fs::FsArtifactWriter;
pub use memory::MemoryArtifactWriter;
pub use traits::{ArtifactWriter, write_all};
