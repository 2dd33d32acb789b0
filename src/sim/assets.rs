/// Rocket frame loading.
///
/// Embedded copies of the two rocket frames ship in the binary; a
/// `frames_dir` containing files with the same names overrides them.
/// Any failure here is fatal at startup, before the terminal enters raw
/// mode: a missing or unreadable override file, or frame text with no
/// visible content.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::frame::{Frame, FrameError};

const ROCKET_FRAMES: [(&str, &str); 2] = [
    ("rocket_frame_1.txt", include_str!("../../frames/rocket_frame_1.txt")),
    ("rocket_frame_2.txt", include_str!("../../frames/rocket_frame_2.txt")),
];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not read frame file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Load the rocket frame cycle, preferring files in `frames_dir` over the
/// embedded defaults. Validates every frame.
pub fn load_rocket_frames(frames_dir: &Path) -> Result<Vec<Frame>, AssetError> {
    let mut frames = Vec::with_capacity(ROCKET_FRAMES.len());

    for (name, embedded) in ROCKET_FRAMES {
        let path = frames_dir.join(name);
        let frame = if path.is_file() {
            let text = std::fs::read_to_string(&path)
                .map_err(|source| AssetError::Read { path: path.clone(), source })?;
            Frame::parse(name, &text)?
        } else {
            Frame::parse(name, embedded)?
        };
        frames.push(frame);
    }

    Ok(frames)
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
