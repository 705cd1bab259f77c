use log::info;
use std::path::Path;

use crate::canvas::Frame;
use crate::error::Result;

/// Save a frame as an 8-bit PNG at `path`.
pub fn save_png<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<()> {
    let path = path.as_ref();
    frame.to_image().save(path)?;
    let canvas = frame.canvas();
    info!("saved {}x{} frame to {}", canvas.width, canvas.height, path.display());
    Ok(())
}
