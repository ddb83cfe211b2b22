//! Splat model construction
//!
//! The splat payload belongs entirely to the wrapped splat renderer, so
//! construction is synchronous and cheap: validate the PLY magic, scan the
//! header for the gaussian count, and hand back a model handle.

use splatview_core::{Error, Result, SplatLoader, SplatModel};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Splat constructor reading headers from the local filesystem
#[derive(Debug, Default)]
pub struct FileSplatLoader;

impl FileSplatLoader {
    pub fn new() -> Self {
        Self
    }
}

impl SplatLoader for FileSplatLoader {
    fn construct(&mut self, location: &str) -> Result<SplatModel> {
        let file = File::open(location)?;
        let mut reader = BufReader::new(file);

        let mut magic = String::new();
        reader.read_line(&mut magic)?;
        if magic.trim_end() != "ply" {
            return Err(Error::InvalidData(format!(
                "not a PLY splat file: {location}"
            )));
        }

        let mut gaussian_count = None;
        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();
            if line == "end_header" {
                break;
            }
            if let Some(count) = line.strip_prefix("element vertex ") {
                gaussian_count = count.trim().parse::<usize>().ok();
            }
        }

        log::debug!(
            "constructed splat model from {location} ({} gaussians)",
            gaussian_count.map_or("?".to_string(), |count| count.to_string())
        );

        Ok(SplatModel {
            source: location.to_string(),
            gaussian_count,
        })
    }
}
