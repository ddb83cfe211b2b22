//! File-backed mesh loading with byte progress
//!
//! Reads the source in chunks so the controller sees genuine byte progress,
//! then hands the bytes to the PLY parser. Events land in a shared
//! [`MeshEventQueue`] the host drains into the controller.

use crate::ply;
use splatview_core::{MeshEventQueue, MeshLoadEvent, MeshLoader, Result, TriangleMesh};
use std::fs::File;
use std::io::{BufReader, Read};

const PROGRESS_CHUNK: usize = 64 * 1024;

/// Mesh loader reading PLY files from the local filesystem
#[derive(Debug, Default)]
pub struct FileMeshLoader {
    events: MeshEventQueue,
}

impl FileMeshLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The queue this loader reports into
    pub fn events(&self) -> MeshEventQueue {
        self.events.clone()
    }

    fn run(&mut self, location: &str) -> Result<TriangleMesh> {
        let total = std::fs::metadata(location)?.len();
        let file = File::open(location)?;
        let mut reader = BufReader::new(file);

        let mut data = Vec::with_capacity(total as usize);
        let mut chunk = vec![0u8; PROGRESS_CHUNK];
        loop {
            let read = reader.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..read]);
            self.events.push(MeshLoadEvent::Progress {
                loaded: data.len() as u64,
                total: Some(total),
            });
        }

        ply::read_mesh(&mut data.as_slice())
    }
}

impl MeshLoader for FileMeshLoader {
    fn begin(&mut self, location: &str) {
        log::debug!("reading mesh from {location}");
        match self.run(location) {
            Ok(mesh) => self.events.push(MeshLoadEvent::Finished(mesh)),
            Err(err) => self.events.push(MeshLoadEvent::Failed(err.to_string())),
        }
    }
}
