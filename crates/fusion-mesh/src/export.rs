//! Hand-off seam to mesh storage backends.
//!
//! Persistence formats live behind `MeshSink`; the engine hands the
//! finished mesh over by value once construction is complete.

use fusion_types::error::FusionResult;

use crate::assembler::SourceMesh;

/// Receives a finished mesh for persistence or post-processing.
pub trait MeshSink {
    fn write_mesh(&mut self, mesh: SourceMesh) -> FusionResult<()>;
}

impl SourceMesh {
    /// Transfer ownership of the mesh to a storage backend.
    pub fn export_into(self, sink: &mut dyn MeshSink) -> FusionResult<()> {
        sink.write_mesh(self)
    }
}

/// Sink that keeps the mesh in memory. Used by tests and callers that
/// post-process the mesh without persisting it.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub mesh: Option<SourceMesh>,
}

impl MeshSink for InMemorySink {
    fn write_mesh(&mut self, mesh: SourceMesh) -> FusionResult<()> {
        self.mesh = Some(mesh);
        Ok(())
    }
}
