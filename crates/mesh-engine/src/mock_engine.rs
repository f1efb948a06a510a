//! Deterministic stand-in for a real boolean-geometry collaborator.
//!
//! Real boolean math (BSP merges, intersection curves) is out of scope; the
//! mock keeps the contract honest instead: handles are arena-backed, results
//! are pure functions of their inputs, and `to_mesh(from_mesh(m))` returns
//! `m` unchanged. Union concatenates re-indexed buffers, subtract keeps the
//! base operand's geometry, intersect produces the axis-aligned overlap box
//! and fails for disjoint inputs, which gives callers a reproducible
//! failure path to exercise their atomicity guarantees against.

use std::collections::HashMap;

use tracing::debug;

use crate::primitives;
use crate::traits::{BooleanEngine, MeshFactory};
use crate::types::{CsgHandle, EngineError, TriMesh};
use shape_types::ShapeSpec;

#[derive(Debug, Default)]
pub struct MockEngine {
    solids: HashMap<u64, TriMesh>,
    next_handle: u64,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unreleased) handles. Lets tests assert that tree
    /// rebuilds clean up their temporaries.
    pub fn live_handles(&self) -> usize {
        self.solids.len()
    }

    fn store(&mut self, mesh: TriMesh) -> CsgHandle {
        self.next_handle += 1;
        let handle = CsgHandle(self.next_handle);
        self.solids.insert(handle.id(), mesh);
        handle
    }

    fn get(&self, handle: &CsgHandle) -> Result<&TriMesh, EngineError> {
        self.solids
            .get(&handle.id())
            .ok_or(EngineError::UnknownHandle {
                handle: handle.id(),
            })
    }

    fn merge(a: &TriMesh, b: &TriMesh) -> TriMesh {
        let mut out = a.clone();
        let offset = a.vertex_count() as u32;
        out.positions.extend_from_slice(&b.positions);
        out.normals.extend_from_slice(&b.normals);
        out.indices.extend(b.indices.iter().map(|&i| i + offset));
        out
    }
}

impl MeshFactory for MockEngine {
    fn build_primitive(&mut self, spec: &ShapeSpec) -> Result<TriMesh, EngineError> {
        primitives::build(spec)
    }
}

impl BooleanEngine for MockEngine {
    fn from_mesh(&mut self, mesh: &TriMesh) -> Result<CsgHandle, EngineError> {
        if mesh.is_empty() {
            return Err(EngineError::EmptyMesh);
        }
        Ok(self.store(mesh.clone()))
    }

    fn union(&mut self, a: &CsgHandle, b: &CsgHandle) -> Result<CsgHandle, EngineError> {
        let merged = Self::merge(self.get(a)?, self.get(b)?);
        Ok(self.store(merged))
    }

    fn subtract(&mut self, a: &CsgHandle, b: &CsgHandle) -> Result<CsgHandle, EngineError> {
        self.get(b)?;
        let base = self.get(a)?.clone();
        Ok(self.store(base))
    }

    fn intersect(&mut self, a: &CsgHandle, b: &CsgHandle) -> Result<CsgHandle, EngineError> {
        let bounds_a = self.get(a)?.aabb();
        let bounds_b = self.get(b)?.aabb();
        let ((min_a, max_a), (min_b, max_b)) = match (bounds_a, bounds_b) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(EngineError::EmptyMesh),
        };

        let min = min_a.max(min_b);
        let max = max_a.min(max_b);
        if min.x >= max.x || min.y >= max.y || min.z >= max.z {
            debug!("mock intersect: operands are disjoint");
            return Err(EngineError::BooleanFailed {
                op: "intersect".to_string(),
                reason: "operands do not overlap".to_string(),
            });
        }

        let mut mesh = primitives::build(&ShapeSpec::Box {
            width: max.x - min.x,
            depth: max.y - min.y,
            height: max.z - min.z,
        })?;
        let center = (min + max) / 2.0;
        mesh.transform(&glam::DMat4::from_translation(center));
        Ok(self.store(mesh))
    }

    fn to_mesh(&mut self, handle: &CsgHandle) -> Result<TriMesh, EngineError> {
        Ok(self.get(handle)?.clone())
    }

    fn release(&mut self, handle: CsgHandle) {
        self.solids.remove(&handle.id());
    }
}
