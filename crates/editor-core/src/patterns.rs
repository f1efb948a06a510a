//! Pattern placement: clone a source object along a row, grid, circle,
//! helix or spiral. Clones are positioned copies; merging them into one
//! solid is the user's explicit union action afterwards.

use mesh_engine::MeshFactory;
use shape_types::{ObjectId, Vec3};

use crate::errors::SessionError;
use crate::scene::SceneObject;
use crate::EditorSession;

/// Plane a planar pattern lays out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPlane {
    Xy,
    Xz,
    Yz,
}

impl GridPlane {
    /// Map in-plane (u, v) coordinates to a world offset.
    fn offset(self, u: f64, v: f64) -> Vec3 {
        match self {
            GridPlane::Xy => Vec3::new(u, v, 0.0),
            GridPlane::Xz => Vec3::new(u, 0.0, v),
            GridPlane::Yz => Vec3::new(0.0, u, v),
        }
    }
}

/// Pattern description. `count` (or rows x columns) includes the source
/// object itself, matching how the dialog presents it.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSpec {
    Row {
        count: u32,
        spacing: Vec3,
    },
    Grid {
        rows: u32,
        columns: u32,
        spacing: f64,
        plane: GridPlane,
    },
    Circle {
        count: u32,
        radius: f64,
        plane: GridPlane,
    },
    Helix {
        count: u32,
        rotations: f64,
        radius: f64,
        height: f64,
    },
    Spiral {
        count: u32,
        start_radius: f64,
        end_radius: f64,
        rotations: f64,
        height: f64,
    },
}

impl PatternSpec {
    /// Offsets of every clone relative to the source. The source itself
    /// (offset zero) is not included.
    fn clone_offsets(&self) -> Vec<Vec3> {
        let mut offsets = Vec::new();
        match *self {
            PatternSpec::Row { count, spacing } => {
                for k in 1..count as i64 {
                    offsets.push(Vec3::new(
                        spacing.x * k as f64,
                        spacing.y * k as f64,
                        spacing.z * k as f64,
                    ));
                }
            }
            PatternSpec::Grid {
                rows,
                columns,
                spacing,
                plane,
            } => {
                for r in 0..rows as i64 {
                    for c in 0..columns as i64 {
                        if r == 0 && c == 0 {
                            continue;
                        }
                        offsets.push(plane.offset(c as f64 * spacing, r as f64 * spacing));
                    }
                }
            }
            PatternSpec::Circle {
                count,
                radius,
                plane,
            } => {
                for k in 1..count as i64 {
                    let angle = std::f64::consts::TAU * k as f64 / count as f64;
                    offsets.push(plane.offset(radius * angle.cos(), radius * angle.sin()));
                }
            }
            PatternSpec::Helix {
                count,
                rotations,
                radius,
                height,
            } => {
                let steps = (count.max(2) - 1) as f64;
                for k in 1..count as i64 {
                    let t = k as f64 / steps;
                    let angle = std::f64::consts::TAU * rotations * t;
                    offsets.push(Vec3::new(
                        radius * angle.cos(),
                        radius * angle.sin(),
                        height * t,
                    ));
                }
            }
            PatternSpec::Spiral {
                count,
                start_radius,
                end_radius,
                rotations,
                height,
            } => {
                let steps = (count.max(2) - 1) as f64;
                for k in 1..count as i64 {
                    let t = k as f64 / steps;
                    let radius = start_radius + (end_radius - start_radius) * t;
                    let angle = std::f64::consts::TAU * rotations * t;
                    offsets.push(Vec3::new(
                        radius * angle.cos(),
                        radius * angle.sin(),
                        height * t,
                    ));
                }
            }
        }
        offsets
    }
}

impl EditorSession {
    /// Clone the source object at every pattern position and record one
    /// history entry. Returns the new ids, in placement order.
    pub fn apply_pattern(
        &mut self,
        source: ObjectId,
        pattern: &PatternSpec,
        factory: &mut dyn MeshFactory,
    ) -> Result<Vec<ObjectId>, SessionError> {
        let base = self.require(source)?.capture();
        let offsets = pattern.clone_offsets();

        // Materialize the whole batch before inserting any of it
        let mut clones = Vec::with_capacity(offsets.len());
        for (k, offset) in offsets.iter().enumerate() {
            let mut descriptor = base.clone();
            descriptor.id = self.next_id();
            descriptor.position = base.position + *offset;
            descriptor.name = format!("{} Pattern {}", base.name, k + 1);
            clones.push(SceneObject::materialize(&descriptor, factory)?);
        }

        let mut ids = Vec::with_capacity(clones.len());
        for clone in clones {
            ids.push(clone.id);
            self.insert(clone);
        }
        self.record("Apply pattern");
        Ok(ids)
    }
}
