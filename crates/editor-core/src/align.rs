//! Alignment operations over world-space bounds.

use shape_types::ObjectId;

use crate::errors::SessionError;
use crate::EditorSession;

/// Which bound of the reference object to line up against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    Left,
    Right,
    CenterX,
    Front,
    Back,
    CenterY,
    Bottom,
    Top,
    CenterZ,
}

impl AlignMode {
    fn axis(self) -> usize {
        match self {
            AlignMode::Left | AlignMode::Right | AlignMode::CenterX => 0,
            AlignMode::Front | AlignMode::Back | AlignMode::CenterY => 1,
            AlignMode::Bottom | AlignMode::Top | AlignMode::CenterZ => 2,
        }
    }

    /// Pick the alignment coordinate out of (min, max) bounds on the axis.
    fn pick(self, min: f64, max: f64) -> f64 {
        match self {
            AlignMode::Left | AlignMode::Front | AlignMode::Bottom => min,
            AlignMode::Right | AlignMode::Back | AlignMode::Top => max,
            AlignMode::CenterX | AlignMode::CenterY | AlignMode::CenterZ => (min + max) / 2.0,
        }
    }
}

impl EditorSession {
    /// Center objects on the workplane: x and y to zero, height kept.
    pub fn align_to_center(&mut self, ids: &[ObjectId]) -> Result<(), SessionError> {
        for &id in ids {
            self.require(id)?;
        }
        for &id in ids {
            if let Some(object) = self.object_mut(id) {
                object.position.x = 0.0;
                object.position.y = 0.0;
            }
        }
        self.record("Align to center");
        Ok(())
    }

    /// Center objects at the origin and drop them onto the workplane so
    /// their lowest point sits at z = 0.
    pub fn align_to_origin(&mut self, ids: &[ObjectId]) -> Result<(), SessionError> {
        for &id in ids {
            self.require(id)?;
        }
        for &id in ids {
            let Some(object) = self.object_mut(id) else {
                continue;
            };
            object.position.x = 0.0;
            object.position.y = 0.0;
            if let Some((min, _)) = object.world_bounds() {
                object.position.z -= min.z;
            }
        }
        self.record("Align to origin");
        Ok(())
    }

    /// Align objects against the first one in `ids`: translate each of the
    /// others so the chosen bound matches the reference object's.
    pub fn align_objects(&mut self, ids: &[ObjectId], mode: AlignMode) -> Result<(), SessionError> {
        if ids.len() < 2 {
            return Err(SessionError::InsufficientSelection {
                required: 2,
                selected: ids.len(),
            });
        }
        for &id in ids {
            self.require(id)?;
        }

        let axis = mode.axis();
        let reference = self.require(ids[0])?;
        let Some((ref_min, ref_max)) = reference.world_bounds() else {
            return Ok(());
        };
        let target = mode.pick(ref_min[axis], ref_max[axis]);

        for &id in &ids[1..] {
            let Some(object) = self.object_mut(id) else {
                continue;
            };
            let Some((min, max)) = object.world_bounds() else {
                continue;
            };
            let current = mode.pick(min[axis], max[axis]);
            let delta = target - current;
            match axis {
                0 => object.position.x += delta,
                1 => object.position.y += delta,
                _ => object.position.z += delta,
            }
        }
        self.record("Align objects");
        Ok(())
    }
}
