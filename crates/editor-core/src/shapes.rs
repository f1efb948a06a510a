//! Shape creation, duplication and mirroring.

use mesh_engine::MeshFactory;
use shape_types::{Color, ObjectId, ShapeKind, Vec3};

use crate::errors::SessionError;
use crate::scene::SceneObject;
use crate::EditorSession;

/// World axis, used by mirror and pattern placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Default colors cycled as objects are created. Deterministic so a
/// rebuilt scene always matches its snapshot.
const PALETTE: [Color; 8] = [
    Color { r: 0.91, g: 0.30, b: 0.24 },
    Color { r: 0.20, g: 0.60, b: 0.86 },
    Color { r: 0.18, g: 0.80, b: 0.44 },
    Color { r: 0.95, g: 0.77, b: 0.06 },
    Color { r: 0.61, g: 0.35, b: 0.71 },
    Color { r: 0.90, g: 0.49, b: 0.13 },
    Color { r: 0.10, g: 0.74, b: 0.61 },
    Color { r: 0.52, g: 0.58, b: 0.65 },
];

impl EditorSession {
    /// Add a primitive with its default dimensions, resting on the
    /// workplane, and record one history entry.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        factory: &mut dyn MeshFactory,
    ) -> Result<ObjectId, SessionError> {
        let spec = kind.default_spec();
        let mesh = factory.build_primitive(&spec)?;
        let id = self.next_id();
        let name = format!("{} {}", kind.display_name(), id.value());
        let color = PALETTE[(id.value() as usize - 1) % PALETTE.len()];

        let mut object = SceneObject::from_parts(id, name.clone(), spec, mesh, color);
        object.position = Vec3::new(0.0, 0.0, object.spec.vertical_extent() / 2.0);

        self.insert(object);
        self.record(format!("Add {name}"));
        Ok(id)
    }

    /// Deep-copy an object, operand tree and geometry payload included,
    /// offset so the copy is visibly beside the original.
    pub fn duplicate_object(
        &mut self,
        id: ObjectId,
        factory: &mut dyn MeshFactory,
    ) -> Result<ObjectId, SessionError> {
        let mut descriptor = self.require(id)?.capture();
        descriptor.id = self.next_id();
        descriptor.position = descriptor.position + Vec3::new(10.0, 10.0, 0.0);
        descriptor.name = self.unique_name(&descriptor.name, "Copy");

        let copy = SceneObject::materialize(&descriptor, factory)?;
        let name = copy.name.clone();
        self.insert(copy);
        self.record(format!("Duplicate {name}"));
        Ok(descriptor.id)
    }

    /// Mirrored copy across the origin plane perpendicular to `axis`:
    /// position reflects, and geometry-payload shapes flip their scaling
    /// on that axis. Parametric primitives are symmetric about their own
    /// center, so reflecting their position is the whole mirror.
    pub fn mirror_object(
        &mut self,
        id: ObjectId,
        axis: Axis,
        factory: &mut dyn MeshFactory,
    ) -> Result<ObjectId, SessionError> {
        let mut descriptor = self.require(id)?.capture();
        descriptor.id = self.next_id();
        match axis {
            Axis::X => descriptor.position.x = -descriptor.position.x,
            Axis::Y => descriptor.position.y = -descriptor.position.y,
            Axis::Z => descriptor.position.z = -descriptor.position.z,
        }
        if descriptor.geometry.is_some() {
            let mut scaling = descriptor.scaling.unwrap_or(Vec3::ONE);
            match axis {
                Axis::X => scaling.x = -scaling.x,
                Axis::Y => scaling.y = -scaling.y,
                Axis::Z => scaling.z = -scaling.z,
            }
            descriptor.scaling = Some(scaling);
        }
        let suffix = match axis {
            Axis::X => "Mirror X",
            Axis::Y => "Mirror Y",
            Axis::Z => "Mirror Z",
        };
        descriptor.name = self.unique_name(&descriptor.name, suffix);

        let mirrored = SceneObject::materialize(&descriptor, factory)?;
        let name = mirrored.name.clone();
        self.insert(mirrored);
        self.record(format!("{suffix} {name}"));
        Ok(descriptor.id)
    }

    /// `"Box 1 (Copy)"`, then `"Box 1 (Copy 2)"` and so on until unused.
    fn unique_name(&self, base: &str, suffix: &str) -> String {
        let first = format!("{base} ({suffix})");
        if self.object_with_name(&first).is_none() {
            return first;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base} ({suffix} {n})");
            if self.object_with_name(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    fn object_with_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects().iter().find(|o| o.name == name)
    }
}
