use serde::{Deserialize, Serialize};

/// Shape kind discriminant, used for dispatch and display naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Pyramid,
    Capsule,
    Tube,
    Text,
    Csg,
    Imported,
}

impl ShapeKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Box => "Box",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Torus => "Torus",
            ShapeKind::Pyramid => "Pyramid",
            ShapeKind::Capsule => "Capsule",
            ShapeKind::Tube => "Tube",
            ShapeKind::Text => "Text",
            ShapeKind::Csg => "Group",
            ShapeKind::Imported => "Imported",
        }
    }

    /// The default parameter set a freshly added shape of this kind gets.
    /// Sizes are millimeters.
    pub fn default_spec(self) -> ShapeSpec {
        match self {
            ShapeKind::Box => ShapeSpec::Box {
                width: 20.0,
                depth: 20.0,
                height: 20.0,
            },
            ShapeKind::Sphere => ShapeSpec::Sphere {
                radius: 10.0,
                quality: 32,
            },
            ShapeKind::Cylinder => ShapeSpec::Cylinder {
                radius: 10.0,
                height: 20.0,
                quality: 32,
            },
            ShapeKind::Cone => ShapeSpec::Cone {
                top_radius: 0.0,
                bottom_radius: 10.0,
                height: 20.0,
                quality: 32,
            },
            ShapeKind::Torus => ShapeSpec::Torus {
                diameter: 20.0,
                thickness: 4.0,
                quality: 32,
            },
            ShapeKind::Pyramid => ShapeSpec::Pyramid {
                base_size: 20.0,
                height: 20.0,
            },
            ShapeKind::Capsule => ShapeSpec::Capsule {
                radius: 5.0,
                height: 20.0,
                quality: 16,
            },
            ShapeKind::Tube => ShapeSpec::Tube {
                outer_radius: 10.0,
                inner_radius: 6.0,
                height: 20.0,
                quality: 32,
            },
            ShapeKind::Text => ShapeSpec::Text {},
            ShapeKind::Csg => ShapeSpec::Csg {},
            ShapeKind::Imported => ShapeSpec::Imported {},
        }
    }
}

/// Closed union over shape kinds and their parameters.
///
/// Serializes adjacently tagged so a persisted record reads
/// `{"type": "box", "dimensions": {"width": ..., "depth": ..., "height": ...}}`.
/// Kinds that cannot be regenerated parametrically (text, csg, imported)
/// carry no dimensions; their mesh comes from an explicit geometry payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "dimensions", rename_all = "lowercase")]
pub enum ShapeSpec {
    Box {
        width: f64,
        depth: f64,
        height: f64,
    },
    Sphere {
        radius: f64,
        quality: u32,
    },
    Cylinder {
        radius: f64,
        height: f64,
        quality: u32,
    },
    #[serde(rename_all = "camelCase")]
    Cone {
        top_radius: f64,
        bottom_radius: f64,
        height: f64,
        quality: u32,
    },
    Torus {
        diameter: f64,
        thickness: f64,
        quality: u32,
    },
    #[serde(rename_all = "camelCase")]
    Pyramid {
        base_size: f64,
        height: f64,
    },
    Capsule {
        radius: f64,
        height: f64,
        quality: u32,
    },
    #[serde(rename_all = "camelCase")]
    Tube {
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
        quality: u32,
    },
    Text {},
    Csg {},
    Imported {},
}

impl ShapeSpec {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeSpec::Box { .. } => ShapeKind::Box,
            ShapeSpec::Sphere { .. } => ShapeKind::Sphere,
            ShapeSpec::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeSpec::Cone { .. } => ShapeKind::Cone,
            ShapeSpec::Torus { .. } => ShapeKind::Torus,
            ShapeSpec::Pyramid { .. } => ShapeKind::Pyramid,
            ShapeSpec::Capsule { .. } => ShapeKind::Capsule,
            ShapeSpec::Tube { .. } => ShapeKind::Tube,
            ShapeSpec::Text {} => ShapeKind::Text,
            ShapeSpec::Csg {} => ShapeKind::Csg,
            ShapeSpec::Imported {} => ShapeKind::Imported,
        }
    }

    /// True when a mesh can be rebuilt from the parameters alone.
    pub fn is_parametric(&self) -> bool {
        !matches!(
            self,
            ShapeSpec::Text {} | ShapeSpec::Csg {} | ShapeSpec::Imported {}
        )
    }

    /// Vertical extent of the generated mesh, used to rest new shapes on the
    /// workplane. Zero for kinds without a parametric height.
    pub fn vertical_extent(&self) -> f64 {
        match *self {
            ShapeSpec::Box { height, .. } => height,
            ShapeSpec::Sphere { radius, .. } => radius * 2.0,
            ShapeSpec::Cylinder { height, .. } => height,
            ShapeSpec::Cone { height, .. } => height,
            ShapeSpec::Torus { thickness, .. } => thickness,
            ShapeSpec::Pyramid { height, .. } => height,
            // Capsule height is the total extent, hemisphere caps included
            ShapeSpec::Capsule { height, .. } => height,
            ShapeSpec::Tube { height, .. } => height,
            ShapeSpec::Text {} | ShapeSpec::Csg {} | ShapeSpec::Imported {} => 0.0,
        }
    }
}
