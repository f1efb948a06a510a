//! Deterministic tessellators for the parametric shape kinds.
//!
//! All meshes are Z-up, centered on the origin, sized in millimeters.
//! Vertices are duplicated across hard edges so flat faces carry flat
//! normals; curved surfaces share smoothed normals around their seams.

use glam::DVec3;
use shape_types::ShapeSpec;

use crate::types::{EngineError, TriMesh};

struct MeshBuilder {
    positions: Vec<f64>,
    normals: Vec<f64>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    fn vertex(&mut self, p: DVec3, n: DVec3) -> u32 {
        let index = (self.positions.len() / 3) as u32;
        self.positions.extend_from_slice(&[p.x, p.y, p.z]);
        self.normals.extend_from_slice(&[n.x, n.y, n.z]);
        index
    }

    fn tri(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.tri(a, b, c);
        self.tri(a, c, d);
    }

    /// Push a rectangular face centered at `center`, spanned by half-extent
    /// tangents `u` and `v` with `u x v` pointing along the outward normal.
    fn face(&mut self, center: DVec3, u: DVec3, v: DVec3) {
        let n = u.cross(v).normalize();
        let a = self.vertex(center - u - v, n);
        let b = self.vertex(center + u - v, n);
        let c = self.vertex(center + u + v, n);
        let d = self.vertex(center - u + v, n);
        self.quad(a, b, c, d);
    }

    fn finish(self) -> TriMesh {
        TriMesh {
            positions: self.positions,
            normals: self.normals,
            indices: self.indices,
        }
    }
}

/// Tessellate a parametric spec. Errs for kinds whose mesh only exists as
/// an explicit geometry payload.
pub fn build(spec: &ShapeSpec) -> Result<TriMesh, EngineError> {
    match *spec {
        ShapeSpec::Box {
            width,
            depth,
            height,
        } => Ok(build_box(width, depth, height)),
        ShapeSpec::Sphere { radius, quality } => Ok(build_sphere(radius, quality)),
        ShapeSpec::Cylinder {
            radius,
            height,
            quality,
        } => Ok(build_frustum(radius, radius, height, quality)),
        ShapeSpec::Cone {
            top_radius,
            bottom_radius,
            height,
            quality,
        } => Ok(build_frustum(bottom_radius, top_radius, height, quality)),
        ShapeSpec::Torus {
            diameter,
            thickness,
            quality,
        } => Ok(build_torus(diameter, thickness, quality)),
        ShapeSpec::Pyramid { base_size, height } => Ok(build_pyramid(base_size, height)),
        ShapeSpec::Capsule {
            radius,
            height,
            quality,
        } => Ok(build_capsule(radius, height, quality)),
        ShapeSpec::Tube {
            outer_radius,
            inner_radius,
            height,
            quality,
        } => Ok(build_tube(outer_radius, inner_radius, height, quality)),
        ShapeSpec::Text {} | ShapeSpec::Csg {} | ShapeSpec::Imported {} => {
            Err(EngineError::NotParametric {
                kind: spec.kind().display_name().to_lowercase(),
            })
        }
    }
}

fn build_box(width: f64, depth: f64, height: f64) -> TriMesh {
    let (hx, hy, hz) = (width / 2.0, depth / 2.0, height / 2.0);
    let x = DVec3::new(hx, 0.0, 0.0);
    let y = DVec3::new(0.0, hy, 0.0);
    let z = DVec3::new(0.0, 0.0, hz);

    let mut b = MeshBuilder::new();
    b.face(x, y, z); // +x
    b.face(-x, z, y); // -x
    b.face(y, z, x); // +y
    b.face(-y, x, z); // -y
    b.face(z, x, y); // +z
    b.face(-z, y, x); // -z
    b.finish()
}

fn build_sphere(radius: f64, quality: u32) -> TriMesh {
    let stacks = quality.max(3);
    let slices = quality.max(3);
    let mut b = MeshBuilder::new();

    for i in 0..=stacks {
        let theta = std::f64::consts::PI * i as f64 / stacks as f64;
        let (sin_t, cos_t) = theta.sin_cos();
        for j in 0..=slices {
            let phi = std::f64::consts::TAU * j as f64 / slices as f64;
            let (sin_p, cos_p) = phi.sin_cos();
            let n = DVec3::new(sin_t * cos_p, sin_t * sin_p, cos_t);
            b.vertex(n * radius, n);
        }
    }
    stitch_rows(&mut b, stacks, slices);
    b.finish()
}

/// Connect `rows + 1` rows of `cols + 1` vertices each into quads, assuming
/// rows were pushed top to bottom with outward normals.
fn stitch_rows(b: &mut MeshBuilder, rows: u32, cols: u32) {
    for i in 0..rows {
        for j in 0..cols {
            let v00 = i * (cols + 1) + j;
            let v01 = v00 + 1;
            let v10 = v00 + cols + 1;
            let v11 = v10 + 1;
            b.tri(v00, v10, v11);
            b.tri(v00, v11, v01);
        }
    }
}

/// Cylinder/cone side wall plus end caps. `top_radius` may be zero, which
/// collapses the top ring into an apex and drops the top cap.
fn build_frustum(bottom_radius: f64, top_radius: f64, height: f64, quality: u32) -> TriMesh {
    let q = quality.max(3);
    let hz = height / 2.0;
    let slope = (bottom_radius - top_radius) / height;
    let mut b = MeshBuilder::new();

    // Side wall: two rings sharing slanted smooth normals
    let mut bottom_ring = Vec::with_capacity((q + 1) as usize);
    let mut top_ring = Vec::with_capacity((q + 1) as usize);
    for j in 0..=q {
        let phi = std::f64::consts::TAU * j as f64 / q as f64;
        let (sin_p, cos_p) = phi.sin_cos();
        let n = DVec3::new(cos_p, sin_p, slope).normalize();
        bottom_ring.push(b.vertex(
            DVec3::new(bottom_radius * cos_p, bottom_radius * sin_p, -hz),
            n,
        ));
        top_ring.push(b.vertex(DVec3::new(top_radius * cos_p, top_radius * sin_p, hz), n));
    }
    for j in 0..q as usize {
        b.tri(bottom_ring[j], bottom_ring[j + 1], top_ring[j + 1]);
        b.tri(bottom_ring[j], top_ring[j + 1], top_ring[j]);
    }

    cap(&mut b, bottom_radius, -hz, q, false);
    if top_radius > f64::EPSILON {
        cap(&mut b, top_radius, hz, q, true);
    }
    b.finish()
}

/// Flat disc cap at `z`, facing up or down.
fn cap(b: &mut MeshBuilder, radius: f64, z: f64, quality: u32, facing_up: bool) {
    let n = DVec3::new(0.0, 0.0, if facing_up { 1.0 } else { -1.0 });
    let center = b.vertex(DVec3::new(0.0, 0.0, z), n);
    let mut ring = Vec::with_capacity((quality + 1) as usize);
    for j in 0..=quality {
        let phi = std::f64::consts::TAU * j as f64 / quality as f64;
        ring.push(b.vertex(DVec3::new(radius * phi.cos(), radius * phi.sin(), z), n));
    }
    for j in 0..quality as usize {
        if facing_up {
            b.tri(center, ring[j], ring[j + 1]);
        } else {
            b.tri(center, ring[j + 1], ring[j]);
        }
    }
}

fn build_torus(diameter: f64, thickness: f64, quality: u32) -> TriMesh {
    let q = quality.max(3);
    let major = diameter / 2.0;
    let minor = thickness / 2.0;
    let mut b = MeshBuilder::new();

    for i in 0..=q {
        let u = std::f64::consts::TAU * i as f64 / q as f64;
        let (sin_u, cos_u) = u.sin_cos();
        for j in 0..=q {
            let v = std::f64::consts::TAU * j as f64 / q as f64;
            let (sin_v, cos_v) = v.sin_cos();
            let n = DVec3::new(cos_v * cos_u, cos_v * sin_u, sin_v);
            let p = DVec3::new(
                (major + minor * cos_v) * cos_u,
                (major + minor * cos_v) * sin_u,
                minor * sin_v,
            );
            b.vertex(p, n);
        }
    }
    stitch_rows(&mut b, q, q);
    b.finish()
}

fn build_pyramid(base_size: f64, height: f64) -> TriMesh {
    let half = base_size / 2.0;
    let hz = height / 2.0;
    let apex = DVec3::new(0.0, 0.0, hz);
    // Base corners, counter-clockwise seen from above
    let corners = [
        DVec3::new(half, -half, -hz),
        DVec3::new(half, half, -hz),
        DVec3::new(-half, half, -hz),
        DVec3::new(-half, -half, -hz),
    ];
    let mut b = MeshBuilder::new();

    // Four flat-shaded sides
    for i in 0..4 {
        let c0 = corners[i];
        let c1 = corners[(i + 1) % 4];
        let n = (c1 - c0).cross(apex - c0).normalize();
        let a = b.vertex(c0, n);
        let bb = b.vertex(c1, n);
        let t = b.vertex(apex, n);
        b.tri(a, bb, t);
    }

    // Base, facing down
    let n = DVec3::new(0.0, 0.0, -1.0);
    let base: Vec<u32> = corners.iter().map(|&c| b.vertex(c, n)).collect();
    b.tri(base[0], base[3], base[2]);
    b.tri(base[0], base[2], base[1]);
    b.finish()
}

/// Capsule with `height` as the total extent, hemisphere caps included.
fn build_capsule(radius: f64, height: f64, quality: u32) -> TriMesh {
    let q = quality.max(4);
    let hemi = (q / 2).max(2);
    let cyl_half = ((height - 2.0 * radius) / 2.0).max(0.0);
    let mut b = MeshBuilder::new();

    // Rows from the top pole down through both hemispheres; the duplicated
    // equator rows leave a straight-walled band for the cylinder section.
    let mut rows = 0;
    for (center_z, theta_start) in [(cyl_half, 0.0), (-cyl_half, std::f64::consts::FRAC_PI_2)] {
        for i in 0..=hemi {
            let theta =
                theta_start + std::f64::consts::FRAC_PI_2 * i as f64 / hemi as f64;
            let (sin_t, cos_t) = theta.sin_cos();
            for j in 0..=q {
                let phi = std::f64::consts::TAU * j as f64 / q as f64;
                let (sin_p, cos_p) = phi.sin_cos();
                let n = DVec3::new(sin_t * cos_p, sin_t * sin_p, cos_t);
                b.vertex(n * radius + DVec3::new(0.0, 0.0, center_z), n);
            }
            rows += 1;
        }
    }
    stitch_rows(&mut b, rows - 1, q);
    b.finish()
}

/// Annular prism: outer wall, inner wall, and flat ring caps. Generated
/// directly rather than by subtracting cylinders so the factory stays
/// independent of the boolean engine.
fn build_tube(outer_radius: f64, inner_radius: f64, height: f64, quality: u32) -> TriMesh {
    let q = quality.max(3);
    let hz = height / 2.0;
    let mut b = MeshBuilder::new();

    let ring = |b: &mut MeshBuilder, radius: f64, z: f64, n_fn: &dyn Fn(f64, f64) -> DVec3| {
        let mut ids = Vec::with_capacity((q + 1) as usize);
        for j in 0..=q {
            let phi = std::f64::consts::TAU * j as f64 / q as f64;
            let (sin_p, cos_p) = phi.sin_cos();
            ids.push(b.vertex(
                DVec3::new(radius * cos_p, radius * sin_p, z),
                n_fn(cos_p, sin_p),
            ));
        }
        ids
    };

    let radial_out = |c: f64, s: f64| DVec3::new(c, s, 0.0);
    let radial_in = |c: f64, s: f64| DVec3::new(-c, -s, 0.0);
    let up = |_: f64, _: f64| DVec3::Z;
    let down = |_: f64, _: f64| -DVec3::Z;

    // Outer wall
    let ob = ring(&mut b, outer_radius, -hz, &radial_out);
    let ot = ring(&mut b, outer_radius, hz, &radial_out);
    for j in 0..q as usize {
        b.tri(ob[j], ob[j + 1], ot[j + 1]);
        b.tri(ob[j], ot[j + 1], ot[j]);
    }

    // Inner wall, wound the other way so it faces the bore
    let ib = ring(&mut b, inner_radius, -hz, &radial_in);
    let it = ring(&mut b, inner_radius, hz, &radial_in);
    for j in 0..q as usize {
        b.tri(ib[j], it[j], it[j + 1]);
        b.tri(ib[j], it[j + 1], ib[j + 1]);
    }

    // Top ring cap
    let to = ring(&mut b, outer_radius, hz, &up);
    let ti = ring(&mut b, inner_radius, hz, &up);
    for j in 0..q as usize {
        b.tri(to[j], to[j + 1], ti[j + 1]);
        b.tri(to[j], ti[j + 1], ti[j]);
    }

    // Bottom ring cap
    let bo = ring(&mut b, outer_radius, -hz, &down);
    let bi = ring(&mut b, inner_radius, -hz, &down);
    for j in 0..q as usize {
        b.tri(bo[j], bi[j], bi[j + 1]);
        b.tri(bo[j], bi[j + 1], bo[j + 1]);
    }
    b.finish()
}

#[cfg(test)]
mod tests {
    use shape_types::ShapeKind;

    use super::*;

    fn aabb_of(spec: &ShapeSpec) -> (DVec3, DVec3) {
        build(spec).unwrap().aabb().unwrap()
    }

    #[test]
    fn box_has_24_vertices_12_triangles() {
        let mesh = build(&ShapeKind::Box.default_spec()).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn box_bounds_match_dimensions() {
        let (min, max) = aabb_of(&ShapeSpec::Box {
            width: 20.0,
            depth: 10.0,
            height: 40.0,
        });
        assert_eq!(min, DVec3::new(-10.0, -5.0, -20.0));
        assert_eq!(max, DVec3::new(10.0, 5.0, 20.0));
    }

    #[test]
    fn sphere_bounds_match_radius() {
        let (min, max) = aabb_of(&ShapeKind::Sphere.default_spec());
        assert!((max.z - 10.0).abs() < 1e-9);
        assert!((min.z + 10.0).abs() < 1e-9);
        // Equator passes through a sampled vertex at phi = 0
        assert!((max.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn cone_with_zero_top_radius_has_apex() {
        let (min, max) = aabb_of(&ShapeKind::Cone.default_spec());
        assert!((max.z - 10.0).abs() < 1e-9);
        assert!((min.x + 10.0).abs() < 1e-9);
    }

    #[test]
    fn capsule_total_height_includes_caps() {
        let (min, max) = aabb_of(&ShapeSpec::Capsule {
            radius: 5.0,
            height: 20.0,
            quality: 16,
        });
        assert!((max.z - 10.0).abs() < 1e-9);
        assert!((min.z + 10.0).abs() < 1e-9);
        assert!((max.x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn tube_bore_is_open() {
        let mesh = build(&ShapeKind::Tube.default_spec()).unwrap();
        // No vertex closer to the axis than the inner radius
        let min_radial = (0..mesh.vertex_count())
            .map(|i| {
                let v = mesh.vertex(i);
                (v.x * v.x + v.y * v.y).sqrt()
            })
            .fold(f64::INFINITY, f64::min);
        assert!((min_radial - 6.0).abs() < 1e-9);
    }

    #[test]
    fn torus_bounds_match_diameter_and_thickness() {
        let (min, max) = aabb_of(&ShapeKind::Torus.default_spec());
        assert!((max.x - 12.0).abs() < 1e-9);
        assert!((max.z - 2.0).abs() < 1e-9);
        assert!((min.z + 2.0).abs() < 1e-9);
    }

    #[test]
    fn same_spec_tessellates_identically() {
        let spec = ShapeKind::Cylinder.default_spec();
        assert_eq!(build(&spec).unwrap(), build(&spec).unwrap());
    }

    #[test]
    fn non_parametric_kinds_are_rejected() {
        assert!(matches!(
            build(&ShapeSpec::Csg {}),
            Err(EngineError::NotParametric { .. })
        ));
        assert!(matches!(
            build(&ShapeSpec::Text {}),
            Err(EngineError::NotParametric { .. })
        ));
    }
}
