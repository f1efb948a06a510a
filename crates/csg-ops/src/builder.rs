use glam::DMat4;
use tracing::debug;

use mesh_engine::{CsgHandle, GeometryEngine};
use shape_types::{BooleanOp, ShapeDescriptor};

use crate::materialize::{local_matrix, local_mesh};
use crate::types::{CsgError, HandlePool};

/// Produce the boolean-geometry input for one live object.
///
/// A composite with a recorded operand tree is rebuilt from that tree,
/// placed under the object's current transform. Anything else converts its
/// mesh directly. Every handle created along the way lands in `pool`; the
/// caller extracts the result mesh and then releases the pool whether the
/// build succeeded or not.
pub fn build_boolean_input(
    descriptor: &ShapeDescriptor,
    engine: &mut dyn GeometryEngine,
    pool: &mut HandlePool,
) -> Result<CsgHandle, CsgError> {
    if descriptor.is_composite() {
        let operands = descriptor.operands.as_deref().unwrap_or_default();
        let operation = descriptor
            .operation
            .unwrap_or(BooleanOp::Union);
        debug!(
            id = descriptor.id.value(),
            %operation,
            operands = operands.len(),
            "rebuilding boolean input from operand tree"
        );
        return rebuild_tree(operands, operation, &local_matrix(descriptor), engine, pool);
    }

    let mut mesh = local_mesh(descriptor, engine.as_factory())?;
    mesh.transform(&local_matrix(descriptor));
    let handle = engine.from_mesh(&mesh)?;
    Ok(pool.track(handle))
}

/// Left-fold `operation` across the operands: operand 0 is the base, each
/// later operand is applied in stored order. Subtract and intersect are
/// order-sensitive, so the capture order is the semantics.
pub fn rebuild_tree(
    operands: &[ShapeDescriptor],
    operation: BooleanOp,
    parent_world: &DMat4,
    engine: &mut dyn GeometryEngine,
    pool: &mut HandlePool,
) -> Result<CsgHandle, CsgError> {
    if operands.len() < 2 {
        return Err(CsgError::TooFewOperands {
            count: operands.len(),
        });
    }

    let mut result = operand_to_geometry(&operands[0], parent_world, engine, pool)?;
    for operand in &operands[1..] {
        let next = operand_to_geometry(operand, parent_world, engine, pool)?;
        let combined = engine.apply(operation, &result, &next)?;
        result = pool.track(combined);
    }
    Ok(result)
}

/// Convert one operand node to boolean geometry under `parent_world`.
///
/// A nested composite composes its own captured transform onto the parent
/// and recurses, so each level only ever stores coordinates relative to its
/// immediate parent. A leaf bakes the full combined transform into a
/// freshly materialized mesh before conversion.
pub fn operand_to_geometry(
    descriptor: &ShapeDescriptor,
    parent_world: &DMat4,
    engine: &mut dyn GeometryEngine,
    pool: &mut HandlePool,
) -> Result<CsgHandle, CsgError> {
    let combined = *parent_world * local_matrix(descriptor);

    if descriptor.is_composite() {
        let operands = descriptor.operands.as_deref().unwrap_or_default();
        let operation = descriptor.operation.unwrap_or(BooleanOp::Union);
        return rebuild_tree(operands, operation, &combined, engine, pool);
    }

    let mut mesh = local_mesh(descriptor, engine.as_factory())?;
    mesh.transform(&combined);
    let handle = engine.from_mesh(&mesh)?;
    Ok(pool.track(handle))
}
