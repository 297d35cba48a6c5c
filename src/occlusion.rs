//! Line-of-sight testing between the camera and labeled objects.

use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::picking::mesh_picking::ray_cast::MeshRayCastSettings;
use bevy::picking::mesh_picking::ray_cast::RayCastVisibility;
use bevy::prelude::*;

/// Casts a ray from the camera through a viewport point and reports whether
/// the nearest scene intersection is the expected entity.
///
/// Any raycastable mesh can occlude, not only labeled ones. A ray that
/// fails to build (no viewport, degenerate camera state) reports occluded.
pub fn line_of_sight(
    ray_cast: &mut MeshRayCast,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    viewport_position: Vec2,
    expected: Entity,
) -> bool {
    let Ok(ray) = camera.viewport_to_world(camera_transform, viewport_position) else {
        return false;
    };
    nearest_hit_is(ray_cast, ray, expected)
}

/// Nearest-hit identity check on a prebuilt ray.
///
/// A ray that hits nothing also reports occluded: an object that cannot
/// see itself along its own sight line is never shown. Hidden geometry is
/// skipped, and the cast early-exits once the nearest hit is known — still
/// linear in scene meshes per label, which is fine for tens of labels
/// against modest scenes.
pub fn nearest_hit_is(ray_cast: &mut MeshRayCast, ray: Ray3d, expected: Entity) -> bool {
    let settings = MeshRayCastSettings::default()
        .with_visibility(RayCastVisibility::Visible)
        .always_early_exit();

    ray_cast
        .cast_ray(ray, &settings)
        .first()
        .is_some_and(|(entity, _)| *entity == expected)
}
