//! Per-frame label pass: project, test line of sight, commit visual state.

use bevy::log::warn_once;
use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;

use crate::components::LabelTarget;
use crate::components::ObjectLabelConfig;
use crate::occlusion::line_of_sight;
use crate::placement::place;
use crate::placement::viewport_position;

/// System that recomputes every label's screen position, visibility, and
/// stacking order from the current object transforms, camera state, and
/// scene geometry.
///
/// All derived label state is overwritten unconditionally each frame, so a
/// frame's output depends only on that frame's inputs — there is no cached
/// state to invalidate. Runs after transform propagation and camera
/// updates so world positions and the viewport size are current.
pub fn update_labels(
    mut ray_cast: MeshRayCast,
    config: Res<ObjectLabelConfig>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    object_query: Query<&GlobalTransform>,
    mut label_query: Query<(&LabelTarget, &mut Node, &mut Visibility, &mut GlobalZIndex)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        warn_once!("label pass skipped: no unique Camera3d in the world");
        return;
    };
    let Some(viewport_size) = camera.logical_viewport_size() else {
        warn_once!("label pass skipped: camera has no viewport");
        return;
    };

    for (target, mut node, mut visibility, mut z_index) in &mut label_query {
        let Ok(object_transform) = object_query.get(target.0) else {
            continue;
        };

        // A degenerate projection (object at the camera position) hides the
        // label rather than failing the pass.
        let Some(ndc) = camera.world_to_ndc(camera_transform, object_transform.translation())
        else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let position = viewport_position(ndc, viewport_size);
        let unoccluded =
            line_of_sight(&mut ray_cast, camera, camera_transform, position, target.0);
        let placement = place(ndc, position, unoccluded, config.depth_scale);

        node.left = Val::Px(placement.position.x);
        node.top = Val::Px(placement.position.y);
        z_index.0 = placement.depth_key;
        *visibility = if placement.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
