//! Projection and placement math for the label pass.
//!
//! Bevy projects through an infinite reverse-Z perspective: inside the
//! frustum, NDC x and y lie in [-1, 1] (y up) and depth z in [0, 1] with
//! z = 1 at the near plane, falling toward 0 with distance. Both ends of
//! the depth range count as inside.

use bevy::prelude::*;

/// Derived visual state for one label, recomputed from scratch every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Whether the label should be shown this frame
    pub visible:   bool,
    /// Overlay position in logical pixels, y down from the top-left
    pub position:  Vec2,
    /// Stacking order; nearer objects get strictly larger keys
    pub depth_key: i32,
}

/// Projects a world-space point through an explicit clip-from-world matrix.
/// Returns `None` for degenerate input: a point at the camera position has
/// no perspective divide and projects to NaN.
pub fn project_point(clip_from_world: &Mat4, world: Vec3) -> Option<Vec3> {
    let ndc = clip_from_world.project_point3(world);
    (!ndc.is_nan()).then_some(ndc)
}

/// Maps an NDC point onto the overlay: [-1, 1] x-right / y-up becomes
/// [0, viewport] x-right / y-down.
pub fn viewport_position(ndc: Vec3, viewport_size: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport_size.x,
        (ndc.y * -0.5 + 0.5) * viewport_size.y,
    )
}

/// Truncates scaled NDC depth to an integer stacking key. Reverse-Z depth
/// already grows toward the camera, so nearer labels get larger keys
/// without negation.
pub fn depth_key(ndc_z: f32, depth_scale: f32) -> i32 { (ndc_z * depth_scale) as i32 }

/// Depth range check, both planes inclusive. Guards the case where a point
/// sits on-screen in x/y but outside the near/far range, which an
/// unobstructed sight line would not catch.
fn in_depth_range(ndc_z: f32) -> bool { (0.0..=1.0).contains(&ndc_z) }

/// Combines the projected point and the occlusion verdict into the label's
/// visual state for the frame.
pub fn place(ndc: Vec3, position: Vec2, unoccluded: bool, depth_scale: f32) -> LabelPlacement {
    LabelPlacement {
        visible: unoccluded && in_depth_range(ndc.z),
        position,
        depth_key: depth_key(ndc.z, depth_scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);
    const DEPTH_SCALE: f32 = 100_000.0;

    fn clip_from_world(camera: Transform) -> Mat4 {
        let projection = Mat4::perspective_infinite_reverse_rh(
            75_f32.to_radians(),
            VIEWPORT.x / VIEWPORT.y,
            1.1,
        );
        projection * GlobalTransform::from(camera).to_matrix().inverse()
    }

    #[test]
    fn optical_axis_projects_to_screen_center() {
        let clip = clip_from_world(Transform::default());
        let ndc = project_point(&clip, Vec3::new(0.0, 0.0, -5.0)).unwrap();

        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
        assert_eq!(viewport_position(ndc, VIEWPORT), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn depth_falls_monotonically_with_distance() {
        let clip = clip_from_world(Transform::default());
        let near = project_point(&clip, Vec3::new(0.0, 0.0, -2.0)).unwrap();
        let mid = project_point(&clip, Vec3::new(0.0, 0.0, -5.0)).unwrap();
        let far = project_point(&clip, Vec3::new(0.0, 0.0, -20.0)).unwrap();

        assert!(near.z > mid.z);
        assert!(mid.z > far.z);
    }

    #[test]
    fn point_at_camera_position_does_not_project() {
        let camera = Transform::from_xyz(1.0, 2.0, 3.0);
        let clip = clip_from_world(camera);

        assert_eq!(project_point(&clip, camera.translation), None);
    }

    #[test]
    fn viewport_mapping_flips_y() {
        let top_left = viewport_position(Vec3::new(-1.0, 1.0, 0.5), VIEWPORT);
        let bottom_right = viewport_position(Vec3::new(1.0, -1.0, 0.5), VIEWPORT);

        assert_eq!(top_left, Vec2::ZERO);
        assert_eq!(bottom_right, VIEWPORT);
    }

    #[test]
    fn nearer_depth_yields_strictly_larger_key() {
        for scale in [1_000.0, 100_000.0, 10_000_000.0] {
            assert!(depth_key(0.8, scale) > depth_key(0.3, scale));
        }
    }

    #[test]
    fn depth_bounds_are_inclusive() {
        let position = Vec2::new(100.0, 100.0);

        let far_plane = place(Vec3::new(0.0, 0.0, 0.0), position, true, DEPTH_SCALE);
        assert!(far_plane.visible);
        assert_eq!(far_plane.depth_key, 0);

        let near_plane = place(Vec3::new(0.0, 0.0, 1.0), position, true, DEPTH_SCALE);
        assert!(near_plane.visible);
        assert_eq!(near_plane.depth_key, 100_000);

        let beyond_far = place(Vec3::new(0.0, 0.0, -0.001), position, true, DEPTH_SCALE);
        assert!(!beyond_far.visible);

        let inside_near = place(Vec3::new(0.0, 0.0, 1.001), position, true, DEPTH_SCALE);
        assert!(!inside_near.visible);
    }

    #[test]
    fn occluded_point_is_hidden_regardless_of_depth() {
        let placement = place(Vec3::new(0.0, 0.0, 0.5), Vec2::ZERO, false, DEPTH_SCALE);
        assert!(!placement.visible);
    }

    #[test]
    fn placement_is_deterministic() {
        let ndc = Vec3::new(0.25, -0.4, 0.6);
        let position = viewport_position(ndc, VIEWPORT);

        let first = place(ndc, position, true, DEPTH_SCALE);
        let second = place(ndc, position, true, DEPTH_SCALE);
        assert_eq!(first, second);
    }
}
