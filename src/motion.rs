//! Reference motion policy: time-parameterized spin.
//!
//! Shipped as its own plugin so hosts can swap the motion model without
//! touching the projection/occlusion pipeline; the label pass only reads
//! the transforms this writes. Runs in `Update`, ahead of transform
//! propagation, so the label pass sees this frame's rotations.

use bevy::prelude::*;

/// Spins an entity about its x and y axes at `speed` radians per second.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct Spin {
    pub speed: f32,
}

impl Spin {
    /// Staggered per-object rate: 1 + 0.1 × index, so a row of objects
    /// drifts visibly out of phase.
    pub const fn staggered(index: usize) -> Self {
        Self {
            speed: 1.0 + 0.1 * index as f32,
        }
    }
}

/// Plugin adding the spin motion system
pub struct SpinMotionPlugin;

impl Plugin for SpinMotionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Spin>().add_systems(Update, spin_objects);
    }
}

/// Sets each spinning entity's rotation from total elapsed time.
pub fn spin_objects(time: Res<Time>, mut query: Query<(&Spin, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (spin, mut transform) in &mut query {
        transform.rotation = spin_rotation(elapsed, spin.speed);
    }
}

/// Rotation after `elapsed` seconds at `speed`: the same angle applied to
/// the x and y axes.
pub fn spin_rotation(elapsed: f32, speed: f32) -> Quat {
    let angle = elapsed * speed;
    Quat::from_euler(EulerRot::XYZ, angle, angle, 0.0)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn staggered_rates_step_by_a_tenth() {
        assert!((Spin::staggered(0).speed - 1.0).abs() < 1e-6);
        assert!((Spin::staggered(1).speed - 1.1).abs() < 1e-6);
        assert!((Spin::staggered(2).speed - 1.2).abs() < 1e-6);
    }

    #[test]
    fn rotation_angle_tracks_elapsed_time() {
        for index in 0..3 {
            let spin = Spin::staggered(index);
            let delta = 0.25;
            let (x, y, z) = spin_rotation(delta, spin.speed).to_euler(EulerRot::XYZ);
            let expected = delta * (1.0 + 0.1 * index as f32);

            assert!((x - expected).abs() < 1e-5);
            assert!((y - expected).abs() < 1e-5);
            assert!(z.abs() < 1e-5);
        }
    }

    #[test]
    fn spin_system_applies_the_rule() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(500));
        world.insert_resource(time);

        let entity = world
            .spawn((Transform::default(), Spin::staggered(1)))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(spin_objects);
        schedule.run(&mut world);

        let rotation = world.get::<Transform>(entity).unwrap().rotation;
        let (x, y, _) = rotation.to_euler(EulerRot::XYZ);
        let expected = 0.5 * 1.1;

        assert!((x - expected).abs() < 1e-4);
        assert!((y - expected).abs() < 1e-4);
    }
}
