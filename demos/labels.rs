//! Labels that follow spinning cubes using `bevy_object_labels`.
//!
//! - Orbit with the mouse to move cubes in front of one another
//! - A label disappears while other geometry blocks its cube
//! - Overlapping labels layer nearest-cube-first
//! - Press 'V' to toggle sight-line visualization

use bevy::prelude::*;
use bevy_object_labels::SightLineGizmo;
use bevy_object_labels::SightLineVisualizationPlugin;
use bevy_object_labels::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

const CAMERA_DISTANCE: f32 = 7.0;
const CAMERA_FOV_DEGREES: f32 = 75.0;
const CAMERA_NEAR: f32 = 1.1;
const CAMERA_FAR: f32 = 50.0;
const CUBE_SPACING: f32 = 2.0;
const LIGHT_ILLUMINANCE: f32 = 1500.0;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            PanOrbitCameraPlugin,
            ObjectLabelsPlugin,
            SpinMotionPlugin,
            SightLineVisualizationPlugin,
        ))
        .add_systems(Startup, setup)
        .add_systems(Update, toggle_sight_lines)
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Directional light
    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_ILLUMINANCE,
            ..default()
        },
        Transform::from_xyz(-1.0, 2.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Three spinning cubes sharing one mesh, each with a label. The gold
    // label is long enough to overlap its neighbor when the camera swings
    // around, making the depth stacking visible.
    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let cubes = [
        (0.0, Color::srgb_u8(0x44, 0xaa, 0x88), "Aqua Colored Box"),
        (-CUBE_SPACING, Color::srgb_u8(0x88, 0x44, 0xaa), "Purple Colored Box"),
        (CUBE_SPACING, Color::srgb_u8(0xaa, 0x88, 0x44), "Gold Colored Box"),
    ];
    for (index, (x, color, name)) in cubes.into_iter().enumerate() {
        commands.spawn((
            Mesh3d(cube.clone()),
            MeshMaterial3d(materials.add(color)),
            Transform::from_xyz(x, 0.0, 0.0),
            Spin::staggered(index),
            ObjectLabel::new(name),
        ));
    }

    // Orbit camera looking at the origin from z = +7
    commands.spawn((
        PanOrbitCamera {
            radius: Some(CAMERA_DISTANCE),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
    ));

    // Instructions
    commands.spawn((
        Text::new(
            "Orbit to move cubes in front of each other\nLabels hide while their cube is \
             blocked\n\nPress 'V' to toggle sight lines",
        ),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

fn toggle_sight_lines(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    if keyboard.just_pressed(KeyCode::KeyV) {
        let (config, _) = config_store.config_mut::<SightLineGizmo>();
        config.enabled = !config.enabled;
    }
}
