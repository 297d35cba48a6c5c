//! Sight-line visualization for debugging label occlusion.
//!
//! Draws a line from the camera to every labeled object, colored by the
//! label's committed visibility. Uses Bevy's GizmoConfigGroup pattern.

use bevy::prelude::*;

use crate::LabelUpdateSystems;
use crate::components::LabelElement;

/// Gizmo config group for label sight lines.
/// Toggle via `GizmoConfigStore::config_mut::<SightLineGizmo>().enabled`
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct SightLineGizmo {}

/// Colors for the sight-line overlay
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct SightLineVisualizationConfig {
    /// Sight line of a label that is shown this frame
    pub clear_color:    Color,
    /// Sight line of a label hidden by occlusion or clipping
    pub blocked_color:  Color,
}

impl Default for SightLineVisualizationConfig {
    fn default() -> Self {
        Self {
            clear_color:   Color::srgb(0.0, 1.0, 0.0),
            blocked_color: Color::srgb(1.0, 0.0, 0.0),
        }
    }
}

/// Plugin that draws camera-to-object sight lines for labeled objects
pub struct SightLineVisualizationPlugin;

impl Plugin for SightLineVisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<SightLineGizmo>()
            .init_resource::<SightLineVisualizationConfig>()
            .add_systems(Startup, init_sight_line_gizmo)
            .add_systems(PostUpdate, draw_sight_lines.after(LabelUpdateSystems));
    }
}

/// Disabled by default; hosts flip it on to inspect occlusion decisions
fn init_sight_line_gizmo(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<SightLineGizmo>();
    config.enabled = false;
}

/// Draws one line per labeled object, colored by whether the label pass
/// left its node visible this frame.
fn draw_sight_lines(
    mut gizmos: Gizmos<SightLineGizmo>,
    viz_config: Res<SightLineVisualizationConfig>,
    camera_query: Query<&GlobalTransform, With<Camera3d>>,
    object_query: Query<(&GlobalTransform, &LabelElement)>,
    visibility_query: Query<&Visibility>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    for (object_transform, element) in &object_query {
        let Ok(visibility) = visibility_query.get(element.0) else {
            continue;
        };

        let color = if matches!(visibility, Visibility::Hidden) {
            viz_config.blocked_color
        } else {
            viz_config.clear_color
        };
        gizmos.line(
            camera_transform.translation(),
            object_transform.translation(),
            color,
        );
    }
}
