// bevy_object_labels
// Screen-space labels for 3D scene objects:
// - Each label follows its object's projected position every frame
// - Labels hide while other geometry blocks the camera's line of sight
// - Overlapping labels stack by their object's depth from the camera

use bevy::camera::CameraUpdateSystems;
use bevy::prelude::*;
use bevy::transform::TransformSystems;

mod components;
mod events;
mod motion;
mod observers;
mod occlusion;
mod placement;
pub mod prelude;
mod tracking;
#[cfg(feature = "visualization")]
mod visualization;

// Public API - Components
pub use components::LabelElement;
pub use components::LabelTarget;
pub use components::ObjectLabel;

// Public API - Configuration resources
pub use components::ObjectLabelConfig;

// Public API - Events
pub use events::LabelAttached;
pub use events::LabelDetached;

// Public API - Motion policy (optional plugin, swappable by hosts)
pub use motion::Spin;
pub use motion::SpinMotionPlugin;
pub use motion::spin_objects;
pub use motion::spin_rotation;

// Public API - Placement math (usable without a live render target)
pub use placement::LabelPlacement;
pub use placement::depth_key;
pub use placement::place;
pub use placement::project_point;
pub use placement::viewport_position;

// Public API - Occlusion queries
pub use occlusion::line_of_sight;
pub use occlusion::nearest_hit_is;

// Public API - Visualization (feature-gated)
#[cfg(feature = "visualization")]
pub use visualization::SightLineGizmo;
#[cfg(feature = "visualization")]
pub use visualization::SightLineVisualizationConfig;
#[cfg(feature = "visualization")]
pub use visualization::SightLineVisualizationPlugin;

// Internal - used by plugin, not for external use
use observers::{attach_label, detach_label};
use tracking::update_labels;

/// Set containing the per-frame label pass, for hosts that need to order
/// their own systems against it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelUpdateSystems;

/// Plugin that adds label projection, occlusion testing, and placement
pub struct ObjectLabelsPlugin;

impl Plugin for ObjectLabelsPlugin {
    fn build(&self, app: &mut App) {
        app
            // Reflection registrations
            .register_type::<ObjectLabel>()
            .register_type::<LabelTarget>()
            .register_type::<LabelElement>()
            .register_type::<ObjectLabelConfig>()
            // Label lifecycle: the UI node is spawned and despawned with
            // its object's ObjectLabel component
            .add_observer(attach_label)
            .add_observer(detach_label)
            // Per-frame pass, after the engine has applied window resizes
            // to the camera and propagated world transforms
            .add_systems(
                PostUpdate,
                update_labels
                    .in_set(LabelUpdateSystems)
                    .after(TransformSystems::Propagate)
                    .after(CameraUpdateSystems),
            )
            // Initialize resources
            .init_resource::<ObjectLabelConfig>();
    }
}
