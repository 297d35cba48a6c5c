//! Components and configuration for object labels.

use bevy::prelude::*;

/// Attaches a screen-space text label to a 3D entity.
///
/// Insert on any entity with a `GlobalTransform`; a UI node showing `text`
/// is spawned automatically and follows the entity's projected position
/// every frame. Removing the component despawns the node with it.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct ObjectLabel {
    /// Display text, fixed for the label's lifetime.
    pub text: String,
}

impl ObjectLabel {
    pub fn new(text: impl Into<String>) -> Self { Self { text: text.into() } }
}

/// The labeled object a UI label node tracks.
#[derive(Component, Reflect, Debug)]
#[reflect(Component)]
pub struct LabelTarget(pub Entity);

/// The UI label node spawned for a labeled object.
/// Present exactly while the object's `ObjectLabel` is present.
#[derive(Component, Reflect, Debug)]
#[reflect(Component)]
pub struct LabelElement(pub Entity);

/// Configuration for label appearance and depth stacking
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct ObjectLabelConfig {
    /// Font size of spawned label nodes
    pub font_size:   f32,
    /// Scale applied to NDC depth before truncating to the label's z-index.
    /// NDC depth spans about one unit of floating point range; spreading it
    /// over a wide integer range keeps closely spaced objects on distinct
    /// stacking layers. Objects whose depths differ by less than 1/scale
    /// can still tie.
    pub depth_scale: f32,
}

impl Default for ObjectLabelConfig {
    fn default() -> Self {
        Self {
            font_size:   16.0,
            depth_scale: 100_000.0,
        }
    }
}
