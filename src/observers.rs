//! Observers that tie each label's UI node to its object's lifetime.
//!
//! Spawning the node from an `Add` observer and despawning it from a
//! `Remove` observer keeps the object↔label pairing one-to-one by
//! construction; there are no parallel collections to fall out of sync.

use bevy::prelude::*;

use crate::components::LabelElement;
use crate::components::LabelTarget;
use crate::components::ObjectLabel;
use crate::components::ObjectLabelConfig;
use crate::events::LabelAttached;
use crate::events::LabelDetached;

/// Observer for `ObjectLabel` insertion - spawns the matching UI node.
///
/// The node is absolutely positioned and shifted by half its own size so
/// the placement pass can anchor the projected point at the label's visual
/// center rather than its top-left corner. It starts hidden; the first
/// label pass decides visibility.
pub fn attach_label(
    add: On<Add, ObjectLabel>,
    mut commands: Commands,
    config: Res<ObjectLabelConfig>,
    label_query: Query<&ObjectLabel>,
) {
    let object = add.entity;
    let Ok(object_label) = label_query.get(object) else {
        return;
    };

    let label = commands
        .spawn((
            Text::new(object_label.text.clone()),
            TextFont {
                font_size: config.font_size,
                ..default()
            },
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            UiTransform::from_translation(Val2::new(Val::Percent(-50.0), Val::Percent(-50.0))),
            GlobalZIndex(0),
            Visibility::Hidden,
            LabelTarget(object),
        ))
        .id();

    commands.entity(object).insert(LabelElement(label));

    debug!("label {label:?} attached to object {object:?}");
    commands.trigger(LabelAttached { object, label });
}

/// Observer for `ObjectLabel` removal - despawns the UI node with it.
/// Also runs when the labeled object itself is despawned.
pub fn detach_label(
    remove: On<Remove, ObjectLabel>,
    mut commands: Commands,
    element_query: Query<&LabelElement>,
) {
    let object = remove.entity;
    let Ok(element) = element_query.get(object) else {
        return;
    };

    commands.entity(element.0).despawn();
    commands.entity(object).remove::<LabelElement>();

    debug!("label detached from object {object:?}");
    commands.trigger(LabelDetached { object });
}
