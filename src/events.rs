//! Lifecycle events for label attachment.

use bevy::prelude::*;

/// Fired after a label UI node has been spawned for a labeled object.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct LabelAttached {
    #[event_target]
    pub object: Entity,
    pub label:  Entity,
}

/// Fired after a labeled object's UI node has been despawned.
///
/// A plain event rather than an entity-targeted one: it also fires when the
/// object itself is despawned, at which point `object` no longer resolves.
#[derive(Event, Reflect)]
pub struct LabelDetached {
    pub object: Entity,
}
