//! Convenient re-exports for common types and traits

pub use crate::LabelUpdateSystems;
pub use crate::ObjectLabelsPlugin;
pub use crate::components::LabelElement;
pub use crate::components::LabelTarget;
pub use crate::components::ObjectLabel;
pub use crate::components::ObjectLabelConfig;
pub use crate::events::LabelAttached;
pub use crate::events::LabelDetached;
pub use crate::motion::Spin;
pub use crate::motion::SpinMotionPlugin;
pub use crate::placement::LabelPlacement;
