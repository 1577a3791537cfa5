pub use crate::color::Color;
pub use crate::error::GuiError;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::input::{
    InputEvent, InputListener, Key, KeyEvent, Modifiers, PointerEvent, PointerKind,
    ScriptedListener,
};
pub use crate::render_api::{DrawCall, DrawSurface, RecordingSurface, TextureId, TextureRegion};
pub use crate::viewport::{ScalingViewport, StaticViewport, ViewportAdapter};
