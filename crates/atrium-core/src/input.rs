use std::collections::VecDeque;
use std::time::Duration;

use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// A single pointer sample in UI space. Constructed per raw input callback
/// and handed to the dispatcher; never retained across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn mouse(position: Vec2) -> Self {
        PointerEvent {
            kind: PointerKind::Mouse,
            position,
        }
    }

    pub fn touch(position: Vec2) -> Self {
        PointerEvent {
            kind: PointerKind::Touch,
            position,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Space,
    F(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        KeyEvent {
            key,
            modifiers: Modifiers::default(),
            is_repeat: false,
        }
    }
}

/// Raw event as emitted by an input listener, before viewport mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    WheelMoved { delta: f32 },
    KeyTyped(KeyEvent),
    KeyPressed(KeyEvent),
}

/// A low-level input source polled once per update tick.
///
/// Listeners deliver events synchronously through the sink; the GUI system
/// processes each one fully before the listener's `update` returns.
pub trait InputListener {
    fn update(&mut self, elapsed: Duration, sink: &mut dyn FnMut(InputEvent));
}

/// Replays a pre-queued event script, draining the whole queue each tick.
/// Used by tests and headless demos in place of a real device listener.
#[derive(Default)]
pub struct ScriptedListener {
    queue: VecDeque<InputEvent>,
}

impl ScriptedListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputListener for ScriptedListener {
    fn update(&mut self, _elapsed: Duration, sink: &mut dyn FnMut(InputEvent)) {
        while let Some(event) = self.queue.pop_front() {
            sink(event);
        }
    }
}
