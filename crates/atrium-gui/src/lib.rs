//! # Retained-mode GUI system
//!
//! atrium-gui keeps a hierarchical control tree per GUI instance and, each
//! tick, routes raw pointer/keyboard events to the right control: hit-test
//! against the active screen, run the hover/focus state machines, then
//! bubble the event up the ancestor chain until a handler consumes it.
//! Each frame, the screen collection draws back-to-front.
//!
//! Controls live in an arena ([`ControlTree`]); parents own their children
//! through it, and the parent link is a plain index used only for upward
//! propagation. Stale [`ControlId`]s stop resolving once a control is
//! removed, so hover/focus can never dangle.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use atrium_core::{InputEvent, PointerEvent, RecordingSurface, StaticViewport, Vec2, Rect};
//! use atrium_gui::{Control, Dispatch, GuiSystem, Screen};
//!
//! let mut gui = GuiSystem::new(StaticViewport::new(800.0, 600.0), RecordingSurface::new());
//! let screen = gui.add_screen(Screen::new());
//!
//! let clicks = Rc::new(RefCell::new(0));
//! let counter = clicks.clone();
//! let button = gui
//!     .add_control(
//!         screen,
//!         Control::new(Rect::new(10.0, 10.0, 100.0, 30.0)).with_handler(move |event| {
//!             if let atrium_gui::ControlEvent::PointerUp(_) = event {
//!                 *counter.borrow_mut() += 1;
//!                 return Dispatch::Handled;
//!             }
//!             Dispatch::Continue
//!         }),
//!     )
//!     .unwrap();
//!
//! let p = Vec2::new(20.0, 20.0);
//! gui.dispatch_input(InputEvent::PointerMove(PointerEvent::mouse(p)));
//! gui.dispatch_input(InputEvent::PointerDown(PointerEvent::mouse(p)));
//! gui.dispatch_input(InputEvent::PointerUp(PointerEvent::mouse(p)));
//! gui.update(Duration::from_millis(16));
//!
//! assert_eq!(*clicks.borrow(), 1);
//! assert_eq!(gui.focused_control(), Some(button));
//! ```

pub mod control;
pub mod dispatch;
pub mod screen;
pub mod system;
pub mod tree;

pub use control::{Control, ControlEvent, ControlFlags, ControlId, ControlVisual, Dispatch, EventHandler};
pub use dispatch::Dispatcher;
pub use screen::{LayoutFn, Screen, ScreenId, UpdateFn};
pub use system::GuiSystem;
pub use tree::ControlTree;
