//! Headless wiring demo: a scripted pointer clicks a button on a menu
//! screen, and a recording surface stands in for the engine's sprite batch.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use atrium_core::{
    Color, InputEvent, PointerEvent, Rect, RecordingSurface, ScalingViewport, ScriptedListener,
    TextureId, TextureRegion, Vec2,
};
use atrium_gui::{Control, ControlEvent, ControlVisual, Dispatch, GuiSystem, Screen};

fn region(texture: u64) -> TextureRegion {
    TextureRegion::new(TextureId(texture), Rect::new(0.0, 0.0, 32.0, 32.0))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A 1600x1200 window scaled onto an 800x600 virtual UI.
    let mut viewport = ScalingViewport::new(800.0, 600.0);
    viewport.set_screen_size(1600.0, 1200.0);

    let surface = RecordingSurface::new();
    let mut gui = GuiSystem::new(viewport, surface.clone());

    let screen_id = gui.add_screen(
        Screen::new()
            .with_cursor(ControlVisual::new(region(9)))
            .with_layout(|_tree, bounds| {
                log::info!("menu laid out against {:?}", bounds);
            }),
    );

    let panel = gui.add_control(
        screen_id,
        Control::new(Rect::new(100.0, 100.0, 600.0, 400.0))
            .with_visual(ControlVisual::tinted(region(1), Color::from_hex("#223344"))),
    )?;

    let clicks = Rc::new(RefCell::new(0u32));
    let counter = clicks.clone();
    let button = gui.add_child(
        panel,
        Control::new(Rect::new(350.0, 280.0, 100.0, 40.0))
            .with_visual(ControlVisual::new(region(2)))
            .with_handler(move |event| match event {
                ControlEvent::PointerUp(_) => {
                    *counter.borrow_mut() += 1;
                    log::info!("button clicked");
                    Dispatch::Handled
                }
                _ => Dispatch::Continue,
            }),
    )?;

    // Raw coordinates are in window space; the viewport halves them.
    let press = Vec2::new(800.0, 600.0);
    let mut script = ScriptedListener::new();
    script.push(InputEvent::PointerMove(PointerEvent::mouse(press)));
    script.push(InputEvent::PointerDown(PointerEvent::mouse(press)));
    script.push(InputEvent::PointerUp(PointerEvent::mouse(press)));
    gui.add_listener(script);

    let tick = Duration::from_millis(16);
    for _ in 0..3 {
        gui.update(tick);
        gui.draw(tick);
    }

    println!("clicks: {}", clicks.borrow());
    println!("focused: {:?}", gui.focused_control() == Some(button));
    println!(
        "draw calls over {} frames: {}",
        surface.frames(),
        surface.calls().len()
    );

    Ok(())
}
