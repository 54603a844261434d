use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use ratatui::layout::Rect;
use tracing::info;

use swipedeck_core::{AppConfig, Carousel};
use swipedeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme,
    terminal::TerminalSession,
    ui,
};

pub fn run(config: &AppConfig, deck: Option<&Path>) -> Result<()> {
    let items = super::load_items(config, deck)?;
    info!("Starting carousel with {} cards", items.len());

    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let carousel = Carousel::new(items, config.engine_config());
    let mut app = App::new(carousel, config, theme);
    let mut events = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.animation_fps,
        config.glow.interval_ms,
    );

    let mut session = TerminalSession::enter("swipedeck")?;
    let size = session.terminal().size()?;
    app.resize(Rect::new(0, 0, size.width, size.height));

    let result = run_loop(&mut session, &mut app, &mut events, &keymap, config);

    let carousel = app.into_carousel();
    info!("Carousel closed ({} cards)", carousel.len());

    session.restore()?;
    result
}

fn run_loop(
    session: &mut TerminalSession,
    app: &mut App,
    events: &mut EventHandler,
    keymap: &Keymap,
    config: &AppConfig,
) -> Result<()> {
    let mut dirty = true;

    loop {
        if dirty {
            session
                .terminal()
                .draw(|frame| ui::draw(frame, app, &config.keymap))?;
            dirty = false;
        }

        let Some(event) = events.next()? else {
            continue;
        };
        let now = Instant::now();

        match event {
            AppEvent::Key(key) => {
                let action = handle_key_event(key, app, keymap);
                app.apply_action(action);
                dirty = true;
            }
            AppEvent::Mouse(mouse) => {
                app.on_mouse(mouse, now);
                dirty = true;
            }
            AppEvent::Resize(width, height) => {
                app.resize(Rect::new(0, 0, width, height));
                dirty = true;
            }
            AppEvent::Frame => {
                // idle frames only redraw if something was still moving
                dirty |= app.needs_animation();
                app.on_frame(now);
            }
            AppEvent::GlowTick => {
                let before = app.carousel.glow_intensity();
                app.on_glow_tick(now);
                dirty |= (app.carousel.glow_intensity() - before).abs() > 1e-3;
            }
        }

        events.set_animating(app.needs_animation(), now);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
