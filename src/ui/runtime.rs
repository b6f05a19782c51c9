use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::{self, Sources};
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(120);
const COMMAND_QUEUE: usize = 32;

pub fn run(config: Config, start: Route) -> anyhow::Result<()> {
    let sources = Sources::from_config(&config).context("Failed to build HTTP clients")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("apiscope-worker")
        .build()
        .context("Failed to start async runtime")?;

    let events = EventHandler::new(TICK_RATE);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    let deliver_tx = events.sender();
    runtime.spawn(worker::run(command_rx, sources, move |outcome| {
        deliver_tx.send(AppEvent::Fetched(outcome)).is_ok()
    }));

    let mut app = App::new(&config);
    app.set_command_sender(command_tx);

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    app.start(start);
    tracing::info!(route = ?start, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Fetched(outcome)) => app.on_fetched(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight requests are abandoned rather than awaited.
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("UI stopped");
    Ok(())
}
