use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use qh_search::app::{App, AppMessage};
use qh_search::cli::{parse_args, run_cli_command, run_info_command, CliCommand};
use qh_search::dataset::{DatasetIndex, RecordStore};
use qh_search::retrieval::RetrievalClient;
use qh_search::startup::{init_logging, spawn_health_probe, AppConfig, LogTarget};
use qh_search::terminal::{setup_panic_hook, TerminalManager};
use qh_search::ui;

/// Frame tick for the spinner and redraw checks.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = parse_args(std::env::args())?;

    color_eyre::install()?;

    // Version and help work even with a broken environment
    if let Some(result) = run_info_command(&args.command) {
        return result;
    }

    let config = args.apply(AppConfig::from_env()?);
    config.validate()?;

    let log_target = match args.command {
        CliCommand::RunTui => LogTarget::File(config.log_file.clone()),
        _ => LogTarget::Stderr,
    };
    if matches!(args.command, CliCommand::RunTui | CliCommand::Search(_)) {
        init_logging(&log_target, &config.log_filter)?;
    }

    if let Some(result) = run_cli_command(&args.command, &config) {
        return result;
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // The corpora are required; fail before touching the terminal
    let (quran, hadith) = config.datasets();
    let store = RecordStore::load(quran, hadith)?;
    let index = Arc::new(DatasetIndex::new(store));

    let client = RetrievalClient::new(config.search_url.clone());
    tracing::info!(url = client.base_url(), "Starting TUI");

    let mut app = App::new(index, Arc::new(client.clone()));
    if !config.skip_health_check {
        let _enter = runtime.enter();
        spawn_health_probe(client, app.message_tx.clone());
    }

    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(manager.terminal(), &mut app));

    manager.restore()?;
    if let Err(ref err) = result {
        tracing::error!(error = %err, "TUI exited with error");
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "Terminal event error");
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
