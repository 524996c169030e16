use graphqlconf::app::{App, AppMessage};
use graphqlconf::cli::{parse_args, run_cli_command, CliCommand};
use graphqlconf::conference::ConferenceRepository;
use graphqlconf::startup::{init_logging, AppConfig, LogGuard};
use graphqlconf::terminal::{setup_panic_hook, TerminalManager};
use graphqlconf::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;

/// Animation tick for the loading spinner
const TICK_MS: u64 = 80;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let CliCommand::RunTui(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;
    setup_panic_hook();

    let config = AppConfig::from_env().apply_args(&options);
    let log_guard = init_logging(&config);
    info!(
        version = graphqlconf::cli::VERSION,
        endpoint = %config.endpoint,
        log_dir = ?log_guard.as_ref().map(LogGuard::dir),
        "Starting"
    );
    config.report_rejected();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))?;

    info!("Exited cleanly");
    drop(log_guard);
    Ok(())
}

async fn run(config: AppConfig) -> Result<()> {
    let api = ConferenceRepository::from_config(&config)
        .wrap_err("Failed to build HTTP client")?
        .into_shared();
    let mut app = App::new(api);

    let mut term_manager = TerminalManager::new()?;
    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_MS));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event error");
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
            return Ok(());
        }
    }
}
