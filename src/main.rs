//! Custom Timer - A work/break interval timer daemon
//!
//! This is the main entry point for the custom-timer application.

use std::sync::Arc;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::info;

use custom_timer::{
    api::create_router,
    config::Config,
    services::{
        CanberraSoundPlayer, FeedbackEmitter, HapticPlayer, IdleInhibitor, LoggingHaptics,
        NoopSound, SoundPlayer,
    },
    state::AppState,
    tasks::{idle_guard_task, renderer_task, spawn_clock_ticker},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("custom_timer={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting custom-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, work={}min, break={}min",
          config.host, config.port, config.work, config.break_minutes);

    let sound: Arc<dyn SoundPlayer> = if config.no_sound_output {
        Arc::new(NoopSound)
    } else {
        Arc::new(CanberraSoundPlayer::new(config.sound_id.clone()))
    };
    let haptics: Arc<dyn HapticPlayer> = Arc::new(LoggingHaptics);

    // Create the controller
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.timer_config(),
        config.feedback_settings(),
        FeedbackEmitter::new(sound, haptics),
    ));

    // Start the idle guard before anything can start the clock
    let (idle_shutdown_tx, idle_shutdown_rx) = oneshot::channel();
    let idle_guard = if config.no_idle_inhibit {
        None
    } else {
        let idle_state = Arc::clone(&state);
        Some(tokio::spawn(async move {
            idle_guard_task(idle_state, IdleInhibitor::new(), idle_shutdown_rx).await;
        }))
    };

    if !config.no_render {
        let render_state = Arc::clone(&state);
        tokio::spawn(async move {
            renderer_task(render_state).await;
        });
    }

    let ticker = spawn_clock_ticker(Arc::clone(&state));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Control surface on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle             - Start or stop the timer");
    info!("  POST /duration/work      - Commit work length {{\"minutes\": n}}");
    info!("  POST /duration/break     - Commit break length {{\"minutes\": n}}");
    info!("  POST /feedback/haptic    - Toggle haptics {{\"enabled\": bool}}");
    info!("  POST /feedback/sound     - Toggle sounds {{\"enabled\": bool}}");
    info!("  GET  /status             - Current clock and view");
    info!("  GET  /health             - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    ticker.stop();
    if let Some(handle) = idle_guard {
        let _ = idle_shutdown_tx.send(());
        if let Err(e) = handle.await {
            tracing::warn!("Idle guard did not stop cleanly: {}", e);
        }
    }

    info!("Shutdown complete");
    Ok(())
}
