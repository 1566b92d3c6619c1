//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix
//! - Application: Registry, Startup, Router, Dispatcher
//! - Interface: Feature Modules
//!
#![recursion_limit = "256"]

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::MilliSecondsSinceUnixEpoch,
    ruma::events::{
        reaction::OriginalSyncReactionEvent,
        room::{
            member::{MembershipState, StrippedRoomMemberEvent},
            message::{MessageType, SyncRoomMessageEvent},
        },
    },
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Notify;
use tracing_appender::non_blocking::WorkerGuard;

use crate::application::dispatcher::Dispatcher;
use crate::application::guard::Guard;
use crate::application::router::CommandRouter;
use crate::application::startup::{FeatureModule, register_all};
use crate::domain::config::{AppConfig, LoggingConfig};
use crate::domain::traits::RoomDirectory;
use crate::domain::types::MessageContext;
use crate::infrastructure::matrix::{MatrixDirectory, MatrixService, room_scope};
use crate::interface::commands::{
    admin::AdminCommands, core::CoreCommands, gatekeeper::Gatekeeper, member::MemberCommands,
    stats::StatsCommands,
};
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(name = "swampkeeper", about = "Matrix community bot")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,

    /// Directory for the session log (overrides `logging.directory`)
    #[arg(long)]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(&args.config)?;
    if let Some(dir) = args.data_dir {
        config.logging.directory = dir;
    }

    // 2. Logging Setup
    let _guard = init_logging(&config.logging)?;
    tracing::info!("{}", logs::STARTING);
    tracing::info!("{}", logs::config_loaded(&config.services.matrix.username));

    // 3. Matrix Login
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .send()
        .await
        .context("Failed to log in")?;

    tracing::info!("{}", logs::LOGIN_SUCCESS);

    if let Some(name) = &config.services.matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 4. Feature Modules
    let guard = Arc::new(Guard::new(&config.system));
    let directory: Arc<dyn RoomDirectory> = Arc::new(MatrixDirectory::new(client.clone()));
    let shutdown = Arc::new(Notify::new());

    let gatekeeper = Arc::new(Gatekeeper::new(
        config.gatekeeper.clone(),
        config.system.log_room.clone(),
        directory.clone(),
    ));

    let mut modules: Vec<Arc<dyn FeatureModule>> = Vec::new();
    modules.push(Arc::new(CoreCommands::new(
        config.commands.prefix.clone(),
        config.system.rules_room.clone(),
    )));
    modules.push(Arc::new(AdminCommands::new(
        guard.clone(),
        directory.clone(),
        shutdown.clone(),
    )));
    modules.push(Arc::new(MemberCommands::new(guard.clone())));
    modules.push(Arc::new(StatsCommands::new(guard.clone(), chrono::Utc::now())));
    modules.push(gatekeeper.clone());

    // 5. Registration Phase (registry is read-only afterwards)
    let registry = register_all(&modules);
    let dispatcher = Arc::new(Dispatcher::new(registry));
    let router = Arc::new(CommandRouter::new(dispatcher, config.commands.prefix.clone()));

    // 6. Event Handlers (the first sync replays history; skip anything older than us)
    let start_time = SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            if predates(ev.origin_server_ts(), start_time) {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };
            if original_msg.sender == room.own_user_id() {
                return;
            }

            let scope = room_scope(&room).await;
            let ctx = MessageContext::new(
                original_msg.event_id.to_string(),
                original_msg.sender.to_string(),
                text_content.body.clone(),
                Arc::new(MatrixService::new(room)),
            );

            // Action failures surface here
            if let Err(e) = router.route(&ctx, scope).await {
                tracing::error!("{}", logs::route_failed(&e.to_string()));
            }
        }
    });

    if gatekeeper.setup() {
        client.add_event_handler(move |ev: OriginalSyncReactionEvent, client: Client| {
            let gatekeeper = gatekeeper.clone();

            async move {
                if predates(ev.origin_server_ts, start_time) {
                    return;
                }
                if client.user_id() == Some(&*ev.sender) {
                    return;
                }
                let annotation = &ev.content.relates_to;
                gatekeeper
                    .check_reaction(
                        ev.sender.as_str(),
                        &annotation.key,
                        annotation.event_id.as_str(),
                    )
                    .await;
            }
        });
    }

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            match room.join().await {
                Ok(_) => tracing::info!("{}", logs::JOIN_INVITE_SUCCESS),
                Err(e) => tracing::warn!("{}", logs::join_invite_fail(&e.to_string())),
            }
        }
    });

    // 7. Sync until shutdown
    tracing::info!("{}", logs::SYNC_LOOP_START);
    let sync_client = client.clone();
    let sync_handle = tokio::spawn(async move {
        sync_client.sync(SyncSettings::default()).await
    });

    tokio::select! {
        res = sync_handle => match res {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("{}", logs::sync_loop_fail(&e.to_string())),
            Err(e) => tracing::error!("{}", logs::sync_loop_fail(&e.to_string())),
        },
        _ = shutdown.notified() => {}
        res = tokio::signal::ctrl_c() => {
            if let Err(e) = res {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
            }
        }
    }

    tracing::info!("{}", logs::SHUTDOWN);
    Ok(())
}

/// Whether an event was sent before the bot started.
fn predates(ts: MilliSecondsSinceUnixEpoch, start_time: SystemTime) -> bool {
    UNIX_EPOCH + Duration::from_millis(ts.get().into()) < start_time
}

/// Console plus a fresh `session.log` in the data directory.
fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let dir = Path::new(&config.directory);
    if !dir.exists() {
        fs::create_dir_all(dir).context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = dir.join(&config.file);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(dir, &config.file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}
