use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use steamer_client::{
    SteamerApi, SteamerClient,
    common::config::{ClientConfig, DEFAULT_ORIGIN},
};

mod cli;
mod console;

use cli::{Cli, Command, SettingsAction};

/// 配置文件 < 命令行参数
fn load_config(args: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::load_or_default(args.config.as_deref())?;
    if let Some(origin) = &args.origin {
        config.origin = origin.clone();
    }
    if args.timeout.is_some() {
        config.timeout_secs = args.timeout;
    }
    debug!("使用配置: {:?}", config);
    Ok(config)
}

async fn run(args: Cli) -> Result<()> {
    let config = load_config(&args)?;
    let origin = config
        .origin_url()
        .with_context(|| format!("请检查 --origin，例如 {}", DEFAULT_ORIGIN))?;
    let client = SteamerClient::new(origin, config.timeout())?;
    let api: Arc<dyn SteamerApi> = Arc::new(client);

    match args.command {
        Command::Login {
            username,
            password,
            two_factor,
            email_code,
        } => {
            console::run_login(
                api,
                console::LoginArgs {
                    username,
                    password,
                    two_factor,
                    email_code,
                },
            )
            .await
        }
        Command::Settings { action } => match action {
            SettingsAction::Show { mode, prefill } => {
                console::run_settings_show(api, config.settings, mode, prefill).await
            }
            SettingsAction::Set {
                mode,
                prefill,
                path,
                os,
                languages,
            } => {
                console::run_settings_set(
                    api,
                    config.settings,
                    mode,
                    prefill,
                    console::SettingsEdits {
                        path,
                        os,
                        languages,
                    },
                )
                .await
            }
        },
        Command::Download {
            app_id,
            page_url,
            start,
            end,
        } => console::run_download(api, app_id, page_url, start, end).await,
        Command::Queue => console::run_queue(api).await,
        Command::Populate => console::run_populate(api).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // 初始化日志
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    run(args).await.map_err(|e| {
        error!("{:#}", e);
        e
    })
}
