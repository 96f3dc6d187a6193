use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use steamer_client::{
    SteamerApi,
    auth::{LoginController, LoginOutcome, LoginPhase, SecondFactorKind},
    common::{
        config::{SettingsConfig, SettingsMode},
        logger::PrettyLogger,
        message_log::MessageLog,
    },
    downloader::{DownloadController, DownloadQueue, populate_apps},
    log_error, log_info, log_step, log_success, log_warning,
    settings::{InputKey, SettingsController, TagListKind},
};
use tracing::{debug, warn};
use url::Url;

const MAX_LOGIN_ATTEMPTS: usize = 5;

fn prompt(label: &str) -> Result<String> {
    print!("{} ", format!("{}:", label).blue().bold());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// 输出消息日志中 `since` 之后的新行
fn render_log(log: &MessageLog, since: usize) {
    for line in log.since(since) {
        PrettyLogger::server_message(line);
    }
}

pub struct LoginArgs {
    pub username: Option<String>,
    pub password: Option<String>,
    pub two_factor: Option<String>,
    pub email_code: Option<String>,
}

pub async fn run_login(api: Arc<dyn SteamerApi>, args: LoginArgs) -> Result<()> {
    log_step!("登录 Steam");
    let mut controller = LoginController::new(api);

    let username = match args.username {
        Some(username) => username,
        None => prompt("用户名")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt("密码")?,
    };
    {
        let form = controller.form_mut();
        form.username = username;
        form.password = password;
        if let Some(code) = args.two_factor {
            form.set_code(SecondFactorKind::TwoFactor, code);
        }
        if let Some(code) = args.email_code {
            form.set_code(SecondFactorKind::EmailCode, code);
        }
    }

    for attempt in 1..=MAX_LOGIN_ATTEMPTS {
        debug!("登录尝试 {}/{}", attempt, MAX_LOGIN_ATTEMPTS);
        let seen = controller.log().len();
        let outcome = controller.submit().await.context("登录请求失败")?;
        render_log(controller.log(), seen);

        match outcome {
            LoginOutcome::Authenticated { notice, redirect } => {
                log_success!("{}", notice);
                log_info!("跳转到 {}", redirect);
                return Ok(());
            }
            LoginOutcome::Rejected { target, .. } => match controller.state().phase() {
                LoginPhase::AwaitingSecondFactor(kind) => {
                    let code = prompt(kind.label())?;
                    controller.form_mut().set_code(kind, code);
                }
                _ => bail!("登录失败 ({:?})", target),
            },
        }
    }

    bail!("登录尝试次数过多")
}

fn settings_config(
    base: SettingsConfig,
    mode: Option<SettingsMode>,
    prefill: bool,
) -> SettingsConfig {
    SettingsConfig {
        mode: mode.unwrap_or(base.mode),
        prefill_tag_lists: base.prefill_tag_lists || prefill,
    }
}

fn render_settings(controller: &SettingsController) {
    let form = controller.form();
    PrettyLogger::title("下载设置");
    PrettyLogger::field(
        "下载路径",
        form.download_location.as_deref().unwrap_or("(未加载)"),
    );
    if controller.mode() == SettingsMode::TagList {
        PrettyLogger::tags("OS 过滤", &form.os_list.labels());
        PrettyLogger::tags("语言过滤", &form.languages.labels());
    }
    PrettyLogger::separator();
}

pub async fn run_settings_show(
    api: Arc<dyn SteamerApi>,
    base: SettingsConfig,
    mode: Option<SettingsMode>,
    prefill: bool,
) -> Result<()> {
    let mut controller = SettingsController::new(api, settings_config(base, mode, prefill));
    controller.load().await.context("获取设置失败")?;
    render_log(controller.log(), 0);
    render_settings(&controller);
    Ok(())
}

pub struct SettingsEdits {
    pub path: Option<String>,
    pub os: Vec<String>,
    pub languages: Vec<String>,
}

pub async fn run_settings_set(
    api: Arc<dyn SteamerApi>,
    base: SettingsConfig,
    mode: Option<SettingsMode>,
    prefill: bool,
    edits: SettingsEdits,
) -> Result<()> {
    let mut controller = SettingsController::new(api, settings_config(base, mode, prefill));

    if let Err(e) = controller.load().await {
        log_warning!("无法获取当前设置: {}", e);
    }

    if let Some(path) = edits.path {
        controller.set_download_location(path);
    }

    let has_tags = !edits.os.is_empty() || !edits.languages.is_empty();
    if controller.mode() == SettingsMode::Simple && has_tags {
        log_warning!("简单模式下忽略 OS/语言过滤，使用 --mode tag-list 提交标签");
    }
    for (kind, values) in [
        (TagListKind::Os, edits.os),
        (TagListKind::Languages, edits.languages),
    ] {
        let list = controller.tag_list_mut(kind);
        for value in values {
            list.set_input(value);
            list.handle_key(InputKey::Enter);
        }
    }

    let seen = controller.log().len();
    match controller.submit().await {
        Ok(_) => {
            render_log(controller.log(), seen);
            render_settings(&controller);
            Ok(())
        }
        Err(e) => {
            log_error!("提交设置失败: {}", e);
            Err(e.into())
        }
    }
}

pub async fn run_download(
    api: Arc<dyn SteamerApi>,
    app_id: Option<u64>,
    page_url: Option<String>,
    start: String,
    end: String,
) -> Result<()> {
    let mut controller = match (app_id, page_url) {
        (_, Some(page_url)) => {
            let page = Url::parse(&page_url).context("无效的页面地址")?;
            DownloadController::new(api, page)
        }
        (Some(app_id), None) => DownloadController::for_app(api, app_id)?,
        (None, None) => bail!("需要 --app-id 或 --page-url"),
    };

    let form = controller.form_mut();
    form.start_time = start;
    form.end_time = end;

    let window = controller.window()?;
    log_step!("计划下载: {}", controller.page_url());
    PrettyLogger::field(
        "时间段",
        format!(
            "{}:{} - {}:{}",
            window.start.hour, window.start.minute, window.end.hour, window.end.minute
        ),
    );
    if window.passes_midnight() {
        log_info!("时间段跨越午夜");
    }
    if window.contains(chrono::Local::now().time()) {
        log_info!("当前时间已在下载时间段内");
    }

    let handle = controller.submit()?;
    // 请求本身不等待结果，这里只是避免进程在发送前退出
    if let Err(e) = handle.await {
        warn!("下载任务异常结束: {}", e);
    }
    log_success!("下载计划已提交");
    Ok(())
}

pub async fn run_queue(api: Arc<dyn SteamerApi>) -> Result<()> {
    let queue = DownloadQueue::fetch(&api)
        .await
        .context("获取下载队列失败")?;

    PrettyLogger::title("下载队列");
    if queue.is_empty() {
        log_info!("队列为空");
    }
    for entry in &queue.entries {
        PrettyLogger::field(format!("app {}", entry.app_id), &entry.state);
    }
    PrettyLogger::separator();
    Ok(())
}

pub async fn run_populate(api: Arc<dyn SteamerApi>) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("正在刷新应用列表，可能需要较长时间...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = populate_apps(&api).await;
    spinner.finish_and_clear();

    match result.context("刷新应用列表失败")? {
        true => log_success!("应用列表已刷新"),
        false => log_warning!("服务端未报告完成"),
    }
    Ok(())
}
