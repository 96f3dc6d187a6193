use clap::{Parser, Subcommand};
use std::path::PathBuf;

use steamer_client::common::config::SettingsMode;

/// Steamer 下载服务控制端
#[derive(Parser, Debug)]
#[command(name = "steamer")]
#[command(version = "1.0")]
#[command(about = "Steamer 下载服务的命令行控制端", long_about = None)]
pub struct Cli {
    /// 服务地址，例如 http://127.0.0.1:5000
    #[arg(long, global = true, value_name = "URL")]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub origin: Option<String>,

    /// 配置文件 (默认读取当前目录下的 steamer.json)
    #[arg(long, global = true, value_name = "FILE")]
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// 请求超时秒数，不指定则不超时
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 登录 Steam 账号，必要时会提示输入二次验证码
    Login {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: Option<String>,

        /// 2FA 验证码
        #[arg(long = "2fa", value_name = "CODE")]
        two_factor: Option<String>,

        /// 邮箱验证码
        #[arg(long, value_name = "CODE")]
        email_code: Option<String>,
    },

    /// 查看或修改下载设置
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// 为应用计划下载时间段
    Download {
        /// 应用 ID，会转换为 <origin>/app/<ID> 页面
        #[arg(long, required_unless_present = "page_url", conflicts_with = "page_url")]
        app_id: Option<u64>,

        /// 应用页面地址，例如 http://127.0.0.1:5000/app/440
        #[arg(long, value_name = "URL")]
        page_url: Option<String>,

        /// 开始时间 HH:MM
        #[arg(long, value_name = "HH:MM")]
        start: String,

        /// 结束时间 HH:MM
        #[arg(long, value_name = "HH:MM")]
        end: String,
    },

    /// 查看服务端下载队列
    Queue,

    /// 让服务端刷新应用列表
    Populate,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// 显示当前设置
    Show {
        #[arg(long, value_enum)]
        mode: Option<SettingsMode>,

        /// 用服务器上的列表填充标签
        #[arg(long)]
        prefill: bool,
    },

    /// 修改并提交设置
    Set {
        #[arg(long, value_enum)]
        mode: Option<SettingsMode>,

        #[arg(long)]
        prefill: bool,

        /// 新的下载路径
        #[arg(long, value_name = "DIR")]
        path: Option<String>,

        /// 添加 OS 过滤 (可重复)
        #[arg(long = "os", value_name = "OS")]
        os: Vec<String>,

        /// 添加语言过滤 (可重复)
        #[arg(long = "lang", value_name = "LANG")]
        languages: Vec<String>,
    },
}
