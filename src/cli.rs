//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Args, Parser};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 PNG、BMP 图像中隐藏或恢复消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 PNG、BMP 图像中隐藏或恢复消息。\n消息末尾追加 4 个 '~' 作为结束标记，图像中不保存消息长度。"
)]
pub struct Cli {
    /// 输出更详细的日志 (-v 为 info，-vv 为 debug，-vvv 为 trace)。
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在 PNG 或 BMP 图像中隐藏消息。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的消息。
    Recover(RecoverArgs),

    /// 检查消息能否放入图像，或图像中是否可能存在消息。
    Check(CheckArgs),

    /// 检查文件格式是否受支持。
    Info(InfoArgs),
}

/// 消息来源：文本文件或直接在命令行中给出的字符串，二者只能选其一。
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct MessageSource {
    /// 要隐藏的消息所在的文件路径。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 直接在命令行中给出的消息。
    #[arg(short, long)]
    pub message: Option<String>,
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (png 或 bmp)。
    #[arg(short, long)]
    pub image: PathBuf,

    #[command(flatten)]
    pub source: MessageSource,

    /// 结果图像的输出路径，默认为输入图像旁的 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复出的消息的保存路径，默认为图像旁的 `recovered_<文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'check' 命令所需的参数。
///
/// 给出消息时检查其能否放入图像；否则检查图像中是否可能存在消息。
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// 要检查的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    #[command(flatten)]
    pub source: MessageSource,
}

/// 'info' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// 要检查格式的文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
