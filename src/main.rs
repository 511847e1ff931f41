use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lsb_sentinel::{
    cli::{Cli, Commands},
    handler::{handle_check, handle_hide, handle_info, handle_recover},
};

/// 程序的主入口点
///
/// 负责解析命令行参数、初始化日志，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // -v 的次数决定日志级别，RUST_LOG 仍然可以覆盖
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args),
        Commands::Check(args) => handle_check(args).map(|_| ()),
        Commands::Info(args) => handle_info(args).map(|_| ()),
    }
}
