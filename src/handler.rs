//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover`、`check` 和 `info` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::capacity::{capacity, fits};
use crate::cli::{CheckArgs, HideArgs, InfoArgs, MessageSource, RecoverArgs};
use crate::constants::SENTINEL_COUNT;
use crate::format::{ImageFormat, resolve_format};
use crate::image_io::{load, save};
use crate::steganography::{decode, encode, may_message_exist};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// `check` 命令的检查结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// 消息可以放入图像。
    Fits,
    /// 消息过长。
    TooLong,
    /// 图像中存在结束标记，可能隐藏了消息。
    MessageMayExist,
    /// 图像中没有找到结束标记。
    NoMessage,
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和消息、检查隐写空间是否足够、调用隐写核心函数写入消息，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输入或输出图像的格式不受支持。
/// * 没有提供消息，或无法读取消息文件。
/// * 目标文件已存在且没有指定 `--force`。
/// * 无法读取输入图像，或图像没有足够的空间来隐藏消息。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let input_format = resolve_format(&args.image)?;
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, "doctored_", None));
    let output_format = resolve_format(&dest)?;
    ensure_writable(&dest, args.force)?;

    let message = read_message(&args.source)?
        .context("No message given. \nUse --text <FILE> or --message <TEXT>.")?;

    let mut picture = load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    info!(
        "Hiding {} bytes in {} ({:?} -> {:?})",
        message.len(),
        args.image.display(),
        input_format,
        output_format
    );
    encode(&mut picture, input_format.descriptor(), &message).with_context(|| {
        format!(
            "Not enough space in the image to hide the message: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    save(&picture, &dest, output_format).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、扫描结束标记恢复消息，
/// 最后将恢复的消息写入目标文本文件。图像中没有消息时写入空文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 图像格式不受支持，或无法读取图像文件。
/// * 目标文件已存在且没有指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let format = resolve_format(&args.image)?;
    let dest = args
        .text
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, "recovered_", Some("txt")));
    ensure_writable(&dest, args.force)?;

    let picture = load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = decode(&picture, format.descriptor());
    debug!("Recovered {} bytes from {}", message.len(), args.image.display());

    fs::write(&dest, &message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    if message.is_empty() {
        println!(
            "The image may have been encoded, but no message was found: {}",
            args.image.to_string_lossy().yellow().bold()
        );
    } else {
        println!(
            "The message ({} bytes) has been successfully recovered and saved: {}",
            message.len().to_string().green(),
            dest.to_string_lossy().green().bold()
        );
    }

    Ok(())
}

/// 处理 'Check' 命令的执行逻辑。
///
/// 给出消息时检查其能否放入图像，否则检查图像中是否可能存在隐藏消息。
///
/// # Errors
///
/// 图像格式不受支持、无法读取图像或消息文件时返回错误。
pub fn handle_check(args: CheckArgs) -> Result<CheckOutcome> {
    let format = resolve_format(&args.image)?;
    let message = read_message(&args.source)?;

    let picture = load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let descriptor = format.descriptor();

    let outcome = match message {
        Some(message) if fits(picture.width(), picture.height(), message.len(), descriptor) => {
            CheckOutcome::Fits
        }
        Some(_) => CheckOutcome::TooLong,
        None if may_message_exist(&picture, descriptor) => CheckOutcome::MessageMayExist,
        None => CheckOutcome::NoMessage,
    };

    match outcome {
        CheckOutcome::Fits => println!("{}", "Message will fit in the image".green()),
        CheckOutcome::TooLong => println!(
            "{} (capacity: {} bytes including {} sentinel bytes)",
            "Message is too long".red().bold(),
            capacity(picture.width(), picture.height(), descriptor),
            SENTINEL_COUNT
        ),
        CheckOutcome::MessageMayExist => {
            println!("{}", "Message may exist inside of the image".green())
        }
        CheckOutcome::NoMessage => {
            println!("{}", "Message does not exist inside of the image".yellow())
        }
    }

    Ok(outcome)
}

/// 处理 'Info' 命令的执行逻辑：报告文件格式是否受支持。
pub fn handle_info(args: InfoArgs) -> Result<Option<ImageFormat>> {
    if !ImageFormat::is_supported(&args.image) {
        println!(
            "File format is not supported: {} \nSupported file formats: {}",
            args.image.to_string_lossy().red().bold(),
            ImageFormat::ALL.map(|format| format!(".{}", format.extension())).join(" ")
        );
        return Ok(None);
    }

    let format = resolve_format(&args.image)?;
    println!(
        "File format is supported: {}",
        format.extension().green().bold()
    );

    Ok(Some(format))
}

/// 读取消息内容：优先使用命令行中的字符串，其次读取文本文件。
fn read_message(source: &MessageSource) -> Result<Option<Vec<u8>>> {
    if let Some(message) = &source.message {
        return Ok(Some(message.clone().into_bytes()));
    }

    source
        .text
        .as_ref()
        .map(|path| {
            fs::read(path).with_context(|| {
                format!(
                    "Unable to read text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })
        })
        .transpose()
}

/// 没有指定 `--force` 时拒绝覆盖已存在的文件。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 在 `path` 所在目录下生成带前缀的默认输出路径。
///
/// `extension` 为 `None` 时保留原文件名，否则替换扩展名。
fn sibling_path(path: &Path, prefix: &str, extension: Option<&str>) -> PathBuf {
    let name = match extension {
        Some(extension) => {
            let stem = path.file_stem().unwrap_or_default().to_string_lossy();
            format!("{prefix}{stem}.{extension}")
        }
        None => {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            format!("{prefix}{name}")
        }
    };
    path.with_file_name(name)
}
