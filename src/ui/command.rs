//! 表单命令解析

use thiserror::Error;

/// 表单命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// 设置名字（空值清空字段）
    SetName(String),
    SetWeight(String),
    SetHeight(String),
    Calculate,
    History,
    Trend,
    /// 设置趋势图尺寸并写入配置文件
    SetChart { width: usize, height: usize },
    Show,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown command: {0:?} (type \"help\" for the list of commands)")]
pub struct UnknownCommand(pub String);

/// 帮助文本
pub const HELP: &str = "\
Commands:
  name <text>      set your name
  weight <kg>      set weight in kilograms
  height <m>       set height in meters
  calculate | c    calculate BMI and save it
  history | h      view your BMI history
  trend | t        show your BMI trend graph
  chart <w> <h>    set the trend graph size (columns rows)
  show             show the current fields
  help             show this list
  exit | quit      leave the tracker";

/// 解析一行输入，空行返回 `Ok(None)`
pub fn parse_command(line: &str) -> Result<Option<FormCommand>, UnknownCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "name" => FormCommand::SetName(rest.to_string()),
        "weight" => FormCommand::SetWeight(rest.to_string()),
        "height" => FormCommand::SetHeight(rest.to_string()),
        "calculate" | "c" if rest.is_empty() => FormCommand::Calculate,
        "history" | "h" if rest.is_empty() => FormCommand::History,
        "trend" | "t" if rest.is_empty() => FormCommand::Trend,
        "chart" => match parse_chart_size(rest) {
            Some((width, height)) => FormCommand::SetChart { width, height },
            None => return Err(UnknownCommand(line.to_string())),
        },
        "show" if rest.is_empty() => FormCommand::Show,
        "help" | "?" if rest.is_empty() => FormCommand::Help,
        "exit" | "quit" if rest.is_empty() => FormCommand::Exit,
        _ => return Err(UnknownCommand(line.to_string())),
    };

    Ok(Some(command))
}

fn parse_chart_size(rest: &str) -> Option<(usize, usize)> {
    let mut parts = rest.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((width, height))
}
