//! 终端表单
//!
//! 逐行读取命令，更新表单字段并调用应用状态上的处理器。
//! 每条命令执行完毕后才读取下一行，存储调用不会重叠

pub mod command;
pub mod render;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, error, info};

use crate::app::{AppState, HistoryView, TrendView, NO_HISTORY_NOTICE, NO_TREND_NOTICE};
use crate::error::AppError;
use crate::models::{AppConfig, ChartSettings};
use crate::settings::SettingsManager;

pub use command::{parse_command, FormCommand, UnknownCommand, HELP};

/// 窗口标题
pub const TITLE: &str = "Smart BMI Tracker";

/// 执行一条命令，返回需要显示的文本
///
/// 失败只影响当前命令，表单继续可用
pub async fn execute(
    state: &mut AppState,
    settings: &SettingsManager,
    command: FormCommand,
) -> String {
    debug!("执行表单命令: {:?}", command);

    match command {
        FormCommand::SetName(value) => {
            state.form.name = value;
            String::new()
        }
        FormCommand::SetWeight(value) => {
            state.form.weight = value;
            String::new()
        }
        FormCommand::SetHeight(value) => {
            state.form.height = value;
            String::new()
        }
        FormCommand::Calculate => match state.calculate().await {
            Ok(result) => result.message(),
            Err(e) => format!("{}: {}", e.title(), e),
        },
        FormCommand::History => match state.view_history().await {
            Ok(HistoryView::Records { owner, rows }) => render::render_history(&owner, &rows),
            Ok(HistoryView::Empty { .. }) => format!("No Data: {}", NO_HISTORY_NOTICE),
            Err(e) => format!("{}: {}", e.title(), e),
        },
        FormCommand::Trend => match state.show_trend().await {
            Ok(TrendView::Series { owner, points }) => {
                let chart = settings.get().await.chart;
                render::render_trend(&owner, &points, chart)
            }
            Ok(TrendView::Empty { .. }) => format!("No Data: {}", NO_TREND_NOTICE),
            Err(e) => format!("{}: {}", e.title(), e),
        },
        FormCommand::SetChart { width, height } => {
            let chart = ChartSettings { width, height }.clamped();
            let update = AppConfig {
                chart: Some(chart),
                ..Default::default()
            };
            match settings.update(update).await {
                Ok(saved) => {
                    info!("趋势图尺寸已更新: {}x{}", saved.chart.width, saved.chart.height);
                    format!(
                        "Chart size set to {}x{}.",
                        saved.chart.width, saved.chart.height
                    )
                }
                Err(e) => {
                    error!("保存配置失败: {:#}", e);
                    let e = AppError::Settings(format!("{:#}", e));
                    format!("{}: {}", e.title(), e)
                }
            }
        }
        FormCommand::Show => format!(
            "Name:   {}\nWeight: {}\nHeight: {}",
            state.form.name, state.form.weight, state.form.height
        ),
        FormCommand::Help => HELP.to_string(),
        // 退出由 run_form 处理
        FormCommand::Exit => String::new(),
    }
}

/// 运行表单循环，直到 exit 或输入结束
pub async fn run_form<R, W>(
    state: &mut AppState,
    settings: &SettingsManager,
    mut input: R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", TITLE)?;
    writeln!(output, "{}", HELP)?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(FormCommand::Exit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        let text = execute(state, settings, command).await;
        if !text.is_empty() {
            writeln!(output, "{}", text.trim_end())?;
        }
    }

    writeln!(output)?;
    Ok(())
}
