//! 历史表格与趋势图的文本渲染

use std::fmt::Write as _;

use crate::app::TrendPoint;
use crate::models::ChartSettings;
use crate::storage::{MeasurementRecord, RECORDED_AT_FORMAT};

const DATE_WIDTH: usize = 19;
const BMI_WIDTH: usize = 6;
const LABEL_WIDTH: usize = 7;

/// 渲染历史记录表格
pub fn render_history(owner: &str, rows: &[MeasurementRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}'s BMI History", owner);
    let _ = writeln!(
        out,
        "{:<dw$}  {:>bw$}  {}",
        "Date",
        "BMI",
        "Category",
        dw = DATE_WIDTH,
        bw = BMI_WIDTH
    );
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(DATE_WIDTH),
        "-".repeat(BMI_WIDTH),
        "-".repeat(13)
    );

    for row in rows {
        let _ = writeln!(
            out,
            "{:<dw$}  {:>bw$.2}  {}",
            row.recorded_at.format(RECORDED_AT_FORMAT).to_string(),
            row.bmi,
            row.category,
            dw = DATE_WIDTH,
            bw = BMI_WIDTH
        );
    }
    out
}

/// 渲染 BMI 趋势折线图
///
/// 纵轴为 BMI，横轴按时间先后等距排列，数据点用 `o` 标记，相邻点之间用 `.` 连接
pub fn render_trend(owner: &str, points: &[TrendPoint], chart: ChartSettings) -> String {
    let ChartSettings { width, height } = chart.clamped();

    let mut out = String::new();
    let _ = writeln!(out, "BMI Trend for {}", owner);
    if points.is_empty() {
        return out;
    }

    let (mut low, mut high) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.bmi), hi.max(p.bmi))
        });
    // 所有点相同时上下各留一格
    if high - low < f64::EPSILON {
        low -= 1.0;
        high += 1.0;
    }

    let cells: Vec<(usize, usize)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let col = if points.len() == 1 {
                width / 2
            } else {
                scale(i as f64, (points.len() - 1) as f64, width - 1)
            };
            let row = scale(high - p.bmi, high - low, height - 1);
            (col, row)
        })
        .collect();

    let mut grid = vec![vec![' '; width]; height];

    for pair in cells.windows(2) {
        let (c0, r0) = (pair[0].0 as f64, pair[0].1 as f64);
        let (c1, r1) = (pair[1].0 as f64, pair[1].1 as f64);
        let steps = (c1 - c0).abs().max((r1 - r0).abs()) as usize;
        for s in 1..steps {
            let t = s as f64 / steps as f64;
            let c = (c0 + (c1 - c0) * t).round() as usize;
            let r = (r0 + (r1 - r0) * t).round() as usize;
            grid[r][c] = '.';
        }
    }
    for &(col, row) in &cells {
        grid[row][col] = 'o';
    }

    for (i, line) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{:>w$.2}", high, w = LABEL_WIDTH - 1)
        } else if i == height - 1 {
            format!("{:>w$.2}", low, w = LABEL_WIDTH - 1)
        } else {
            " ".repeat(LABEL_WIDTH - 1)
        };
        let body: String = line.iter().collect();
        let _ = writeln!(out, "{}|{}", label, body.trim_end());
    }
    let _ = writeln!(out, "{}+{}", " ".repeat(LABEL_WIDTH - 1), "-".repeat(width));

    let first = points[0].recorded_at.format("%Y-%m-%d").to_string();
    let last = points[points.len() - 1].recorded_at.format("%Y-%m-%d").to_string();
    let mut axis = format!("{}{}", " ".repeat(LABEL_WIDTH), first);
    if points.len() > 1 {
        let end = LABEL_WIDTH + width;
        let pad = end.saturating_sub(axis.len() + last.len()).max(1);
        axis.push_str(&" ".repeat(pad));
        axis.push_str(&last);
    }
    let _ = writeln!(out, "{}", axis);
    let _ = writeln!(out, "{:>w$}", "Date", w = LABEL_WIDTH + width / 2 + 2);

    out
}

/// 将 value/span 映射到 0..=cells
fn scale(value: f64, span: f64, cells: usize) -> usize {
    if span <= 0.0 {
        return 0;
    }
    let pos = (value / span * cells as f64).round();
    (pos.max(0.0) as usize).min(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Category;
    use chrono::NaiveDateTime;

    fn point(at: &str, bmi: f64) -> TrendPoint {
        TrendPoint {
            recorded_at: NaiveDateTime::parse_from_str(at, RECORDED_AT_FORMAT).unwrap(),
            bmi,
            category: crate::classifier::classify(bmi),
        }
    }

    fn plot_rows(rendered: &str) -> Vec<&str> {
        rendered.lines().filter(|l| l.contains('|')).collect()
    }

    #[test]
    fn test_history_table() {
        let rows = vec![MeasurementRecord {
            id: 1,
            owner_name: "Alice".to_string(),
            weight_kg: 70.0,
            height_m: 1.75,
            bmi: 22.857142,
            category: Category::NormalWeight,
            recorded_at: NaiveDateTime::parse_from_str("2024-05-01 09:00:00", RECORDED_AT_FORMAT)
                .unwrap(),
        }];

        let table = render_history("Alice", &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Alice's BMI History");
        assert!(lines[1].starts_with("Date"));
        assert_eq!(lines[3], "2024-05-01 09:00:00   22.86  Normal weight");
    }

    #[test]
    fn test_trend_marks_every_point() {
        let points = vec![
            point("2024-05-01 09:00:00", 22.86),
            point("2024-05-08 09:00:00", 24.0),
            point("2024-05-15 09:00:00", 29.39),
        ];
        let chart = render_trend(
            "Alice",
            &points,
            ChartSettings {
                width: 20,
                height: 8,
            },
        );

        assert!(chart.starts_with("BMI Trend for Alice\n"));
        let rows = plot_rows(&chart);
        assert_eq!(rows.len(), 8);
        let markers: usize = rows.iter().map(|r| r.matches('o').count()).sum();
        assert_eq!(markers, 3);

        // 最高点在第一行，最低点在最后一行
        assert!(rows[0].starts_with(" 29.39|"));
        assert!(rows[0].ends_with('o'));
        assert!(rows[7].starts_with(" 22.86|o"));
        assert!(chart.contains("2024-05-01"));
        assert!(chart.contains("2024-05-15"));
    }

    #[test]
    fn test_trend_single_point_and_flat_series() {
        let single = render_trend(
            "Bob",
            &[point("2024-05-01 09:00:00", 25.0)],
            ChartSettings::default(),
        );
        let markers: usize = plot_rows(&single).iter().map(|r| r.matches('o').count()).sum();
        assert_eq!(markers, 1);

        let flat = render_trend(
            "Bob",
            &[
                point("2024-05-01 09:00:00", 25.0),
                point("2024-05-02 09:00:00", 25.0),
            ],
            ChartSettings::default(),
        );
        assert!(flat.contains(" 26.00|"));
        assert!(flat.contains(" 24.00|"));
    }

    #[test]
    fn test_tiny_chart_settings_are_clamped() {
        let chart = render_trend(
            "Bob",
            &[
                point("2024-05-01 09:00:00", 20.0),
                point("2024-05-02 09:00:00", 30.0),
            ],
            ChartSettings {
                width: 0,
                height: 0,
            },
        );
        assert_eq!(plot_rows(&chart).len(), 3);
    }

    #[test]
    fn test_huge_chart_settings_are_capped() {
        let chart = render_trend(
            "Bob",
            &[
                point("2024-05-01 09:00:00", 20.0),
                point("2024-05-02 09:00:00", 30.0),
            ],
            ChartSettings {
                width: 1_000_000_000_000,
                height: 1_000_000_000_000,
            },
        );
        let rows = plot_rows(&chart);
        assert_eq!(rows.len(), ChartSettings::MAX_HEIGHT);
        assert!(rows.iter().all(|r| r.chars().count() <= LABEL_WIDTH + ChartSettings::MAX_WIDTH));
    }
}
