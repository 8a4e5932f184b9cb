//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use components::{render_dialog_framework, render_textarea_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    // 高级选项面板按开关状态占位
    let mut constraints = vec![Constraint::Length(3)]; // 标题
    if app.show_advanced_options {
        constraints.push(Constraint::Length(8)); // 高级选项
    }
    constraints.push(Constraint::Min(5)); // 概览
    constraints.push(Constraint::Length(3)); // 帮助

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut idx = 0;
    render_title(frame, chunks[idx]);
    idx += 1;

    if app.show_advanced_options {
        render_advanced_options(frame, chunks[idx]);
        idx += 1;
    }

    render_overview(frame, chunks[idx]);
    render_help(frame, app, chunks[idx + 1]);

    // 渲染反馈表单弹窗
    if app.show_feedback_form {
        render_feedback_dialog(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("📊 Lamina 数据分析")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_advanced_options(frame: &mut Frame, area: Rect) {
    let content = "在这里配置数据分析的高级设置：\n\
        · 采样窗口与聚合粒度\n\
        · 离群值过滤阈值\n\
        · 结果导出格式";

    let panel = Paragraph::new(content)
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("高级分析选项").borders(Borders::ALL));

    frame.render_widget(panel, area);
}

fn render_overview(frame: &mut Frame, area: Rect) {
    let overview = Paragraph::new("数据分析概览\n\n使用下方快捷键展开高级选项或提交反馈。")
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("概览").borders(Borders::ALL));

    frame.render_widget(overview, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.show_feedback_form {
        "输入反馈后按 [Enter] 提交  [Esc] 收起表单"
    } else if app.show_advanced_options {
        "[a] 收起高级选项  [f] 提交反馈  [q] 退出"
    } else {
        "[a] 高级选项  [f] 提交反馈  [q] 退出"
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_feedback_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 40, frame.area());
    let inner = render_dialog_framework(frame, area, "反馈表单");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    render_textarea_widget(
        frame,
        chunks[0],
        "反馈内容",
        &app.feedback,
        "请输入您的反馈…",
    );

    let hint = Paragraph::new("按 Enter 提交，Esc 收起").style(Style::default().fg(Color::Gray));
    frame.render_widget(hint, chunks[1]);
}
