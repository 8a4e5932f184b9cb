//! App 状态定义 (Model)
//!
//! 包含应用状态结构体

use crate::sink::FeedbackSink;

/// 应用状态
pub struct App {
    pub show_advanced_options: bool,
    pub show_feedback_form: bool,
    pub feedback: String,
    pub message: Option<String>,
    pub sink: Box<dyn FeedbackSink>,
}

impl App {
    /// 创建新的应用实例，两个面板默认收起
    pub fn new(sink: Box<dyn FeedbackSink>) -> Self {
        Self {
            show_advanced_options: false,
            show_feedback_form: false,
            feedback: String::new(),
            message: None,
            sink,
        }
    }
}
