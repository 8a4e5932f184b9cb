//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use super::actions::Action;
use super::state::App;

impl App {
    /// 核心逻辑分发，返回 true 表示退出应用
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::ToggleAdvancedOptions => self.toggle_advanced_options(),
            Action::ToggleFeedbackForm => self.toggle_feedback_form(),

            Action::Input(c) => {
                if self.show_feedback_form {
                    self.feedback.push(c);
                }
            }

            Action::DeleteChar => {
                if self.show_feedback_form {
                    self.feedback.pop();
                }
            }

            Action::Submit => {
                // 必填校验：空文本不触发提交
                if self.feedback.is_empty() {
                    self.message = Some("反馈内容不能为空".to_string());
                } else {
                    self.submit_feedback();
                }
            }
        }
        false
    }

    // ============ 面板开关相关 ============

    /// 展开/收起高级选项面板
    pub fn toggle_advanced_options(&mut self) {
        self.show_advanced_options = !self.show_advanced_options;
    }

    /// 展开/收起反馈表单；不清空草稿，两个开关互不影响
    pub fn toggle_feedback_form(&mut self) {
        self.show_feedback_form = !self.show_feedback_form;
    }

    // ============ 反馈提交相关 ============

    /// 提交反馈给 sink
    ///
    /// 成功：清空文本并收起表单；失败：保留文本供用户重试
    pub fn submit_feedback(&mut self) {
        match self.sink.submit(&self.feedback) {
            Ok(()) => {
                self.feedback.clear();
                self.show_feedback_form = false;
                self.message = Some("反馈已提交，感谢！".to_string());
            }
            Err(e) => {
                self.message = Some(format!("反馈提交失败: {}", e));
            }
        }
    }
}
