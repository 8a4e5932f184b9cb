//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 面板开关
    ToggleAdvancedOptions,
    ToggleFeedbackForm,

    // 反馈表单交互
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    Submit,      // Enter
}
