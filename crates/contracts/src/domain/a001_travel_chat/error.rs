use thiserror::Error;

/// Errors surfaced by the chat widget. `Display` is the text shown to the
/// user; transport details are only available through [`ChatError::detail`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("질문을 입력해주세요.")]
    EmptyInput,

    #[error("저장된 대화 내용이 없습니다.")]
    NothingToExport,

    #[error("답변을 가져오는 데 실패했습니다. 서버가 실행 중인지 확인하세요.")]
    Transport(String),
}

impl ChatError {
    pub fn transport(detail: impl Into<String>) -> Self {
        ChatError::Transport(detail.into())
    }

    /// Diagnostic text for logs
    pub fn detail(&self) -> String {
        match self {
            ChatError::Transport(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}
