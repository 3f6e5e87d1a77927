use crate::errors::StickyError;
use crate::tasks::TaskError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Task(#[from] TaskError),
}

impl StickyError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Task(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Task(e) => e.is_user_error(),
        }
    }
}
