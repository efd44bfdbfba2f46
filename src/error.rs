use std::fmt::{self, Display};

#[derive(Debug, Clone)]
pub struct WorkOrderError {
    pub message: String,
    pub status: Option<u16>,
}

impl WorkOrderError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        let message = message.into();
        let message = if let Some(code) = status {
            format!("{}: API returned status {}", message, code)
        } else {
            message
        };
        Self { message, status }
    }

    pub fn simple(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl Display for WorkOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for WorkOrderError {}
