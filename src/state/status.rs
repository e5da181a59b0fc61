#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Message key shown when the backend rejects a submission.
pub const INVALID_INPUT: &str = "invalid_input";
/// Message key shown after a completed transaction.
pub const SUCCESS: &str = "success";

/// Whether a status message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

impl Tone {
    /// CSS color applied to the status element.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Failure => "red",
        }
    }
}

/// Feedback written into the status element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub message: String,
}

impl Status {
    pub fn success(message: &str) -> Self {
        Self { tone: Tone::Success, message: message.to_owned() }
    }

    pub fn failure(message: &str) -> Self {
        Self { tone: Tone::Failure, message: message.to_owned() }
    }

    /// The failure every flow reports for a non-OK reply.
    pub fn invalid_input() -> Self {
        Self::failure(INVALID_INPUT)
    }

    pub fn color(&self) -> &'static str {
        self.tone.color()
    }
}

/// Text rendered into the balance element for a plain-text balance body.
pub fn balance_text(body: &str) -> String {
    format!("${body}")
}
