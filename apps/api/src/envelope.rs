use serde::Serialize;

/// Success body shared by every JSON endpoint: `{success: true, data, ...}`.
/// Failures are rendered by `AppError` with the same `success`/`message` keys.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Envelope {
            success: true,
            message: None,
            data,
            count: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> Envelope<Vec<T>> {
    /// List body; `count` is always the length of `data`.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Envelope {
            success: true,
            message: None,
            data,
            count: Some(count),
        }
    }
}
