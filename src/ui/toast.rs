use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success, // Green
    Warning, // Yellow
    Error,   // Red
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

pub struct ToastManager {
    queue: VecDeque<Toast>,
    max_visible: usize,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            max_visible: 3,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, toast_type: ToastType) {
        self.queue.push_back(Toast::new(message, toast_type));
        // Keep only max_visible toasts
        while self.queue.len() > self.max_visible {
            self.queue.pop_front();
        }
    }

    /// Drop toasts that have been shown long enough
    pub fn update(&mut self, now: Instant) {
        self.queue.retain(|t| !t.is_expired_at(now));
    }

    pub fn visible_toasts(&self) -> Vec<&Toast> {
        self.queue.iter().collect()
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}
