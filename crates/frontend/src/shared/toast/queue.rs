use std::collections::VecDeque;

/// Сколько держать уведомление на экране по умолчанию
pub const DEFAULT_TIMEOUT_MS: u32 = 1600;
/// Пауза между скрытием одного уведомления и показом следующего
pub const SETTLE_MS: u32 = 220;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub timeout_ms: u32,
}

impl Toast {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastPhase {
    Idle,
    Showing(Toast),
    Settling,
}

/// What the driver has to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastStep {
    /// Display the toast, then call `timeout_elapsed` after `timeout_ms`
    Show(Toast),
    /// Hide the toast, then call `settle_elapsed` after [`SETTLE_MS`]
    Hide,
}

/// Очередь уведомлений: на экране не больше одного сообщения.
///
/// Idle → Showing → Settling → (Showing | Idle). Timers are owned by the
/// caller; the queue only reacts to `push`, `timeout_elapsed` and
/// `settle_elapsed`.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
    phase: ToastPhase,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            phase: ToastPhase::Idle,
        }
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ToastPhase {
        &self.phase
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn visible(&self) -> Option<&Toast> {
        match &self.phase {
            ToastPhase::Showing(t) => Some(t),
            _ => None,
        }
    }

    /// Enqueue a toast. Returns a step only when the queue was idle and the
    /// caller has to start a new drain loop.
    pub fn push(&mut self, toast: Toast) -> Option<ToastStep> {
        self.pending.push_back(toast);
        match self.phase {
            ToastPhase::Idle => self.next(),
            _ => None,
        }
    }

    pub fn timeout_elapsed(&mut self) -> Option<ToastStep> {
        match self.phase {
            ToastPhase::Showing(_) => {
                self.phase = ToastPhase::Settling;
                Some(ToastStep::Hide)
            }
            _ => None,
        }
    }

    pub fn settle_elapsed(&mut self) -> Option<ToastStep> {
        match self.phase {
            ToastPhase::Settling => self.next(),
            _ => None,
        }
    }

    fn next(&mut self) -> Option<ToastStep> {
        match self.pending.pop_front() {
            Some(toast) => {
                self.phase = ToastPhase::Showing(toast.clone());
                Some(ToastStep::Show(toast))
            }
            None => {
                self.phase = ToastPhase::Idle;
                None
            }
        }
    }
}
