/// Default upper bound on the length of an input string, in bytes.
pub const DEFAULT_MAX_INPUT: usize = 1024;
/// Default upper bound on the number of tokens a single input may produce.
pub const DEFAULT_MAX_TOKENS: usize = 256;

/// Bounds applied to every evaluation.
///
/// Both limits keep the work done by a single call proportional to a known
/// constant. The tokenizer checks `max_input` before scanning and
/// `max_tokens` after every token it produces.
///
/// # Example
/// ```
/// use rpncalc::config::Limits;
///
/// let limits = Limits::default().with_max_tokens(16);
/// assert_eq!(limits.max_input, 1024);
/// assert_eq!(limits.max_tokens, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted input, in bytes.
    pub max_input:  usize,
    /// Largest accepted token count. A sequence of exactly this many tokens
    /// is still accepted.
    pub max_tokens: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT, DEFAULT_MAX_TOKENS)
    }
}

impl Limits {
    /// Creates a new set of limits.
    #[must_use]
    pub const fn new(max_input: usize, max_tokens: usize) -> Self {
        Self { max_input,
               max_tokens }
    }

    /// Limits that never trigger.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(usize::MAX, usize::MAX)
    }

    /// Returns a copy with a different input length bound.
    #[must_use]
    pub const fn with_max_input(self, max_input: usize) -> Self {
        Self { max_input, ..self }
    }

    /// Returns a copy with a different token count bound.
    #[must_use]
    pub const fn with_max_tokens(self, max_tokens: usize) -> Self {
        Self { max_tokens, ..self }
    }
}
