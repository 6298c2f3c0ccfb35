use tracing::debug;

use crate::{
    config::Limits,
    error::{Diagnostic, Report, resolve_token},
    interpreter::{
        evaluator::core::{EvalResult, evaluate_rpn},
        lexer::tokenize,
        parser::core::shunting_yard,
        value::core::Number,
    },
};

/// Runs the evaluation pipeline under a fixed set of limits.
///
/// `Context` holds no per-call state. Every call to [`Context::evaluate`]
/// owns its token sequences and stacks and drops them before returning, so
/// one context can serve any number of calls, from any number of threads.
///
/// # Example
/// ```
/// use rpncalc::{Context, Diagnostic, Number, config::Limits};
///
/// let context = Context::new(Limits::default().with_max_tokens(3));
///
/// assert_eq!(context.evaluate("1 + 2"), Ok(Number::Integer(3)));
/// assert_eq!(context.evaluate("1 + 2 + 3"), Err(Diagnostic::MaxTokensExceeded));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    limits: Limits,
}

impl Context {
    /// Creates a context with the given limits.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// The limits applied to every evaluation.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Evaluates an arithmetic expression.
    ///
    /// Runs the tokenizer, the shunting-yard converter and the postfix
    /// evaluator in order. The first diagnostic raised by any stage ends the
    /// call.
    ///
    /// # Parameters
    /// - `source`: The expression, e.g. `"3 * (4 + 2)"`.
    ///
    /// # Returns
    /// The value of the expression, or the diagnostic that stopped it.
    pub fn evaluate(&self, source: &str) -> EvalResult<Number> {
        let tokens = tokenize(source, &self.limits).inspect_err(|e| rejected("lexer", e))?;
        debug!(tokens = tokens.len(), "tokenized input");

        let postfix = shunting_yard(&tokens).inspect_err(|e| rejected("parser", e))?;
        debug!(tokens = postfix.len(), "converted to postfix");

        evaluate_rpn(&postfix).inspect_err(|e| rejected("evaluator", e))
    }

    /// Builds a user-facing report for a diagnostic raised on `source`.
    ///
    /// The source is tokenized again so the diagnostic's offset can be
    /// resolved to the operator or parenthesis it points at. When that is not
    /// possible, for example because the diagnostic came from the tokenizer
    /// itself, the report falls back to the diagnostic's own message.
    #[must_use]
    pub fn explain<'a>(&self, source: &'a str, diagnostic: Diagnostic) -> Report<'a> {
        let symbol = diagnostic.offset().and_then(|offset| {
                                            let tokens = tokenize(source, &self.limits).ok()?;
                                            resolve_token(&tokens, offset)?.text(source)
                                        });

        Report { diagnostic,
                 symbol,
                 limits: self.limits }
    }
}

fn rejected(stage: &str, diagnostic: &Diagnostic) {
    debug!(stage, %diagnostic, "evaluation failed");
}
