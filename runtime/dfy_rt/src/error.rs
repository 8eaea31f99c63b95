//! Abrupt termination and program-boundary errors.

use dfy_collections::Seq;

use crate::control::Flow;
use crate::value::Value;

/// An explicit halt raised by the program.
///
/// Carries the message as a text sequence. It travels on the error channel
/// of every generated routine (`Result<Flow, Halt>`) and is never caught
/// inside the program; only [`run_program`](crate::run_program) reports it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Halt {
    message: Seq<Value>,
}

impl Halt {
    pub fn new(message: Seq<Value>) -> Self {
        Halt { message }
    }

    /// A halt whose message is `text`.
    pub fn from_text(text: &str) -> Self {
        Halt {
            message: Seq::text(text.chars().map(Value::Char)),
        }
    }

    pub fn message(&self) -> &Seq<Value> {
        &self.message
    }
}

/// How a program run can fail.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// The program halted explicitly.
    #[error("[Program halted] {0}")]
    Halted(#[from] Halt),

    /// A control signal found no matching scope: the generated code is
    /// missing a label or loop wrapper.
    #[error("control signal `{0}` escaped the program")]
    UncaughtSignal(Flow),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn halt_displays_its_message() {
        let halt = Halt::from_text("out of fuel");
        assert_eq!(halt.to_string(), "out of fuel");
        assert!(halt.message().is_text());
        assert_eq!(
            ProgramError::from(halt).to_string(),
            "[Program halted] out of fuel"
        );
    }

    #[test]
    fn uncaught_signal_names_the_signal() {
        let err = ProgramError::UncaughtSignal(Flow::Break(Some("L")));
        assert_eq!(err.to_string(), "control signal `break L` escaped the program");
    }
}
