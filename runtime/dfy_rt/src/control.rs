//! Structured control transfer for generated code.
//!
//! Every generated block, loop body and routine body returns
//! `Result<Flow, E>`. [`Flow`] says how the block ended; the error channel
//! is left for real failures such as [`Halt`](crate::Halt). Each nesting
//! level either absorbs the signal addressed to it or hands it outward
//! unchanged:
//!
//! - [`LabelScope`] absorbs `Break` aimed at it, ending the whole block. A
//!   [routine scope](LabelScope::routine) also re-runs its body on
//!   `TailCall`; every other scope hands tail calls outward.
//! - [`ContinueScope`] absorbs `Continue` aimed at it, ending one iteration.
//! - [`for_each`] and [`while_loop`] combine both for a loop.
//!
//! A scope matches a signal when the signal's target equals the scope's
//! name. Unlabeled signals (`None`) therefore stop at the nearest unlabeled
//! scope and pass straight through named ones, while a labeled signal skips
//! every unlabeled scope on its way out.

use std::fmt;

use tracing::{debug, error, trace};

use crate::error::{Halt, ProgramError};

/// A label name written in the source program.
pub type Label = &'static str;

/// Outcome of running a block of generated code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flow {
    /// The block ran to its end.
    Completed,
    /// Leave the enclosing scope with this label (`None`: nearest unlabeled).
    Break(Option<Label>),
    /// End the current iteration of the loop with this label.
    Continue(Option<Label>),
    /// Re-enter the enclosing routine with its parameters already rebound.
    TailCall,
}

impl Flow {
    pub fn is_completed(self) -> bool {
        self == Flow::Completed
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Completed => write!(f, "completed"),
            Flow::Break(None) => write!(f, "break"),
            Flow::Break(Some(label)) => write!(f, "break {label}"),
            Flow::Continue(None) => write!(f, "continue"),
            Flow::Continue(Some(label)) => write!(f, "continue {label}"),
            Flow::TailCall => write!(f, "tail call"),
        }
    }
}

/// A block that `Break` can leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelScope {
    name: Option<Label>,
    kind: ScopeKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScopeKind {
    /// A source-level block or loop label.
    Block,
    /// The body of a routine; the only target of `TailCall`.
    Routine,
}

impl LabelScope {
    pub const fn new(name: Option<Label>) -> Self {
        LabelScope {
            name,
            kind: ScopeKind::Block,
        }
    }

    pub const fn unlabeled() -> Self {
        LabelScope::new(None)
    }

    /// A labeled block. Tail calls pass through it.
    pub const fn named(name: Label) -> Self {
        LabelScope::new(Some(name))
    }

    /// The body of the routine `name`, re-entered on `TailCall` after the
    /// caller has rebound its parameters.
    pub const fn routine(name: Label) -> Self {
        LabelScope {
            name: Some(name),
            kind: ScopeKind::Routine,
        }
    }

    pub fn name(self) -> Option<Label> {
        self.name
    }

    pub fn is_routine(self) -> bool {
        self.kind == ScopeKind::Routine
    }

    /// Run `body`, absorbing the signals addressed to this scope.
    ///
    /// A matching `Break` completes the scope. On `TailCall` a routine
    /// scope runs `body` again from the top; block scopes pass it on.
    /// Anything else is returned to the caller.
    pub fn run<E>(self, mut body: impl FnMut() -> Result<Flow, E>) -> Result<Flow, E> {
        loop {
            match body()? {
                Flow::Break(target) if target == self.name => {
                    trace!(scope = ?self.name, "break absorbed");
                    return Ok(Flow::Completed);
                }
                Flow::TailCall if self.is_routine() => {
                    trace!(scope = ?self.name, "tail call re-entering routine");
                }
                flow => return Ok(flow),
            }
        }
    }
}

/// One iteration of a loop that `Continue` can cut short.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContinueScope {
    name: Option<Label>,
}

impl ContinueScope {
    pub const fn new(name: Option<Label>) -> Self {
        ContinueScope { name }
    }

    /// Run `body` once; a matching `Continue` completes the iteration.
    pub fn run<E>(self, body: impl FnOnce() -> Result<Flow, E>) -> Result<Flow, E> {
        match body()? {
            Flow::Continue(target) if target == self.name => {
                trace!(scope = ?self.name, "continue absorbed");
                Ok(Flow::Completed)
            }
            flow => Ok(flow),
        }
    }
}

/// `LabelScope::new(name).run(body)`.
pub fn label<E>(name: Option<Label>, body: impl FnMut() -> Result<Flow, E>) -> Result<Flow, E> {
    LabelScope::new(name).run(body)
}

/// `LabelScope::routine(name).run(body)`.
pub fn routine<E>(name: Label, body: impl FnMut() -> Result<Flow, E>) -> Result<Flow, E> {
    LabelScope::routine(name).run(body)
}

/// `ContinueScope::new(name).run(body)`.
pub fn continue_label<E>(
    name: Option<Label>,
    body: impl FnOnce() -> Result<Flow, E>,
) -> Result<Flow, E> {
    ContinueScope::new(name).run(body)
}

/// Run `body` on each item, as a loop labeled `name`.
///
/// `Continue` aimed at the loop moves to the next item, `Break` aimed at it
/// ends the loop. Other signals, including tail calls, leave the loop and
/// are returned.
pub fn for_each<T, E>(
    name: Option<Label>,
    items: impl IntoIterator<Item = T>,
    mut body: impl FnMut(T) -> Result<Flow, E>,
) -> Result<Flow, E> {
    let iteration = ContinueScope::new(name);
    for item in items {
        match iteration.run(|| body(item))? {
            Flow::Completed => {}
            flow => return Ok(exit_loop(name, flow)),
        }
    }
    Ok(Flow::Completed)
}

/// Run `body` while `condition` holds, as a loop labeled `name`.
///
/// Signals are handled as in [`for_each`].
pub fn while_loop<E>(
    name: Option<Label>,
    mut condition: impl FnMut() -> Result<bool, E>,
    mut body: impl FnMut() -> Result<Flow, E>,
) -> Result<Flow, E> {
    let iteration = ContinueScope::new(name);
    while condition()? {
        match iteration.run(&mut body)? {
            Flow::Completed => {}
            flow => return Ok(exit_loop(name, flow)),
        }
    }
    Ok(Flow::Completed)
}

fn exit_loop(name: Option<Label>, flow: Flow) -> Flow {
    match flow {
        Flow::Break(target) if target == name => {
            trace!(scope = ?name, "loop exited by break");
            Flow::Completed
        }
        flow => flow,
    }
}

/// Run a whole program and report how it ended.
///
/// A halt becomes [`ProgramError::Halted`]. A control signal that reaches
/// this point had no matching scope, which is a defect in the generated
/// code, and becomes [`ProgramError::UncaughtSignal`].
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_program(body: impl FnOnce() -> Result<Flow, Halt>) -> Result<(), ProgramError> {
    match body() {
        Ok(Flow::Completed) => Ok(()),
        Ok(flow) => {
            error!(%flow, "control signal escaped the program");
            Err(ProgramError::UncaughtSignal(flow))
        }
        Err(halt) => {
            debug!(message = %halt, "program halted");
            Err(ProgramError::Halted(halt))
        }
    }
}
