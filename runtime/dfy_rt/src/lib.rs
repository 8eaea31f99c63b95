//! Runtime support for generated programs.
//!
//! Generated code is written against this crate: it builds [`Value`]s,
//! allocates [`Array`]s, wraps blocks and loops in the control protocol
//! ([`LabelScope`], [`ContinueScope`], [`for_each`], [`while_loop`]),
//! evaluates quantified expressions with [`quantifier`] over the
//! [range generators](ranges), fills declarations from [`defaults`], and
//! prints with [`print`].
//!
//! Everything except arrays is immutable. Nothing here performs I/O on its
//! own: [`print`] writes to whatever sink the caller hands it.
//!
//! # Tracing
//!
//! The crate emits `tracing` events but never installs a subscriber by
//! itself. Hosts that want the output call [`init_tracing`], which honors
//! `RUST_LOG` (e.g. `RUST_LOG=dfy_rt=trace`).

mod array;
mod control;
pub mod defaults;
mod error;
mod options;
mod quantifier;
pub mod ranges;
mod render;
mod value;

pub use array::Array;
pub use control::{
    continue_label, for_each, label, routine, run_program, while_loop, ContinueScope, Flow,
    Label, LabelScope,
};
pub use defaults::TypeDescriptor;
pub use error::{Halt, ProgramError};
pub use options::RuntimeOptions;
pub use quantifier::quantifier;
pub use ranges::{
    all_booleans, all_chars, all_integers, integer_range, single_value, Doubler, IntegerRange,
};
pub use render::{print, string_of};
pub use value::{DafnyObject, FunctionValue, NativeFn, Value};

pub use dfy_collections::{Map, MultiSet, Seq, Set};
pub use dfy_num::{BigInt, Real};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for runtime diagnostics.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
