//! Textual form of runtime values.

use std::fmt;
use std::io;

use dfy_stack::with_stack_headroom;

use crate::value::Value;

/// Render `value` the way a print statement shows it.
///
/// Objects with a custom rendering use it. Otherwise null is `null`,
/// booleans are `true`/`false`, tuples are `(a, b)`, functions are an
/// opaque `<function>`, and every other value uses its own display form.
pub fn string_of(value: &Value) -> String {
    value.to_string()
}

/// Write the rendering of `value` to `out`, without a trailing newline.
pub fn print(out: &mut impl io::Write, value: &Value) -> io::Result<()> {
    write!(out, "{value}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_stack_headroom(|| match self {
            Value::Object(obj) => match obj.render() {
                Some(text) => write!(f, "{text}"),
                None => write!(f, "{}", obj.type_name()),
            },
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Value::Seq(s) => write!(f, "{s}"),
            Value::Set(s) => write!(f, "{s}"),
            Value::MultiSet(m) => write!(f, "{m}"),
            Value::Map(m) => write!(f, "{m}"),
            Value::Array(a) => write!(f, "{a}"),
            Value::Function(_) => write!(f, "<function>"),
        })
    }
}
