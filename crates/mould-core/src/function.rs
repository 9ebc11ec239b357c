//! Native callable values.
//!
//! A `Function` is a named closure with a declared arity. Field descriptors
//! accept a function of arity exactly 1 as a custom validity check, so the
//! arity is carried explicitly rather than inferred from the closure type.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

struct FunctionInner {
    name: String,
    arity: usize,
    call: Box<NativeFn>,
}

/// Shared, immutable callable. Clones point at the same function.
#[derive(Clone)]
pub struct Function {
    inner: Arc<FunctionInner>,
}

impl Function {
    /// Wrap a closure taking any number of arguments.
    pub fn new<F>(name: impl Into<String>, arity: usize, call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(FunctionInner {
                name: name.into(),
                arity,
                call: Box::new(call),
            }),
        }
    }

    /// Wrap a unary boolean check.
    ///
    /// Missing arguments are passed as [`Value::Undefined`].
    pub fn predicate<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(name, 1, move |args| {
            let arg = args.first().unwrap_or(&Value::Undefined);
            Value::Bool(check(arg))
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.inner.arity
    }

    /// Invoke the function.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner.call)(args)
    }

    /// Whether both handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.inner.name)
            .field("arity", &self.inner.arity)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.name.is_empty() {
            f.write_str("[Function (anonymous)]")
        } else {
            write!(f, "[Function {}]", self.inner.name)
        }
    }
}
