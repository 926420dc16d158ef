//! Tracing of structural mutations.
//!
//! With the `log` feature, `insert`, `erase`, `resize`, `clear` and `swap`
//! on an adapter emit `trace` records under the `dense_index` target.
//! Without it the macro expands to nothing.

#[cfg(feature = "log")]
macro_rules! trace_op {
    ($($arg:tt)+) => {
        ::log::trace!(target: "dense_index", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_op {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}

pub(crate) use trace_op;
