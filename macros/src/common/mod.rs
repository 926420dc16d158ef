// Shared between macros:
// - cap_expr: capability expressions and probe generation
// - parse_utils: `Type: Expr` and attribute helpers

mod cap_expr;
mod parse_utils;

pub use cap_expr::*;
pub use parse_utils::*;
