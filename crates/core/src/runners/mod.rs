//! Runner variants: identity, device-index propagation and argument-vector
//! composition

mod command;
mod kind;
mod propagate;

pub use command::compose;
pub use kind::RunnerKind;
pub use propagate::resolve_index;
