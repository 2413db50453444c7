//! Global root implementations.
//!
//! A global root is the namespace a watcher reads to decide whether a
//! dependency is ready. Watchers only ever see the read-only [`GlobalRoot`]
//! trait; whoever owns the concrete root is the only writer.

mod env;
mod func;
mod global_root;
mod memory;

pub use env::EnvRoot;
pub use func::{FnRoot, from_fn};
pub use global_root::{DEFAULT_ROOT_NAME, GlobalRoot};
pub use memory::{MemoryRoot, global};
