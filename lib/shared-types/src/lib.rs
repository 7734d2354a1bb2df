mod macros;
mod remote_id;

pub use remote_id::*;
