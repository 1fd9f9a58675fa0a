//! Top-level facade crate for HTTP Explorer.
//!
//! Re-exports the domain core and the server library so users can depend on a
//! single crate.

pub mod core {
    pub use httpexplorer_core::*;
}

pub mod server {
    pub use httpexplorer_server::*;
}
