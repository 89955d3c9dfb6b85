pub mod fetch;
pub mod filename;
pub mod keys;
pub mod logging;
pub mod session;
