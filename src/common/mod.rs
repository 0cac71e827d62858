//! Code shared by the request/response boundary of the `cidrnet` binary

pub mod format;
pub mod logging;
