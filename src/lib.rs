//! Client library for pushing a locally addressable binary resource to a
//! pre-authorized (pre-signed) object-storage URL with a single HTTP PUT.

pub mod errors;
pub mod sink;
pub mod source;
pub mod uploader;
