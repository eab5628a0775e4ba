/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Open311 client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;

// Re-export commonly used types from config
pub use config::{
    Config,
    ConfigPatch,
    DEFAULT_FORMAT,
    USER_AGENT,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    HttpTransport,
    Open311Client,
    Open311Error,
    Result,
    Transport,
};
