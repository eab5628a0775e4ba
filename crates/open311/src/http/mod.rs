/*
[INPUT]:  Client configuration and Open311 API endpoints
[OUTPUT]: HTTP responses decoded into value trees
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod decode;
pub mod error;
pub mod requests;
pub mod services;
pub mod tokens;
pub mod transport;

pub use error::{Open311Error, Result};
pub use transport::{HttpTransport, Transport};

pub use client::{ClientConfig, Open311Client};
