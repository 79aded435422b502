// mvr-net/src/lib.rs
pub mod http;
pub mod repository;
pub mod task;
pub mod validation;

pub use http::{build_http_client, HttpTransport};
pub use repository::{Credentials, RemoteRepository};
pub use task::{FetchTask, Transport};
pub use validation::validate_url;
