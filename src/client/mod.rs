pub mod http;
pub mod transport;
pub mod types;

pub use http::HttpMessageClient;
pub use transport::{ClientError, MessageClient};
pub use types::{SendMessageRequest, SendMessageResponse};
