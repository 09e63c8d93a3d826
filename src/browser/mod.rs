//! Browser implementations of the controller seams.

pub mod http;
pub mod logging;
pub mod timing;
pub mod view;

pub use http::HttpTransport;
pub use timing::BrowserScheduler;
pub use view::{BrowserRender, ViewState};
