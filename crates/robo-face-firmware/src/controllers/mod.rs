mod http;

pub use http::RoboHttpController;
