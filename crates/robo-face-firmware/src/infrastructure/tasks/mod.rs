mod http_server;
mod logger;
mod network;

pub use http_server::http_server_task;
pub use logger::logger_task;
pub use network::{cyw43_task, network_runner_task};
