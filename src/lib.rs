pub mod config;
pub mod fetch;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod shapes;
pub mod stop_times;
