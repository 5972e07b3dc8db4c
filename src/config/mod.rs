mod settings;

pub use settings::{ApiConfig, OtelConfig, RenderConfig, ServerConfig, Settings};
