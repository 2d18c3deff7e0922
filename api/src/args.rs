use std::path::PathBuf;

use clap::Parser;
use nutrilens_core::domain::common::{
    CameraConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, NutrilensConfig,
    StorageConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens-api", version, about = "NutriLens health tracker API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub camera: CameraArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', num_args = 0..)]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LLMArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct StorageArgs {
    /// Directory holding the persisted collections. In-memory when unset.
    #[arg(long, env = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CameraArgs {
    /// Still image served as the rear-facing camera.
    #[arg(long, env = "CAMERA_REAR_SOURCE")]
    pub camera_rear_source: Option<PathBuf>,

    #[arg(long, env = "CAMERA_FALLBACK_SOURCE")]
    pub camera_fallback_source: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl From<Args> for NutrilensConfig {
    fn from(args: Args) -> Self {
        NutrilensConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
            camera: CameraConfig {
                rear_source: args.camera.camera_rear_source,
                fallback_source: args.camera.camera_fallback_source,
            },
        }
    }
}
