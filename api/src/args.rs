use clap::Parser;
use nutrisense_core::domain::common::{BarcodeConfig, LLMConfig, NutrisenseConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrisense-api", about = "Nutrisense HTTP API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub barcode: BarcodeArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api/v1".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GENAI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BarcodeArgs {
    #[arg(
        long,
        env = "BARCODE_BASE_URL",
        default_value = "https://world.openfoodfacts.org"
    )]
    pub barcode_base_url: String,

    #[arg(long, env = "BARCODE_TIMEOUT_SECS", default_value_t = 10)]
    pub barcode_timeout_secs: u64,
}

impl From<Args> for NutrisenseConfig {
    fn from(args: Args) -> Self {
        NutrisenseConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            barcode: BarcodeConfig {
                base_url: args.barcode.barcode_base_url,
                timeout_secs: args.barcode.barcode_timeout_secs,
            },
        }
    }
}
