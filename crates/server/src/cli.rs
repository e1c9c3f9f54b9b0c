use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shared::{model::PlanEnvironment, table::QuotaDisplay};

#[derive(Debug, Clone, Parser)]
#[clap(name = "plans admin server")]
pub struct Cli {
    #[clap(long, env, default_value = "crates/client/dist")]
    pub assets_dir: PathBuf,
    #[clap(long, env, default_value = "plans.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    /// Plan collection listed by the admin page (dev or prod)
    #[clap(long, env, default_value = "prod")]
    pub plans_env: PlanEnvironment,
    /// How a missing quota is shown (blank, zero or unlimited)
    #[clap(long, env, default_value = "blank")]
    pub quota_display: QuotaDisplay,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the admin page and the document api (the default)
    Serve,
    /// Write every plan in the pricing config into a plan collection
    Seed {
        /// Target environment (dev or prod)
        #[arg(long)]
        env: PlanEnvironment,
        #[arg(long, default_value = "config/pricing_plans.json")]
        config: PathBuf,
    },
}
