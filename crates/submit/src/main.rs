//! `submit-maya-redshift` -- submit Maya/Redshift render jobs to an
//! Afanasy render farm.
//!
//! One job is built and sent per selected quality preset; with no
//! `--quality` flag every preset is submitted, lowest quality first.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default                  | Description                              |
//! |-------------------------|----------|--------------------------|------------------------------------------|
//! | `AF_WORKING_DIRECTORY`  | no       | --                       | Fallback for `--project_dir`             |
//! | `MAYA_RENDER_EXEC`      | no       | `Render`                 | Maya batch-render executable             |
//! | `MAYA_REDSHIFT_WRAPPER` | no       | --                       | Optional wrapper executable              |
//! | `AF_OUTPUT_IMAGE_DIR`   | no*      | --                       | Fallback for `--output` (*one required)  |
//! | `AF_SERVER_ADDRESS`     | no       | `http://localhost:51000` | Afanasy server HTTP endpoint             |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use renderfarm_core::config::FarmConfig;
use renderfarm_submit::args::SubmitArgs;
use renderfarm_submit::run;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "submit_maya_redshift=info,renderfarm_submit=info,renderfarm_afanasy=info".into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = SubmitArgs::parse();
    let config = FarmConfig::from_env();

    if let Err(e) = run::run(&args, &config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
