use anyhow::Context;
use clap::Parser;
use python_autoinstall::{
    export_codeql_python, select_and_install, CiEnv, ExternalVersionDetector,
};
use std::env;
use std::path::PathBuf;

/// Detects the project's dependency manager, installs the dependencies and
/// reports the interpreter to the CI environment file
#[derive(Parser)]
struct Cli {
    /// Base directory of the CodeQL distribution
    codeql_base_dir: PathBuf,
    /// Program that reports the target Python major version for a project
    #[clap(long, default_value = "extractor-version")]
    version_detector: PathBuf,
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ci_env = CiEnv::from_env();
    let project_dir = env::current_dir().context("Couldn't determine the working directory")?;
    let detector = ExternalVersionDetector::new(cli.version_detector);

    let interpreter = select_and_install(&project_dir, &cli.codeql_base_dir, &detector, &ci_env)?;
    if let Some(interpreter) = interpreter {
        let env_file = ci_env
            .github_env
            .as_deref()
            .context("GITHUB_ENV is not set")?;
        export_codeql_python(env_file, &interpreter)?;
    }
    Ok(())
}

fn main() {
    // Good enough for now
    if env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt::init();
    } else {
        let format = tracing_subscriber::fmt::format()
            .with_level(false)
            .with_target(false)
            .without_time()
            .compact();
        tracing_subscriber::fmt().event_format(format).init();
    }

    if let Err(e) = run() {
        eprintln!("💥 {} failed", env!("CARGO_PKG_NAME"));
        for cause in e.chain() {
            eprintln!("  Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
