mod api;
mod cli;
mod commands;
mod credentials;
mod models;
mod progress;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        // Transport-level records from reqwest/hyper reach the subscriber
        // through its log bridge.
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let credential = credentials::load(cli.cred_file.as_deref())?;
    let client = api::client::ApiClient::new(credential)?;

    match &cli.command {
        Commands::BeginScan(args) => commands::scan::begin_scan(&client, args),
        Commands::BeginPrescan(args) => commands::scan::begin_prescan(&client, args),
        Commands::CreateApp(args) => commands::app::create_app(&client, args),
        Commands::CreateBuild(args) => commands::build::create_build(&client, args),
        Commands::DeleteApp(args) => commands::app::delete_app(&client, args),
        Commands::DeleteBuild(args) => commands::build::delete_build(&client, args),
        Commands::GetAppInfo(args) => commands::app::get_app_info(&client, args),
        Commands::GetAppList => commands::app::get_app_list(&client),
        Commands::GetBuildInfo(args) => commands::build::get_build_info(&client, args),
        Commands::GetBuildList(args) => commands::build::get_build_list(&client, args),
        Commands::GetFileList(args) => commands::file::get_file_list(&client, args),
        Commands::GetPolicyList => commands::account::get_policy_list(&client),
        Commands::GetPrescanResults(args) => commands::scan::get_prescan_results(&client, args),
        Commands::GetVendorList => commands::account::get_vendor_list(&client),
        Commands::RemoveFile(args) => commands::file::remove_file(&client, args),
        Commands::UpdateApp(args) => commands::app::update_app(&client, args),
        Commands::UpdateBuild(args) => commands::build::update_build(&client, args),
        Commands::UploadFile(args) => commands::file::upload_file(&client, args),
    }
}
