use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::choices::{AppType, BusinessCriticality, DeploymentMethod, Industry, Origin};

#[derive(Parser)]
#[command(name = "veracode-cli")]
#[command(about = "Veracode Upload API command line client")]
#[command(
    after_help = "API reference: https://analysiscenter.veracode.com/auth/helpCenter/api/c_UploadAPI_calls.html"
)]
pub struct Cli {
    /// Two-line file containing username and password
    #[arg(long, global = true, value_name = "PATH")]
    pub cred_file: Option<PathBuf>,

    /// Enable low-level transport logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Begin a scan
    BeginScan(BeginScanArgs),

    /// Begin a prescan
    BeginPrescan(BeginPrescanArgs),

    /// Create a new app
    CreateApp(CreateAppArgs),

    /// Create a build
    CreateBuild(CreateBuildArgs),

    /// Delete an app
    DeleteApp(DeleteAppArgs),

    /// Delete a build
    DeleteBuild(DeleteBuildArgs),

    /// Get information for a particular app
    GetAppInfo(GetAppInfoArgs),

    /// Get the list of apps and their ids
    GetAppList,

    /// Get info for an app build
    GetBuildInfo(GetBuildInfoArgs),

    /// Get the list of builds for an app
    GetBuildList(GetBuildListArgs),

    /// Get the list of files uploaded to a build
    GetFileList(GetFileListArgs),

    /// Get the list of policies you have defined
    GetPolicyList,

    /// Get the results of a prescan
    GetPrescanResults(GetPrescanResultsArgs),

    /// Get the list of vendors you have defined
    GetVendorList,

    /// Remove a file from an app
    RemoveFile(RemoveFileArgs),

    /// Update an app
    UpdateApp(UpdateAppArgs),

    /// Update build information for a build
    UpdateBuild(UpdateBuildArgs),

    /// Upload a file
    UploadFile(UploadFileArgs),
}

#[derive(Args)]
pub struct BeginScanArgs {
    /// Application id
    pub app_id: String,

    /// Add a module; repeat -m for multiple modules
    #[arg(short, long = "modules", value_name = "MODULE")]
    pub modules: Vec<String>,

    #[arg(long)]
    pub scan_all_top_level_modules: bool,

    #[arg(long)]
    pub scan_selected_modules: bool,

    #[arg(long)]
    pub scan_previously_selected_modules: bool,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct BeginPrescanArgs {
    /// Application id
    pub app_id: String,

    #[arg(long)]
    pub autoscan: bool,

    #[arg(long)]
    pub scan_all_nonfatal_top_level_modules: bool,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct CreateAppArgs {
    /// Application name
    pub app_name: String,

    /// Business criticality of the app
    #[arg(value_enum)]
    pub business_criticality: BusinessCriticality,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub vendor_id: Option<String>,

    #[arg(long)]
    pub policy: Option<String>,

    #[arg(long)]
    pub business_unit: Option<String>,

    #[arg(long)]
    pub business_owner: Option<String>,

    #[arg(long)]
    pub business_owner_email: Option<String>,

    #[arg(long)]
    pub teams: Option<String>,

    #[arg(long, value_enum)]
    pub origin: Option<Origin>,

    #[arg(long, value_enum)]
    pub industry: Option<Industry>,

    #[arg(long, value_enum)]
    pub app_type: Option<AppType>,

    #[arg(long, value_enum)]
    pub deployment_method: Option<DeploymentMethod>,

    #[arg(long)]
    pub web_application: bool,

    #[arg(long)]
    pub archer_app_name: Option<String>,

    /// Add a tag; repeat -t for multiple tags
    #[arg(short, long = "tags", value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct CreateBuildArgs {
    /// Application id
    pub app_id: String,

    /// Version label for the new build
    pub version: String,
}

#[derive(Args)]
pub struct DeleteAppArgs {
    /// Application id
    pub app_id: String,
}

#[derive(Args)]
pub struct DeleteBuildArgs {
    /// Application id
    pub app_id: String,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct GetAppInfoArgs {
    /// Application id
    pub app_id: String,
}

#[derive(Args)]
pub struct GetBuildInfoArgs {
    /// Application id
    pub app_id: String,

    /// Defaults to the most recent static scan
    #[arg(long)]
    pub build_id: Option<String>,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct GetBuildListArgs {
    /// Application id
    pub app_id: String,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct GetFileListArgs {
    /// Application id
    pub app_id: String,

    /// Defaults to the most recent build
    #[arg(long)]
    pub build_id: Option<String>,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct GetPrescanResultsArgs {
    /// Application id
    pub app_id: String,

    /// Defaults to the most recent build
    #[arg(long)]
    pub build_id: Option<String>,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct RemoveFileArgs {
    /// Application id
    pub app_id: String,

    /// Id of the file to remove
    pub file_id: String,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct UpdateAppArgs {
    /// Application id
    pub app_id: String,

    /// Application name
    pub app_name: String,

    /// Business criticality of the app
    #[arg(value_enum)]
    pub business_criticality: BusinessCriticality,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub policy: Option<String>,

    #[arg(long)]
    pub business_unit: Option<String>,

    #[arg(long)]
    pub business_owner: Option<String>,

    #[arg(long)]
    pub business_owner_email: Option<String>,

    #[arg(long)]
    pub teams: Option<String>,

    #[arg(long, value_enum)]
    pub origin: Option<Origin>,

    #[arg(long, value_enum)]
    pub industry: Option<Industry>,

    #[arg(long, value_enum)]
    pub app_type: Option<AppType>,

    #[arg(long, value_enum)]
    pub deployment_method: Option<DeploymentMethod>,

    #[arg(long)]
    pub archer_app_name: Option<String>,

    /// Add a tag; repeat -t for multiple tags
    #[arg(short, long = "tags", value_name = "TAG")]
    pub tags: Vec<String>,

    /// To set multiple custom fields, run this command once per field
    #[arg(long)]
    pub custom_field_name: Option<String>,

    #[arg(long)]
    pub custom_field_value: Option<String>,
}

#[derive(Args)]
pub struct UpdateBuildArgs {
    /// Application id
    pub app_id: String,

    #[arg(long)]
    pub build_id: Option<String>,

    #[arg(long)]
    pub version: Option<String>,

    #[arg(long)]
    pub lifecycle_stage: Option<String>,

    /// MM/dd/yyyy format
    #[arg(long)]
    pub launch_date: Option<String>,

    #[arg(long)]
    pub sandbox_id: Option<String>,
}

#[derive(Args)]
pub struct UploadFileArgs {
    /// Application id
    pub app_id: String,

    /// Path to the file to upload
    pub filename: PathBuf,

    #[arg(long)]
    pub sandbox_id: Option<String>,

    /// Name to store the file under
    #[arg(long)]
    pub save_as: Option<String>,
}
