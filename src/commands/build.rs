use anyhow::Result;

use crate::api::client::ApiClient;
use crate::api::params::QueryParams;
use crate::cli::{
    CreateBuildArgs, DeleteBuildArgs, GetBuildInfoArgs, GetBuildListArgs, UpdateBuildArgs,
};

pub fn create_build(client: &ApiClient, args: &CreateBuildArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push("version", &args.version);

    client.submit("createbuild.do", &params)?;
    Ok(())
}

pub fn update_build(client: &ApiClient, args: &UpdateBuildArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push_opt("build_id", args.build_id.as_deref());
    params.push_opt("version", args.version.as_deref());
    params.push_opt("lifecycle_stage", args.lifecycle_stage.as_deref());
    params.push_opt("launch_date", args.launch_date.as_deref());
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("updatebuild.do", &params)?;
    Ok(())
}

pub fn delete_build(client: &ApiClient, args: &DeleteBuildArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("deletebuild.do", &params)?;
    Ok(())
}

pub fn get_build_info(client: &ApiClient, args: &GetBuildInfoArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push_opt("build_id", args.build_id.as_deref());
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("getbuildinfo.do", &params)?;
    Ok(())
}

pub fn get_build_list(client: &ApiClient, args: &GetBuildListArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("getbuildlist.do", &params)?;
    Ok(())
}
