use anyhow::Result;

use crate::api::client::ApiClient;
use crate::api::params::QueryParams;
use crate::cli::{GetFileListArgs, RemoveFileArgs, UploadFileArgs};
use crate::progress::BarObserver;

pub fn upload_file(client: &ApiClient, args: &UploadFileArgs) -> Result<()> {
    client.upload_file(
        &args.app_id,
        &args.filename,
        args.sandbox_id.as_deref(),
        args.save_as.as_deref(),
        Box::new(BarObserver::new()),
    )?;
    Ok(())
}

pub fn remove_file(client: &ApiClient, args: &RemoveFileArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push("file_id", &args.file_id);
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("removefile.do", &params)?;
    Ok(())
}

pub fn get_file_list(client: &ApiClient, args: &GetFileListArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push_opt("build_id", args.build_id.as_deref());
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("getfilelist.do", &params)?;
    Ok(())
}
