use anyhow::Result;

use crate::api::client::ApiClient;
use crate::api::params::QueryParams;
use crate::cli::{BeginPrescanArgs, BeginScanArgs, GetPrescanResultsArgs};

pub fn begin_scan(client: &ApiClient, args: &BeginScanArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push_list("modules", &args.modules);
    params.push_flag(
        "scan_all_top_level_modules",
        args.scan_all_top_level_modules,
    );
    params.push_flag("scan_selected_modules", args.scan_selected_modules);
    params.push_flag(
        "scan_previously_selected_modules",
        args.scan_previously_selected_modules,
    );
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("beginscan.do", &params)?;
    Ok(())
}

pub fn begin_prescan(client: &ApiClient, args: &BeginPrescanArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push_flag("autoscan", args.autoscan);
    params.push_flag(
        "scan_all_nonfatal_top_level_modules",
        args.scan_all_nonfatal_top_level_modules,
    );
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("beginprescan.do", &params)?;
    Ok(())
}

pub fn get_prescan_results(client: &ApiClient, args: &GetPrescanResultsArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push_opt("build_id", args.build_id.as_deref());
    params.push_opt("sandbox_id", args.sandbox_id.as_deref());

    client.submit("getprescanresults.do", &params)?;
    Ok(())
}
