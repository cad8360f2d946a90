use anyhow::Result;

use crate::api::client::ApiClient;
use crate::api::params::QueryParams;
use crate::cli::{CreateAppArgs, DeleteAppArgs, GetAppInfoArgs, UpdateAppArgs};
use crate::models::choices::{AppType, DeploymentMethod, Industry, Origin};

pub fn create_app(client: &ApiClient, args: &CreateAppArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_name", &args.app_name);
    params.push("business_criticality", args.business_criticality.as_str());
    params.push_opt("description", args.description.as_deref());
    params.push_opt("vendor_id", args.vendor_id.as_deref());
    params.push_opt("policy", args.policy.as_deref());
    params.push_opt("business_unit", args.business_unit.as_deref());
    params.push_opt("business_owner", args.business_owner.as_deref());
    params.push_opt("business_owner_email", args.business_owner_email.as_deref());
    params.push_opt("teams", args.teams.as_deref());
    params.push_opt("origin", args.origin.map(Origin::as_str));
    params.push_opt("industry", args.industry.map(Industry::as_str));
    params.push_opt("app_type", args.app_type.map(AppType::as_str));
    params.push_opt(
        "deployment_method",
        args.deployment_method.map(DeploymentMethod::as_str),
    );
    params.push_flag("web_application", args.web_application);
    params.push_opt("archer_app_name", args.archer_app_name.as_deref());
    params.push_list("tags", &args.tags);

    client.submit("createapp.do", &params)?;
    Ok(())
}

pub fn update_app(client: &ApiClient, args: &UpdateAppArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);
    params.push("app_name", &args.app_name);
    params.push("business_criticality", args.business_criticality.as_str());
    params.push_opt("description", args.description.as_deref());
    params.push_opt("policy", args.policy.as_deref());
    params.push_opt("business_unit", args.business_unit.as_deref());
    params.push_opt("business_owner", args.business_owner.as_deref());
    params.push_opt("business_owner_email", args.business_owner_email.as_deref());
    params.push_opt("teams", args.teams.as_deref());
    params.push_opt("origin", args.origin.map(Origin::as_str));
    params.push_opt("industry", args.industry.map(Industry::as_str));
    params.push_opt("app_type", args.app_type.map(AppType::as_str));
    params.push_opt(
        "deployment_method",
        args.deployment_method.map(DeploymentMethod::as_str),
    );
    params.push_opt("archer_app_name", args.archer_app_name.as_deref());
    params.push_list("tags", &args.tags);
    params.push_opt("custom_field_name", args.custom_field_name.as_deref());
    params.push_opt("custom_field_value", args.custom_field_value.as_deref());

    client.submit("updateapp.do", &params)?;
    Ok(())
}

pub fn delete_app(client: &ApiClient, args: &DeleteAppArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);

    client.submit("deleteapp.do", &params)?;
    Ok(())
}

pub fn get_app_info(client: &ApiClient, args: &GetAppInfoArgs) -> Result<()> {
    let mut params = QueryParams::new();
    params.push("app_id", &args.app_id);

    client.submit("getappinfo.do", &params)?;
    Ok(())
}

pub fn get_app_list(client: &ApiClient) -> Result<()> {
    client.submit("getapplist.do", &QueryParams::new())?;
    Ok(())
}
