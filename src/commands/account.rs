use anyhow::Result;

use crate::api::client::ApiClient;
use crate::api::params::QueryParams;

pub fn get_policy_list(client: &ApiClient) -> Result<()> {
    client.submit("getpolicylist.do", &QueryParams::new())?;
    Ok(())
}

pub fn get_vendor_list(client: &ApiClient) -> Result<()> {
    client.submit("getvendorlist.do", &QueryParams::new())?;
    Ok(())
}
