//! Query parameter types for the paged listing endpoints.
//!
//! Every field is optional; handlers fall back to the defaults configured in
//! [`ServerConfig`](crate::config::ServerConfig).

use serde::Deserialize;

/// `?pageNumber=&pageSize=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

/// `?pageNumber=&pageSize=&sortBy=&dir=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSortParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub dir: Option<String>,
}
