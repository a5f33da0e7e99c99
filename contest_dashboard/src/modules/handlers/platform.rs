use crate::modules::platforms::{platform_color, PLATFORMS};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PlatformEntry {
    pub host: &'static str,
    pub name: &'static str,
    pub color: String,
}

/// 絞り込みドロップダウンに出すプラットフォーム一覧
pub async fn list_platforms() -> Json<Vec<PlatformEntry>> {
    let entries = PLATFORMS
        .iter()
        .map(|&(host, name)| PlatformEntry {
            host,
            name,
            color: platform_color(host),
        })
        .collect();

    Json(entries)
}
