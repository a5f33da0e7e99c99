use crate::modules::{
    contests::fetcher::{ContestFetcher, ContestWindow},
    platforms::supported_contests,
    trends::{daily_counts, DayBucket},
};
use axum::{extract::Extension, http::StatusCode, Json};
use chrono::Utc;
use contest_dashboard_libs::{
    api::{ViewResultResponse, ViewResultStats},
    clist::core::ClistCore,
};
use std::sync::Arc;
use tokio::time::Instant;

pub async fn contest_trend(
    Extension(core): Extension<Arc<ClistCore>>,
) -> (StatusCode, Json<ViewResultResponse<(), DayBucket>>) {
    let start_process = Instant::now();
    let now = Utc::now();

    let page = match ContestFetcher::new(core.as_ref())
        .fetch(ContestWindow::Past, now)
        .await
    {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("request failed cause: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ViewResultResponse::error((), "Failed to fetch contest data")),
            );
        }
    };

    let contests = supported_contests(page.objects);
    let buckets = daily_counts(&contests, now.date_naive());
    // ビューの見出しに出す合計はバケットに入った件数
    let total: u32 = buckets.iter().map(|bucket| bucket.count).sum();

    let time = Instant::now().duration_since(start_process).as_millis() as u32;
    let stats = ViewResultStats {
        time,
        total,
        index: 1,
        count: buckets.len() as u32,
        pages: 1,
        params: (),
    };

    (
        StatusCode::OK,
        Json(ViewResultResponse {
            stats,
            items: buckets,
            message: None,
        }),
    )
}
