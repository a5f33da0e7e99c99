use crate::modules::{
    contests::fetcher::{ContestFetcher, ContestWindow},
    labels::{countdown_label, duration_label, start_labels, Countdown, StartLabels},
    platforms::{platform_color, platform_name, supported_contests},
};
use axum::{extract::Extension, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use contest_dashboard_libs::{
    api::{ViewResultResponse, ViewResultStats},
    clist::{core::ClistCore, model::Contest},
};
use serde::Serialize;
use std::sync::Arc;
use tokio::time::Instant;

// ビューに出す最大件数
const DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub struct UpcomingContestResponse {
    pub id: i64,
    pub event: String,
    pub host: String,
    pub platform: String,
    pub color: String,
    pub href: String,
    pub start: StartLabels,
    pub duration: String,
    pub countdown: Countdown,
}

impl UpcomingContestResponse {
    fn project(contest: &Contest, now: DateTime<Utc>) -> Self {
        Self {
            id: contest.id,
            event: contest.event.clone(),
            host: contest.host.clone(),
            platform: platform_name(&contest.host),
            color: platform_color(&contest.host),
            href: contest.href.clone(),
            start: start_labels(contest.start),
            duration: duration_label(contest.duration),
            countdown: countdown_label(contest.start, now),
        }
    }
}

pub async fn upcoming_contests(
    Extension(core): Extension<Arc<ClistCore>>,
) -> (
    StatusCode,
    Json<ViewResultResponse<(), UpcomingContestResponse>>,
) {
    let start_process = Instant::now();
    let now = Utc::now();

    let page = match ContestFetcher::new(core.as_ref())
        .fetch(ContestWindow::Upcoming, now)
        .await
    {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("request failed cause: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ViewResultResponse::error(
                    (),
                    "Failed to fetch upcoming contests",
                )),
            );
        }
    };

    let contests = supported_contests(page.objects);
    let total = contests.len() as u32;
    let items: Vec<UpcomingContestResponse> = contests
        .iter()
        .take(DISPLAY_LIMIT)
        .map(|contest| UpcomingContestResponse::project(contest, now))
        .collect();

    let time = Instant::now().duration_since(start_process).as_millis() as u32;
    let stats = ViewResultStats {
        time,
        total,
        index: 1,
        count: items.len() as u32,
        pages: u32::from(total > 0),
        params: (),
    };

    (
        StatusCode::OK,
        Json(ViewResultResponse {
            stats,
            items,
            message: None,
        }),
    )
}
