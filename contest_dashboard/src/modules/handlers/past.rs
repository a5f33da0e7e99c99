use crate::modules::{
    contests::fetcher::{ContestFetcher, ContestWindow},
    labels::{duration_label, recency_label, start_labels, StartLabels},
    listing::{apply_filters, clamp_page, page_count, paginate},
    platforms::{platform_color, platform_name, supported_contests, PLATFORMS},
};
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use contest_dashboard_libs::{
    api::{ViewResultResponse, ViewResultStats},
    clist::{core::ClistCore, model::Contest},
};
use http::request::Parts;
use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::{collections::HashSet, sync::Arc};
use tokio::time::Instant;
use validator::{Validate, ValidationError};

// プラットフォーム絞り込みに指定できる値の集合
static VALID_PLATFORM_KEYS: Lazy<HashSet<&str>> = Lazy::new(|| {
    let mut keys: HashSet<&str> = PLATFORMS.iter().map(|(key, _)| *key).collect();
    keys.insert("all");
    keys
});

fn validate_platform(value: &str) -> Result<(), ValidationError> {
    if VALID_PLATFORM_KEYS.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid platform"))
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Validate, PartialEq, Eq, Clone, Default)]
pub struct PastSearchParameter {
    #[validate(length(max = 200))]
    pub keyword: Option<String>,
    // ページ番号は検証しない。範囲外は[1, pages]へ丸める。
    pub page: Option<u32>,
    #[validate]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterParameter>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Validate, PartialEq, Eq, Clone)]
pub struct FilterParameter {
    #[validate(custom = "validate_platform")]
    pub platform: Option<String>,
}

pub struct ValidatedPastSearchParameter<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPastSearchParameter<T>
where
    T: DeserializeOwned + Validate + Serialize + Default + Clone,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ViewResultResponse<T, PastContestResponse>>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let value: T = serde_structuredqs::from_str(query).map_err(|rejection| {
            tracing::error!("Parsing error: {}", rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(ViewResultResponse::<T, PastContestResponse>::error(
                    T::default(),
                    format!("invalid format query string: [{}]", rejection),
                )),
            )
        })?;

        value.validate().map_err(|rejection| {
            tracing::error!("Validation error: {}", rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(ViewResultResponse::<T, PastContestResponse>::error(
                    value.clone(),
                    format!("Validation error: [{}]", rejection).replace('\n', ", "),
                )),
            )
        })?;

        Ok(ValidatedPastSearchParameter(value))
    }
}

#[derive(Debug, Serialize)]
pub struct PastContestResponse {
    pub id: i64,
    pub event: String,
    pub host: String,
    pub platform: String,
    pub color: String,
    pub href: String,
    pub start: StartLabels,
    pub duration: String,
    pub recency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems: Option<i32>,
}

impl PastContestResponse {
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
            recency: recency_label(contest.start, now),
            problems: contest.problems,
        }
    }
}

pub async fn search_past(
    ValidatedPastSearchParameter(params): ValidatedPastSearchParameter<PastSearchParameter>,
    Extension(core): Extension<Arc<ClistCore>>,
) -> (
    StatusCode,
    Json<ViewResultResponse<PastSearchParameter, PastContestResponse>>,
) {
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
                Json(ViewResultResponse::error(
                    params,
                    "Failed to fetch past contests",
                )),
            );
        }
    };

    let contests: Vec<Contest> = supported_contests(page.objects)
        .into_iter()
        .sorted_by(|a, b| b.start.cmp(&a.start))
        .collect();

    let platform = params
        .filter
        .as_ref()
        .and_then(|filter| filter.platform.as_deref());
    let filtered = apply_filters(&contests, platform, params.keyword.as_deref());

    let total = filtered.len() as u32;
    let pages = page_count(total);
    let index = clamp_page(params.page.unwrap_or(1), pages);
    let items: Vec<PastContestResponse> = paginate(&filtered, index)
        .iter()
        .map(|contest| PastContestResponse::project(contest, now))
        .collect();

    let time = Instant::now().duration_since(start_process).as_millis() as u32;

    tracing::info!(
        target: "querylog",
        "elapsed_time={} hits={} params={}",
        time, total, serde_json::to_string(&params).unwrap_or(String::from(""))
    );

    let stats = ViewResultStats {
        time,
        total,
        index,
        count: items.len() as u32,
        pages,
        params,
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
