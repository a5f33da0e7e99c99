use chrono::{DateTime, Duration, Utc};
use contest_dashboard_libs::{
    api::ToQuery,
    clist::{
        core::{ClistCoreError, ContestCatalog},
        model::{ClistListResponse, Contest},
        query::ClistQueryBuilder,
    },
};

// 1回のクエリで取得する最大件数。2ページ目以降は追わない。
const PAGE_LIMIT: u32 = 100;
// ウィンドウの幅。現在時刻から前後30日。
const WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestWindow {
    Upcoming,
    Past,
}

pub struct WindowQuery {
    pub window: ContestWindow,
    pub now: DateTime<Utc>,
}

impl ToQuery for WindowQuery {
    fn to_query(&self) -> Vec<(String, String)> {
        match self.window {
            ContestWindow::Upcoming => ClistQueryBuilder::new()
                .start_gte(self.now)
                .start_lte(self.now + Duration::days(WINDOW_DAYS))
                .order_by("start")
                .limit(PAGE_LIMIT)
                .build(),
            ContestWindow::Past => ClistQueryBuilder::new()
                .start_gte(self.now - Duration::days(WINDOW_DAYS))
                .end_lte(self.now)
                .order_by("-start")
                .limit(PAGE_LIMIT)
                .build(),
        }
    }
}

pub struct ContestFetcher<'a, C> {
    catalog: &'a C,
}

impl<'a, C> ContestFetcher<'a, C>
where
    C: ContestCatalog + Sync,
{
    pub fn new(catalog: &'a C) -> Self {
        ContestFetcher { catalog }
    }

    /// ウィンドウに対応するコンテスト一覧の1ページ目をCLISTから取得するメソッド
    ///
    /// リトライはしない。失敗はそのまま呼び出し側へ返し、各ビューが独立に処理する。
    pub async fn fetch(
        &self,
        window: ContestWindow,
        now: DateTime<Utc>,
    ) -> Result<ClistListResponse<Contest>, ClistCoreError> {
        let params = WindowQuery { window, now }.to_query();
        let page = self.catalog.select_contests(&params).await?;

        tracing::info!(
            "{} of {} contests retrieved.",
            page.objects.len(),
            page.meta.total_count
        );

        Ok(page)
    }
}
