use chrono::{Duration, NaiveDate};
use contest_dashboard_libs::clist::model::Contest;
use serde::Serialize;

// 集計対象の日数。当日を含む直近30日。
pub const TREND_DAYS: i64 = 30;

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct DayBucket {
    pub date: String,
    pub label: String,
    pub count: u32,
}

/// 直近30日ぶんの日付キーを古い順に生成して0で初期化し、
/// 各コンテストの開始日(UTCの日付部分)に一致するバケットへ加算する。
/// どのキーにも一致しないコンテストはエラーにせず無視する。
pub fn daily_counts(contests: &[Contest], today: NaiveDate) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = (0..TREND_DAYS)
        .rev()
        .map(|i| {
            let date = today - Duration::days(i);
            DayBucket {
                date: date.format("%Y-%m-%d").to_string(),
                label: date.format("%b %-d").to_string(),
                count: 0,
            }
        })
        .collect();

    for contest in contests.iter() {
        let key = contest.start.date_naive().format("%Y-%m-%d").to_string();
        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.date == key) {
            bucket.count += 1;
        }
    }

    buckets
}
