use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::Serialize;

// 表示専用の固定+5:30シフト(秒)。タイムゾーンDBもDSTも使わない。
const IST_OFFSET_SECS: i32 = 19800;

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct StartLabels {
    pub date: String,
    pub time: String,
}

/// 開始時刻を+5:30だけずらした表示用の日付と時刻を返す。
pub fn start_labels(start: DateTime<Utc>) -> StartLabels {
    let shifted = start.with_timezone(&FixedOffset::east_opt(IST_OFFSET_SECS).unwrap());
    StartLabels {
        date: shifted.format("%a, %-d %b %Y").to_string(),
        time: format!("{} IST", shifted.format("%I:%M %p")),
    }
}

pub fn duration_label(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Countdown {
    pub text: String,
    pub urgent: bool,
}

/// 開始までの残り時間ラベル。0以下なら"Started"。
/// 2時間を切ったらurgentを立てる。
pub fn countdown_label(start: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let remaining = start - now;
    if remaining <= Duration::zero() {
        return Countdown {
            text: String::from("Started"),
            urgent: false,
        };
    }

    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;

    if days > 0 {
        Countdown {
            text: format!("{}d {}h", days, hours),
            urgent: false,
        }
    } else if hours > 0 {
        Countdown {
            text: format!("{}h {}m", hours, minutes),
            urgent: hours < 2,
        }
    } else {
        Countdown {
            text: format!("{}m", minutes),
            urgent: true,
        }
    }
}

/// 経過日数(切り上げ)を 1 / 7 / 30 / 365 日の境界でまとめた表示。
/// 暦の月や年ではなく固定幅のバケットで割る。単数形になるのは1日のときだけ。
pub fn recency_label(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - start;
    let days = (elapsed.num_seconds() + 86399) / 86400;

    if days == 1 {
        String::from("1 day ago")
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}
