use contest_dashboard_libs::clist::model::Contest;
use once_cell::sync::Lazy;

// ホストドメインと表示名の対応表。ここに載っていないホストのコンテストはビューへ出さない。
pub static PLATFORMS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("codeforces.com", "Codeforces"),
        ("codechef.com", "CodeChef"),
        ("atcoder.jp", "AtCoder"),
        ("leetcode.com", "LeetCode"),
        ("geeksforgeeks.org", "GeeksforGeeks"),
    ]
});

pub fn resolve_platform(host: &str) -> Option<&'static str> {
    PLATFORMS
        .iter()
        .find(|(key, _)| host.contains(key))
        .map(|(_, name)| *name)
}

/// 表示名を返す。未知のホストはホスト文字列をそのまま表示に使う。
pub fn platform_name(host: &str) -> String {
    resolve_platform(host)
        .map(String::from)
        .unwrap_or_else(|| String::from(host))
}

pub fn is_supported(host: &str) -> bool {
    resolve_platform(host).is_some()
}

pub fn platform_color(host: &str) -> String {
    if host.contains("codeforces") {
        "red"
    } else if host.contains("codechef") {
        "orange"
    } else if host.contains("atcoder") {
        "green"
    } else if host.contains("leetcode") {
        "yellow"
    } else if host.contains("geeksforgeeks") {
        "darkgreen"
    } else {
        "blue"
    }
    .to_string()
}

/// 既知プラットフォーム以外のコンテストを落とす。全ビュー共通の前処理。
pub fn supported_contests(contests: Vec<Contest>) -> Vec<Contest> {
    contests
        .into_iter()
        .filter(|contest| is_supported(&contest.host))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn contest(host: &str) -> Contest {
        Contest {
            id: 1,
            event: String::from("Some Contest"),
            host: String::from(host),
            start: Utc.with_ymd_and_hms(2024, 8, 5, 12, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 8, 5, 14, 0, 0).unwrap(),
            duration: 7200,
            href: String::from("https://example.com"),
            problems: None,
        }
    }

    #[test]
    fn test_resolve_platform_by_substring() {
        assert_eq!(resolve_platform("codeforces.com"), Some("Codeforces"));
        assert_eq!(resolve_platform("www.codechef.com"), Some("CodeChef"));
        assert_eq!(resolve_platform("practice.geeksforgeeks.org"), Some("GeeksforGeeks"));
        assert_eq!(resolve_platform("topcoder.com"), None);
    }

    #[test]
    fn test_platform_name_falls_back_to_host() {
        assert_eq!(platform_name("atcoder.jp"), "AtCoder");
        assert_eq!(platform_name("topcoder.com"), "topcoder.com");
    }

    #[test]
    fn test_platform_color() {
        assert_eq!(platform_color("codeforces.com"), "red");
        assert_eq!(platform_color("leetcode.com"), "yellow");
        assert_eq!(platform_color("unknown.example.com"), "blue");
    }

    #[test]
    fn test_supported_contests_drops_unknown_hosts() {
        let contests = vec![
            contest("codeforces.com"),
            contest("topcoder.com"),
            contest("atcoder.jp"),
        ];

        let supported = supported_contests(contests);
        assert_eq!(supported.len(), 2);
        assert!(supported.iter().all(|c| is_supported(&c.host)));
    }
}
