use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DeserializeAs, SerializeAs};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClistMeta {
    pub limit: u32,
    pub next: Option<String>,
    pub offset: u32,
    pub previous: Option<String>,
    pub total_count: u32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ClistListResponse<D> {
    pub meta: ClistMeta,
    pub objects: Vec<D>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Contest {
    pub id: i64,
    pub event: String,
    pub host: String,
    #[serde_as(as = "FromClistDateTime")]
    pub start: DateTime<Utc>,
    #[serde_as(as = "FromClistDateTime")]
    pub end: DateTime<Utc>,
    pub duration: i64,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problems: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccountResource {
    pub id: i64,
    pub name: String,
    pub host: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub handle: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub contests: Option<i32>,
    #[serde(default)]
    pub last_activity: Option<String>,
    pub resource: AccountResource,
}

pub struct FromClistDateTime;

impl SerializeAs<DateTime<Utc>> for FromClistDateTime {
    fn serialize_as<S>(source: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&source.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

// CLISTの日時はタイムゾーン付き(RFC 3339)の場合とUTC前提のnaiveな場合の両方がある
impl<'de> DeserializeAs<'de, DateTime<Utc>> for FromClistDateTime {
    fn deserialize_as<D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match DateTime::parse_from_rfc3339(&value.replace('Z', "+00:00")) {
            Ok(timestamp) => Ok(timestamp.with_timezone(&Utc)),
            Err(_) => {
                let naive = NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S")
                    .map_err(|e| serde::de::Error::custom(e.to_string()))?;
                Ok(Utc.from_utc_datetime(&naive))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_meta() {
        let raw = r#"
        {
            "limit": 100,
            "next": "/api/v4/contest/?limit=100&offset=100",
            "offset": 0,
            "previous": null,
            "total_count": 132
        }
        "#;

        let meta: ClistMeta = serde_json::from_str(raw).unwrap();
        assert_eq!(meta.limit, 100);
        assert_eq!(meta.offset, 0);
        assert_eq!(meta.total_count, 132);
        assert!(meta.previous.is_none());
    }

    #[test]
    fn test_deserialize_contest_with_naive_datetime() {
        let raw = r#"
        {
            "id": 52922276,
            "event": "Codeforces Round 964 (Div. 4)",
            "host": "codeforces.com",
            "start": "2024-08-05T14:35:00",
            "end": "2024-08-05T17:35:00",
            "duration": 10800,
            "href": "https://codeforces.com/contests/1999",
            "problems": 8
        }
        "#;

        let contest: Contest = serde_json::from_str(raw).unwrap();
        assert_eq!(contest.id, 52922276);
        assert_eq!(contest.host, "codeforces.com");
        assert_eq!(contest.start.to_rfc3339(), "2024-08-05T14:35:00+00:00");
        assert_eq!(contest.duration, 10800);
        assert_eq!(contest.problems, Some(8));
    }

    #[test]
    fn test_deserialize_contest_with_rfc3339_datetime() {
        let raw = r#"
        {
            "id": 1,
            "event": "AtCoder Beginner Contest 360",
            "host": "atcoder.jp",
            "start": "2024-06-30T12:00:00Z",
            "end": "2024-06-30T13:40:00Z",
            "duration": 6000,
            "href": "https://atcoder.jp/contests/abc360"
        }
        "#;

        let contest: Contest = serde_json::from_str(raw).unwrap();
        assert_eq!(contest.start.to_rfc3339(), "2024-06-30T12:00:00+00:00");
        assert!(contest.problems.is_none());
    }

    #[test]
    fn test_deserialize_contest_list_response() {
        let raw = r#"
        {
            "meta": {
                "limit": 100,
                "next": null,
                "offset": 0,
                "previous": null,
                "total_count": 1
            },
            "objects": [
                {
                    "id": 58200342,
                    "event": "Weekly Contest 412",
                    "host": "leetcode.com",
                    "start": "2024-08-25T02:30:00",
                    "end": "2024-08-25T04:00:00",
                    "duration": 5400,
                    "href": "https://leetcode.com/contest/weekly-contest-412"
                }
            ]
        }
        "#;

        let response: ClistListResponse<Contest> = serde_json::from_str(raw).unwrap();
        assert_eq!(response.meta.total_count, 1);
        assert_eq!(response.objects.len(), 1);
        assert_eq!(response.objects[0].event, "Weekly Contest 412");
    }

    #[test]
    fn test_serialize_contest_roundtrips_utc() {
        let raw = r#"
        {
            "id": 1,
            "event": "CodeChef Starters 120",
            "host": "codechef.com",
            "start": "2024-02-14T14:30:00",
            "end": "2024-02-14T16:30:00",
            "duration": 7200,
            "href": "https://www.codechef.com/START120"
        }
        "#;

        let contest: Contest = serde_json::from_str(raw).unwrap();
        let serialized = serde_json::to_string(&contest).unwrap();
        assert!(serialized.contains(r#""start":"2024-02-14T14:30:00Z""#));
    }

    #[test]
    fn test_deserialize_account() {
        let raw = r#"
        {
            "id": 123456,
            "handle": "tourist",
            "name": "Gennady Korotkevich",
            "country": "BY",
            "rating": 3889,
            "contests": 250,
            "last_activity": "2024-08-01T00:00:00",
            "resource": {
                "id": 1,
                "name": "Codeforces",
                "host": "codeforces.com"
            }
        }
        "#;

        let account: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(account.handle, "tourist");
        assert_eq!(account.rating, Some(3889));
        assert_eq!(account.resource.host, "codeforces.com");
    }

    #[test]
    fn test_deserialize_account_with_missing_optionals() {
        let raw = r#"
        {
            "id": 7,
            "handle": "newbie",
            "resource": {
                "id": 93,
                "name": "AtCoder",
                "host": "atcoder.jp"
            }
        }
        "#;

        let account: Account = serde_json::from_str(raw).unwrap();
        assert!(account.name.is_none());
        assert!(account.rating.is_none());
    }
}
