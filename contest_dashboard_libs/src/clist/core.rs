use crate::clist::{
    model::{Account, ClistListResponse, Contest},
    query::ClistQueryBuilder,
};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::time::Duration;

type Result<T> = std::result::Result<T, ClistCoreError>;

#[derive(Debug, Error)]
pub enum ClistCoreError {
    #[error("failed to request to CLIST API")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize JSON data")]
    DeserializeError(#[from] serde_json::Error),
    #[error("invalid CLIST url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("{0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait ContestCatalog {
    async fn select_contests(
        &self,
        params: &[(String, String)],
    ) -> Result<ClistListResponse<Contest>>;
    async fn select_accounts(
        &self,
        params: &[(String, String)],
    ) -> Result<ClistListResponse<Account>>;
    async fn ping(&self) -> Result<()>;
}

pub struct ClistCore {
    contest_url: Url,
    account_url: Url,
    username: String,
    api_key: String,
    client: Client,
}

impl ClistCore {
    pub fn new(api_url: &str, username: &str, api_key: &str) -> Result<Self> {
        let base_url = Url::parse(&format!("{}/", api_url.trim_end_matches('/')))?;
        let contest_url = base_url.join("contest/")?;
        let account_url = base_url.join("account/")?;

        let client = Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(ClistCore {
            contest_url,
            account_url,
            username: String::from(username),
            api_key: String::from(api_key),
            client,
        })
    }

    async fn select<D>(&self, url: &Url, params: &[(String, String)]) -> Result<ClistListResponse<D>>
    where
        D: DeserializeOwned,
    {
        let res = self
            .client
            .get(url.clone())
            .query(&[
                ("username", self.username.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        match res.error_for_status_ref() {
            Ok(_) => {
                let body: ClistListResponse<D> = res.json().await?;
                Ok(body)
            }
            Err(e) => {
                let msg = res.text().await.unwrap_or_else(|_| String::default());
                Err(ClistCoreError::UnexpectedError(format!(
                    "unexpected error [{}] cause [{}]",
                    e, msg
                )))
            }
        }
    }
}

#[async_trait]
impl ContestCatalog for ClistCore {
    async fn select_contests(
        &self,
        params: &[(String, String)],
    ) -> Result<ClistListResponse<Contest>> {
        self.select(&self.contest_url, params).await
    }

    async fn select_accounts(
        &self,
        params: &[(String, String)],
    ) -> Result<ClistListResponse<Account>> {
        self.select(&self.account_url, params).await
    }

    /// 疎通確認。1件だけ取得してAPIキーとエンドポイントの有効性を確かめる。
    async fn ping(&self) -> Result<()> {
        let params = ClistQueryBuilder::new().limit(1).build();
        self.select::<Contest>(&self.contest_url, &params).await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_builds_endpoint_urls() {
        let core = ClistCore::new("https://clist.by/api/v4", "alice", "secret").unwrap();
        assert_eq!(core.contest_url.as_str(), "https://clist.by/api/v4/contest/");
        assert_eq!(core.account_url.as_str(), "https://clist.by/api/v4/account/");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let core = ClistCore::new("https://clist.by/api/v4/", "alice", "secret").unwrap();
        assert_eq!(core.contest_url.as_str(), "https://clist.by/api/v4/contest/");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = ClistCore::new("not a url", "alice", "secret");
        assert!(matches!(result, Err(ClistCoreError::InvalidUrlError(_))));
    }
}
