use crate::modules::platforms::PLATFORMS;
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::StatusCode,
    Json,
};
use contest_dashboard_libs::{
    api::{ToQuery, ViewResultResponse, ViewResultStats},
    clist::{
        core::{ClistCore, ContestCatalog},
        model::Account,
        query::ClistQueryBuilder,
    },
};
use http::request::Parts;
use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{collections::HashSet, sync::Arc};
use tokio::time::Instant;
use validator::{Validate, ValidationError};

static VALID_ACCOUNT_HOSTS: Lazy<HashSet<&str>> =
    Lazy::new(|| PLATFORMS.iter().map(|(key, _)| *key).collect());

fn validate_host(value: &str) -> Result<(), ValidationError> {
    if VALID_ACCOUNT_HOSTS.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid host"))
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, PartialEq, Eq, Clone, Default)]
pub struct AccountSearchParameter {
    #[validate(length(min = 1, max = 100))]
    pub handle: String,
    #[validate(custom = "validate_host")]
    pub host: String,
}

impl ToQuery for AccountSearchParameter {
    fn to_query(&self) -> Vec<(String, String)> {
        ClistQueryBuilder::new()
            .handle(&self.handle)
            .resource_host(&self.host)
            .limit(1)
            .build()
    }
}

pub struct ValidatedAccountSearchParameter<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedAccountSearchParameter<T>
where
    T: DeserializeOwned + Validate + Serialize + Default + Clone,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ViewResultResponse<T, Account>>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let value: T = serde_structuredqs::from_str(query).map_err(|rejection| {
            tracing::error!("Parsing error: {}", rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(ViewResultResponse::<T, Account>::error(
                    T::default(),
                    format!("invalid format query string: [{}]", rejection),
                )),
            )
        })?;

        value.validate().map_err(|rejection| {
            tracing::error!("Validation error: {}", rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(ViewResultResponse::<T, Account>::error(
                    value.clone(),
                    format!("Validation error: [{}]", rejection).replace('\n', ", "),
                )),
            )
        })?;

        Ok(ValidatedAccountSearchParameter(value))
    }
}

/// プラットフォームごとのハンドル照会。見つからなくても失敗させず空で返す。
pub async fn search_account(
    ValidatedAccountSearchParameter(params): ValidatedAccountSearchParameter<
        AccountSearchParameter,
    >,
    Extension(core): Extension<Arc<ClistCore>>,
) -> (
    StatusCode,
    Json<ViewResultResponse<AccountSearchParameter, Account>>,
) {
    let start_process = Instant::now();

    let items: Vec<Account> = match core.select_accounts(&params.to_query()).await {
        Ok(page) => page.objects.into_iter().take(1).collect(),
        Err(e) => {
            tracing::error!("account lookup failed cause: {:?}", e);
            Vec::new()
        }
    };

    let time = Instant::now().duration_since(start_process).as_millis() as u32;
    let stats = ViewResultStats {
        time,
        total: items.len() as u32,
        index: 1,
        count: items.len() as u32,
        pages: u32::from(!items.is_empty()),
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

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_deserialize() {
        let query = "handle=tourist&host=codeforces.com";
        let params: AccountSearchParameter = serde_structuredqs::from_str(query).unwrap();

        let expected = AccountSearchParameter {
            handle: String::from("tourist"),
            host: String::from("codeforces.com"),
        };

        assert_eq!(params, expected);
    }

    #[test]
    fn test_to_query() {
        let params = AccountSearchParameter {
            handle: String::from("tourist"),
            host: String::from("codeforces.com"),
        };

        let expected = vec![
            ("format", "json"),
            ("handle", "tourist"),
            ("resource__host", "codeforces.com"),
            ("limit", "1"),
        ]
        .iter()
        .map(|param| (param.0.to_string(), param.1.to_string()))
        .collect_vec();
        assert_eq!(params.to_query(), expected);
    }

    #[test]
    fn test_validate_unknown_host() {
        let params = AccountSearchParameter {
            handle: String::from("tourist"),
            host: String::from("topcoder.com"),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_empty_handle() {
        let params = AccountSearchParameter {
            handle: String::new(),
            host: String::from("codeforces.com"),
        };
        assert!(params.validate().is_err());
    }
}
