use serde::Serialize;

pub trait ToQuery {
    fn to_query(&self) -> Vec<(String, String)>;
}

#[derive(Debug, Serialize)]
pub struct ViewResultResponse<P, D>
where
    P: Serialize,
    D: Serialize,
{
    pub stats: ViewResultStats<P>,
    pub items: Vec<D>,
    pub message: Option<String>,
}

impl<P, D> ViewResultResponse<P, D>
where
    P: Serialize,
    D: Serialize,
{
    pub fn error(params: P, message: impl ToString) -> Self {
        Self {
            stats: ViewResultStats {
                time: 0,
                total: 0,
                index: 0,
                pages: 0,
                count: 0,
                params,
            },
            items: Vec::new(),
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViewResultStats<P> {
    pub time: u32,
    pub total: u32,
    pub index: u32,
    pub pages: u32,
    pub count: u32,
    pub params: P,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_response_has_empty_items() {
        let response: ViewResultResponse<(), ()> =
            ViewResultResponse::error((), "Failed to fetch past contests");

        assert_eq!(response.items.len(), 0);
        assert_eq!(response.stats.total, 0);
        assert_eq!(
            response.message,
            Some(String::from("Failed to fetch past contests"))
        );
    }

    #[test]
    fn test_serialize_error_response() {
        let response: ViewResultResponse<(), ()> = ViewResultResponse::error((), "oops");
        let serialized = serde_json::to_string(&response).unwrap();

        assert_eq!(
            serialized,
            r#"{"stats":{"time":0,"total":0,"index":0,"pages":0,"count":0,"params":null},"items":[],"message":"oops"}"#
        );
    }
}
