use chrono::{DateTime, SecondsFormat, Utc};

/// Builder for the query parameters of a CLIST collection request.
/// Credentials are appended by the client, never here.
pub struct ClistQueryBuilder {
    params: Vec<(&'static str, String)>,
}

impl ClistQueryBuilder {
    pub fn new() -> Self {
        Self {
            params: vec![("format", String::from("json"))],
        }
    }
    pub fn build(self) -> Vec<(String, String)> {
        self.params
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
    pub fn start_gte(mut self, bound: DateTime<Utc>) -> Self {
        self.params.push(("start__gte", format_bound(bound)));
        self
    }
    pub fn start_lte(mut self, bound: DateTime<Utc>) -> Self {
        self.params.push(("start__lte", format_bound(bound)));
        self
    }
    pub fn end_lte(mut self, bound: DateTime<Utc>) -> Self {
        self.params.push(("end__lte", format_bound(bound)));
        self
    }
    pub fn order_by(mut self, order: impl ToString) -> Self {
        let order = order.to_string();
        if !order.is_empty() {
            self.params.push(("order_by", order));
        }
        self
    }
    pub fn limit(mut self, limit: u32) -> Self {
        self.params.push(("limit", limit.to_string()));
        self
    }
    pub fn offset(mut self, offset: u32) -> Self {
        self.params.push(("offset", offset.to_string()));
        self
    }
    pub fn handle(mut self, handle: impl ToString) -> Self {
        let handle = handle.to_string();
        if !handle.is_empty() {
            self.params.push(("handle", handle));
        }
        self
    }
    pub fn resource_host(mut self, host: impl ToString) -> Self {
        let host = host.to_string();
        if !host.is_empty() {
            self.params.push(("resource__host", host));
        }
        self
    }
}

fn format_bound(bound: DateTime<Utc>) -> String {
    bound.to_rfc3339_opts(SecondsFormat::Secs, true)
}
