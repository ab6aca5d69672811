/// How the dashboard reconciles overlapping refresh responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshOrdering {
    /// Whichever response arrives last is applied, even if its request was
    /// issued earlier than one that already completed.
    #[default]
    CompletionOrder,
    /// Responses carry a monotonic request token; a completion older than the
    /// newest applied one is discarded.
    IssueOrder,
}

impl std::fmt::Display for RefreshOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshOrdering::CompletionOrder => write!(f, "completion"),
            RefreshOrdering::IssueOrder => write!(f, "issue"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub refresh_interval_secs: u64,
    pub collection_refresh_delay_ms: u64,
    pub refresh_ordering: RefreshOrdering,
}
