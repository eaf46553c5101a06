use uuid::Uuid;

/// Identity of the caller for one request
///
/// Passed explicitly to the pipeline and every provider call and recorded on
/// their log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: String,
    pub request_id: String,
}

impl SessionContext {
    /// Context for `user_id` with a fresh request id
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            request_id: Uuid::new_v4().to_string(),
        }
    }

    /// Context for callers that did not identify themselves
    pub fn anonymous() -> Self {
        Self::new("anonymous")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = SessionContext::new("user-1");
        let b = SessionContext::new("user-1");
        assert_eq!(a.user_id, b.user_id);
        assert_ne!(a.request_id, b.request_id);
    }
}
