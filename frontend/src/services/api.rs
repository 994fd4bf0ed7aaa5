use gloo::net::http::Request;
use shared::{GoalListResponse, GoalUpdateRequest, GoalUpdateResponse};

use crate::services::error::UpdateError;

/// Default backend origin for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// API client for the FinAssistant backend.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the goal list with the precomputed savings totals.
    pub async fn list_goals(&self) -> Result<GoalListResponse, UpdateError> {
        let url = format!("{}/api/savings_goals", self.base_url);

        let response = Request::get(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(|e| UpdateError::Transport {
                reason: format!("failed to fetch goals: {}", e),
            })?;

        response
            .json::<GoalListResponse>()
            .await
            .map_err(|e| UpdateError::Transport {
                reason: format!("failed to parse goal list: {}", e),
            })
    }

    /// Submit an amount update for one goal.
    ///
    /// The body is form-encoded and the request carries the conventional
    /// AJAX header so the endpoint answers with JSON instead of a page.
    /// Any response whose body parses as [`GoalUpdateResponse`] is returned
    /// as-is, business-level failures included; everything else is a
    /// transport error.
    pub async fn update_goal_amount(
        &self,
        request: &GoalUpdateRequest,
    ) -> Result<GoalUpdateResponse, UpdateError> {
        let url = format!(
            "{}/savings_goals/{}/update_amount",
            self.base_url, request.goal_id
        );

        let response = Request::post(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form_encode_amount(request.amount))
            .map_err(|e| UpdateError::Transport {
                reason: format!("failed to build request: {}", e),
            })?
            .send()
            .await
            .map_err(|e| UpdateError::Transport {
                reason: format!("network error: {}", e),
            })?;

        response
            .json::<GoalUpdateResponse>()
            .await
            .map_err(|e| UpdateError::Transport {
                reason: format!("failed to parse update response: {}", e),
            })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn form_encode_amount(amount: f64) -> String {
    format!("amount={}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_carries_the_amount_field() {
        assert_eq!(form_encode_amount(1500.0), "amount=1500");
        assert_eq!(form_encode_amount(99.99), "amount=99.99");
    }

    #[test]
    fn base_url_is_configurable() {
        let client = ApiClient::with_base_url("http://test:9000".to_string());
        assert_eq!(client.base_url, "http://test:9000");

        let default_client = ApiClient::new();
        assert_eq!(default_client.base_url, DEFAULT_BASE_URL);
    }
}
