use serde::{Deserialize, Serialize};

/// A savings goal as reported by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Opaque goal identifier, unique per rendered card.
    pub id: String,
    /// Short display title ("Новый ноутбук", ...).
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Amount the user wants to reach.
    pub target_amount: f64,
    /// Amount saved so far.
    pub current_amount: f64,
    /// Server-computed progress, nominally within [0, 100].
    pub progress_percentage: u8,
    /// Whether the target has been reached or exceeded.
    pub is_achieved: bool,
}

/// Goal list plus the totals the summary header displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalListResponse {
    pub goals: Vec<SavingsGoal>,
    pub total_saved: f64,
    pub total_target: f64,
    /// `total_saved / total_target * 100`; zero when there is no target.
    pub overall_progress: f64,
}

/// Amount update submitted for one goal.
///
/// Sent as a form-encoded body against the goal's action URL, not as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalUpdateRequest {
    pub goal_id: String,
    /// New saved amount for the goal.
    pub amount: f64,
}

impl GoalUpdateRequest {
    /// Only finite, positive amounts may leave the page.
    pub fn is_valid(&self) -> bool {
        self.amount.is_finite() && self.amount > 0.0
    }
}

/// Update endpoint payload, returned for successes and business-level
/// failures alike. A body that does not parse into this shape is treated
/// as a transport failure by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalUpdateResponse {
    pub success: bool,
    /// Human-readable message to surface in a banner.
    pub message: String,
    /// Progress after the update, nominally within [0, 100].
    pub progress_percentage: u8,
    /// Saved amount after the update.
    pub current_amount: f64,
    /// Whether this update reached the target.
    pub is_achieved: bool,
    /// Optional schedule hint; absent on older backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_on_track: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_rejects_non_positive_amounts() {
        let mut request = GoalUpdateRequest {
            goal_id: "goal-1".to_string(),
            amount: 100.0,
        };
        assert!(request.is_valid());

        request.amount = 0.0;
        assert!(!request.is_valid());

        request.amount = -5.0;
        assert!(!request.is_valid());

        request.amount = f64::INFINITY;
        assert!(!request.is_valid());

        request.amount = f64::NAN;
        assert!(!request.is_valid());
    }

    #[test]
    fn update_response_parses_endpoint_payload() {
        let json = r#"{
            "success": true,
            "message": "Цель обновлена!",
            "progress_percentage": 75,
            "current_amount": 37500.0,
            "is_achieved": false
        }"#;

        let response: GoalUpdateResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Цель обновлена!");
        assert_eq!(response.progress_percentage, 75);
        assert_eq!(response.current_amount, 37500.0);
        assert!(!response.is_achieved);
        // Older backends do not send the schedule hint.
        assert_eq!(response.is_on_track, None);
    }

    #[test]
    fn update_response_keeps_optional_schedule_hint() {
        let json = r#"{
            "success": true,
            "message": "ok",
            "progress_percentage": 40,
            "current_amount": 4000.0,
            "is_achieved": false,
            "is_on_track": false
        }"#;

        let response: GoalUpdateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.is_on_track, Some(false));
    }

    #[test]
    fn goal_list_round_trips_field_names() {
        let response = GoalListResponse {
            goals: vec![SavingsGoal {
                id: "goal-1".to_string(),
                title: "Отпуск".to_string(),
                description: None,
                target_amount: 50000.0,
                current_amount: 12500.0,
                progress_percentage: 25,
                is_achieved: false,
            }],
            total_saved: 12500.0,
            total_target: 50000.0,
            overall_progress: 25.0,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"total_saved\""));
        assert!(json.contains("\"progress_percentage\""));

        let back: GoalListResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
