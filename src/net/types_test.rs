use super::*;

// =============================================================
// Activity
// =============================================================

#[test]
fn activity_deserializes_camel_case() {
    let json = serde_json::json!({
        "id": "a-1",
        "userId": "user-1",
        "activityType": "RUNNING",
        "duration": 30,
        "caloriesBurned": 250,
        "startTime": "2026-08-27T10:00:00",
        "additionalMetrics": {"distance": 5.2},
        "createdAt": "2026-08-27T10:31:00",
        "updatedAt": "2026-08-27T10:31:00"
    });

    let activity: Activity = serde_json::from_value(json).expect("activity");
    assert_eq!(activity.id.as_deref(), Some("a-1"));
    assert_eq!(activity.user_id.as_deref(), Some("user-1"));
    assert_eq!(activity.activity_type, "RUNNING");
    assert_eq!(activity.duration, Some(30));
    assert_eq!(activity.calories_burned, Some(250));
    assert_eq!(
        activity.additional_metrics,
        Some(serde_json::json!({"distance": 5.2}))
    );
}

#[test]
fn activity_tolerates_omitted_fields() {
    // The activity-service response DTO does not always carry the id.
    let json = serde_json::json!({"activityType": "WALKING"});

    let activity: Activity = serde_json::from_value(json).expect("activity");
    assert!(activity.id.is_none());
    assert!(activity.duration.is_none());
    assert!(activity.additional_metrics.is_none());
}

// =============================================================
// ActivityRequest
// =============================================================

#[test]
fn request_serializes_camel_case() {
    let request = ActivityRequest {
        user_id: "user-1".to_owned(),
        activity_type: "CYCLING".to_owned(),
        duration: 45,
        calories_burned: 400,
        start_time: "2026-08-27T08:00".to_owned(),
        additional_metrics: None,
    };

    let value = serde_json::to_value(&request).expect("json");
    assert_eq!(value["userId"], "user-1");
    assert_eq!(value["activityType"], "CYCLING");
    assert_eq!(value["caloriesBurned"], 400);
    // Absent metrics are omitted, not serialized as null.
    assert!(value.get("additionalMetrics").is_none());
}

// =============================================================
// Recommendation
// =============================================================

#[test]
fn recommendation_deserializes_with_list_fields() {
    let json = serde_json::json!({
        "activityId": "a-1",
        "recommendation": "Solid session overall.",
        "improvements": ["Increase cadence"],
        "suggestions": ["Interval training (30s sprints)"],
        "safety": ["Warm up before starting"]
    });

    let rec: Recommendation = serde_json::from_value(json).expect("recommendation");
    assert_eq!(rec.activity_id.as_deref(), Some("a-1"));
    assert_eq!(rec.improvements, vec!["Increase cadence"]);
    assert_eq!(rec.safety.len(), 1);
}

#[test]
fn recommendation_defaults_to_empty_lists() {
    let rec: Recommendation = serde_json::from_value(serde_json::json!({})).expect("recommendation");
    assert!(rec.recommendation.is_none());
    assert!(rec.improvements.is_empty());
    assert!(rec.suggestions.is_empty());
    assert!(rec.safety.is_empty());
}
