use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extract::AuthUser;
use crate::error::ApiError;
use crate::journal::{
    dto::{
        CreateEntryRequest, CreatedEntryResponse, EntryView, MessageResponse, RecommendRequest,
        RecommendResponse, UpdateEntryRequest, UpdatedEntryResponse,
    },
    recommend::compose,
    repo::{JournalEntry, SortOrder},
};
use crate::sentiment::{self, SentimentLabel};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/journal", post(create_entry).get(list_entries))
        .route("/journal/trend", get(sentiment_trend))
        .route("/journal/recommend", post(recommend))
        .route("/journal/:id", put(update_entry).delete(delete_entry))
}

fn required_text(text: Option<String>) -> Result<String, ApiError> {
    text.map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Validation("Journal entry is required!".into()))
}

#[instrument(skip(state, payload))]
pub async fn create_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<CreatedEntryResponse>), ApiError> {
    let text = required_text(payload.text)?;

    let sentiment = sentiment::analyze(&text);
    let entry =
        JournalEntry::create(&state.db, user_id, &text, sentiment.score, sentiment.label).await?;

    info!(user_id = %user_id, entry_id = %entry.id, label = %entry.sentiment_label, "entry created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedEntryResponse {
            message: "Journal entry created successfully".into(),
            id: entry.id,
            text: entry.text,
            score: entry.sentiment_score,
            label: entry.sentiment_label,
            created_at: entry.created_at,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<EntryView>>, ApiError> {
    list_with_order(&state, user_id, SortOrder::NewestFirst).await
}

/// Oldest-first listing for charting how sentiment develops over time.
#[instrument(skip(state))]
pub async fn sentiment_trend(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<EntryView>>, ApiError> {
    list_with_order(&state, user_id, SortOrder::OldestFirst).await
}

async fn list_with_order(
    state: &AppState,
    user_id: Uuid,
    order: SortOrder,
) -> Result<Json<Vec<EntryView>>, ApiError> {
    let entries = JournalEntry::list_for_user(&state.db, user_id, order).await?;
    // Pinned contract: an empty result set is a 404, not an empty array.
    if entries.is_empty() {
        return Err(ApiError::NotFound("No journal entries found".into()));
    }
    Ok(Json(entries.into_iter().map(EntryView::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn update_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEntryRequest>,
) -> Result<Json<UpdatedEntryResponse>, ApiError> {
    let entry = JournalEntry::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Journal entry not found".into()))?;

    if entry.user_id != user_id {
        return Err(ApiError::Forbidden(
            "Not authorized to update this entry".into(),
        ));
    }

    let text = required_text(payload.text)?;

    // The stored classification always matches the stored text, so an edit
    // re-runs the classifier.
    let sentiment = sentiment::analyze(&text);
    let updated =
        JournalEntry::update_text(&state.db, id, &text, sentiment.score, sentiment.label).await?;

    info!(user_id = %user_id, entry_id = %id, "entry updated");
    Ok(Json(UpdatedEntryResponse {
        message: "Journal entry updated successfully".into(),
        entry: updated.into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let entry = JournalEntry::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Journal entry not found".into()))?;

    if entry.user_id != user_id {
        return Err(ApiError::Forbidden(
            "Not authorized to delete this entry".into(),
        ));
    }

    JournalEntry::delete(&state.db, id).await?;

    info!(user_id = %user_id, entry_id = %id, "entry deleted");
    Ok(Json(MessageResponse {
        message: "Journal entry deleted successfully".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn recommend(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let (label, _score) = match (payload.label, payload.score) {
        (Some(label), Some(score)) => (label, score),
        _ => {
            return Err(ApiError::Validation(
                "Sentiment analysis data is required!".into(),
            ))
        }
    };

    // Fail fast on labels outside the three-way split instead of silently
    // composing with an empty static suggestion.
    let label: SentimentLabel = label
        .parse()
        .map_err(|_| ApiError::Validation(format!("Unknown sentiment label: {label}")))?;

    let recommendation = compose(state.ai.as_ref(), label).await?;

    info!(user_id = %user_id, %label, "recommendation generated");
    Ok(Json(RecommendResponse {
        message: "Mood recommendations generated successfully".into(),
        recommendation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_missing_and_blank_input() {
        assert!(matches!(required_text(None), Err(ApiError::Validation(_))));
        assert!(matches!(
            required_text(Some("   ".into())),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn required_text_trims_surrounding_whitespace() {
        assert_eq!(
            required_text(Some("  Great day!  ".into())).unwrap(),
            "Great day!"
        );
    }

    #[test]
    fn entry_view_projects_only_client_facing_fields() {
        let view = EntryView {
            id: Uuid::new_v4(),
            text: "Great day!".into(),
            score: 0.62,
            label: SentimentLabel::Positive,
            created_at: time::OffsetDateTime::now_utc(),
            updated_at: time::OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"label\":\"Positive\""));
        assert!(!json.contains("user_id"));
    }
}
