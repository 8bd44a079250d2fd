use crate::error::{ApiError, Message};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use saleslens_core::domain::month::Month;
use saleslens_core::domain::transaction::Transaction;
use saleslens_core::query::filter::TransactionFilter;
use saleslens_core::query::page::{Page, Pagination};
use saleslens_core::source::TransactionSource;
use saleslens_core::stats::histogram::{self, CategoryCount, PriceRangeCount};
use saleslens_core::stats::{self, Statistics};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TransactionSource>,
    /// `None` when the database was unreachable at startup; only seeding needs it.
    pub pool: Option<PgPool>,
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/transactions", get(list_transactions))
        .route("/statistics", get(get_statistics))
        .route("/bar-chart", get(get_bar_chart))
        .route("/pie-chart", get(get_pie_chart))
        .route("/seed", get(seed_database));

    Router::new()
        .route("/", get(health))
        .nest("/api", api)
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Message> {
    Json(Message::new("Server is running successfully!"))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(Message::new("Endpoint not found")))
}

/// Raw query pairs. Read this way so repeated or odd keys never reject the request;
/// the first occurrence of a key wins.
type QueryPairs = Query<Vec<(String, String)>>;

fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

async fn fetch_all(
    state: &AppState,
    context: &'static str,
) -> Result<Vec<Transaction>, ApiError> {
    state
        .source
        .fetch_all()
        .await
        .map_err(|e| ApiError::failure(context, e))
}

// Month is validated before anything is fetched.
async fn fetch_month(
    state: &AppState,
    params: &[(String, String)],
    context: &'static str,
) -> Result<Vec<Transaction>, ApiError> {
    let month = Month::parse_required(param(params, "month"))?;
    let items = fetch_all(state, context).await?;
    Ok(TransactionFilter::by_month(month).apply(items))
}

async fn list_transactions(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Json<Page<Transaction>>, ApiError> {
    let filter = TransactionFilter {
        month: Month::parse_lenient(param(&params, "month")),
        search: param(&params, "search").map(str::to_string),
    };
    let pagination = Pagination::from_params(param(&params, "page"), param(&params, "perPage"));

    let items = fetch_all(&state, "Error fetching transactions").await?;
    Ok(Json(pagination.paginate(filter.apply(items))))
}

async fn get_statistics(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Json<Statistics>, ApiError> {
    let items = fetch_month(&state, &params, "Error fetching statistics").await?;
    Ok(Json(stats::summarize(&items)))
}

async fn get_bar_chart(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Json<Vec<PriceRangeCount>>, ApiError> {
    let items = fetch_month(&state, &params, "Error fetching bar chart data").await?;
    Ok(Json(histogram::price_histogram(&items)))
}

async fn get_pie_chart(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    let items = fetch_month(&state, &params, "Error fetching pie chart data").await?;
    Ok(Json(histogram::category_histogram(&items)))
}

async fn seed_database(State(state): State<AppState>) -> Result<Json<Message>, ApiError> {
    const CONTEXT: &str = "Error seeding database";

    let Some(pool) = &state.pool else {
        return Err(ApiError::failure(
            CONTEXT,
            anyhow::anyhow!("database is not connected"),
        ));
    };

    let report = saleslens_core::storage::transactions::seed_database(pool)
        .await
        .map_err(|e| ApiError::failure(CONTEXT, e))?;

    tracing::info!(
        seed_batch_id = %report.seed_batch_id,
        inserted = report.inserted,
        "seeded transactions"
    );
    Ok(Json(Message::new("Database seeded successfully!")))
}
