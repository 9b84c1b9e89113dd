/// Demo server for the churn classifier

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use churn_ml::{
    ingest,
    models::ChurnModel,
    preprocessing::{CategoryNormalizer, FeatureVectorizer},
    types::{BatchPrediction, CustomerRecord, PredictionResult},
};

#[derive(Clone)]
struct AppState {
    vectorizer: Arc<FeatureVectorizer>,
    model: Arc<ChurnModel>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let transformer_path = std::env::var("CHURN_TRANSFORMER_PATH")
        .unwrap_or_else(|_| "artifacts/transformer.json".to_string());
    let model_path = std::env::var("CHURN_MODEL_PATH")
        .unwrap_or_else(|_| "artifacts/model.json".to_string());

    // One-time artifact loading; handlers only read the shared state
    let vectorizer = FeatureVectorizer::load(&transformer_path)?;
    let model = ChurnModel::load(&model_path)?;
    if model.n_features() != vectorizer.n_features() {
        anyhow::bail!(
            "model expects {} features but transformer produces {}",
            model.n_features(),
            vectorizer.n_features()
        );
    }
    tracing::info!(
        "Loaded transformer ({} features) and model from {transformer_path}, {model_path}",
        vectorizer.n_features()
    );

    let state = AppState {
        vectorizer: Arc::new(vectorizer),
        model: Arc::new(model),
    };

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/predict", post(predict))
        .route("/api/predict-batch", post(predict_batch))
        .layer(cors)
        .with_state(state);

    let addr: std::net::SocketAddr = std::env::var("CHURN_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn predict(
    State(state): State<AppState>,
    Json(record): Json<CustomerRecord>,
) -> Result<Json<PredictionResult>, (StatusCode, String)> {
    tracing::info!("Predict request: {} fields", record.len());

    let record = CategoryNormalizer::normalize(record);
    let x = state.vectorizer.transform(std::slice::from_ref(&record));

    let mut results = state
        .model
        .predict(&x)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    let result = results
        .pop()
        .ok_or_else(|| (StatusCode::INTERNAL_SERVER_ERROR, "no prediction produced".to_string()))?;

    Ok(Json(result))
}

async fn predict_batch(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Vec<BatchPrediction>>, (StatusCode, String)> {
    let records = ingest::read_records(body.as_bytes())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    tracing::info!("Batch request: {} records", records.len());

    let records = CategoryNormalizer::normalize_batch(records);
    let x = state.vectorizer.transform(&records);

    let results = state
        .model
        .predict(&x)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    Ok(Json(
        results
            .into_iter()
            .enumerate()
            .map(|(row, r)| BatchPrediction {
                row,
                probability: r.probability,
                churn: r.churn,
            })
            .collect(),
    ))
}
