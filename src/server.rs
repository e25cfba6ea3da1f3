//! HTTP face of the filter engine.
//!
//! Thin mapping from endpoints onto [`MessageFilter`] operations. The engine
//! is shared mutable state behind one exclusive lock; every handler acquires
//! it for the duration of the call. Wire field names follow the JSON the
//! bundled demo page speaks.

use crate::error::ValidationError;
use crate::filter::MessageFilter;
use crate::level::FilterLevel;
use crate::report::FilterReport;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

/// Application state shared across handlers.
pub struct AppState {
    filter: Mutex<MessageFilter>,
}

impl AppState {
    pub fn new(filter: MessageFilter) -> Self {
        Self {
            filter: Mutex::new(filter),
        }
    }
}

impl ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Wires every route onto `cfg`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::scope("/api")
                .route("/filter", web::post().to(filter_message))
                .route("/batch_filter", web::post().to(batch_filter))
                .route("/words", web::get().to(list_words))
                .route("/words", web::post().to(add_word))
                .route("/words/{word}", web::delete().to(remove_word))
                .route("/statistics", web::get().to(statistics))
                .route("/reset_statistics", web::post().to(reset_statistics))
                .route("/export", web::get().to(export_words))
                .route("/test_examples", web::get().to(test_examples)),
        )
        .route("/health", web::get().to(health));
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("demo.html"))
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    message: String,
    filter_level: Option<String>,
    replacement_char: Option<String>,
    preserve_length: Option<bool>,
}

#[derive(Debug, Serialize)]
struct FilterSettings {
    level: FilterLevel,
    replacement_char: char,
    preserve_length: bool,
}

#[derive(Debug, Serialize)]
struct FilterResponse {
    #[serde(flatten)]
    report: FilterReport,
    filter_settings: FilterSettings,
}

/// POST /api/filter
///
/// Optional `filter_level` and `replacement_char` overrides go through the
/// engine's validating setters before the message is filtered, so a bad
/// override fails the whole request rather than being silently dropped.
async fn filter_message(
    state: web::Data<AppState>,
    payload: web::Json<FilterRequest>,
) -> Result<HttpResponse, ValidationError> {
    let req = payload.into_inner();
    debug!(len = req.message.len(), "filter request");

    let mut filter = state.filter.lock();
    if let Some(level) = &req.filter_level {
        filter.set_level(level.parse()?);
    }
    if let Some(ch) = &req.replacement_char {
        filter.set_replacement_char(ch)?;
    }

    let report = filter.build_report(&req.message)?;
    let filter_settings = FilterSettings {
        level: filter.level(),
        replacement_char: filter.replacement_char(),
        preserve_length: req.preserve_length.unwrap_or(true),
    };
    Ok(HttpResponse::Ok().json(FilterResponse {
        report,
        filter_settings,
    }))
}

#[derive(Debug, Deserialize)]
pub struct BatchFilterRequest {
    /// Raw JSON values: non-string entries produce per-item errors instead
    /// of failing the whole batch.
    messages: Vec<serde_json::Value>,
    filter_level: Option<String>,
    replacement_char: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchItem {
    Report {
        message_index: usize,
        #[serde(flatten)]
        report: FilterReport,
    },
    Error {
        message_index: usize,
        error: String,
    },
}

#[derive(Debug, Serialize)]
struct BatchFilterResponse {
    results: Vec<BatchItem>,
    total_processed: usize,
}

/// POST /api/batch_filter
async fn batch_filter(
    state: web::Data<AppState>,
    payload: web::Json<BatchFilterRequest>,
) -> Result<HttpResponse, ValidationError> {
    let req = payload.into_inner();

    let mut filter = state.filter.lock();
    if let Some(level) = &req.filter_level {
        filter.set_level(level.parse()?);
    }
    if let Some(ch) = &req.replacement_char {
        filter.set_replacement_char(ch)?;
    }

    let results: Vec<BatchItem> = req
        .messages
        .iter()
        .enumerate()
        .map(|(message_index, message)| match message.as_str() {
            Some(text) => match filter.build_report(text) {
                Ok(report) => BatchItem::Report {
                    message_index,
                    report,
                },
                Err(e) => BatchItem::Error {
                    message_index,
                    error: e.to_string(),
                },
            },
            None => BatchItem::Error {
                message_index,
                error: "invalid message type".to_owned(),
            },
        })
        .collect();

    let total_processed = results.len();
    Ok(HttpResponse::Ok().json(BatchFilterResponse {
        results,
        total_processed,
    }))
}

#[derive(Debug, Serialize)]
struct WordsResponse {
    words: Vec<String>,
    count: usize,
}

/// GET /api/words
async fn list_words(state: web::Data<AppState>) -> HttpResponse {
    let filter = state.filter.lock();
    let words: Vec<String> = filter.words().into_iter().map(str::to_owned).collect();
    let count = words.len();
    HttpResponse::Ok().json(WordsResponse { words, count })
}

#[derive(Debug, Deserialize)]
pub struct AddWordRequest {
    word: String,
}

#[derive(Debug, Serialize)]
struct WordMutationResponse {
    success: bool,
    word: String,
    total_words: usize,
}

/// POST /api/words
async fn add_word(
    state: web::Data<AppState>,
    payload: web::Json<AddWordRequest>,
) -> Result<HttpResponse, ValidationError> {
    let req = payload.into_inner();
    let mut filter = state.filter.lock();
    let success = filter.add_word(&req.word)?;
    info!(word = %req.word, success, "add word");
    Ok(HttpResponse::Ok().json(WordMutationResponse {
        success,
        word: req.word,
        total_words: filter.word_count(),
    }))
}

/// DELETE /api/words/{word}
async fn remove_word(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let word = path.into_inner();
    let mut filter = state.filter.lock();
    let success = filter.remove_word(&word);
    info!(word = %word, success, "remove word");
    HttpResponse::Ok().json(WordMutationResponse {
        success,
        word,
        total_words: filter.word_count(),
    })
}

/// GET /api/statistics
async fn statistics(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.filter.lock().statistics())
}

/// POST /api/reset_statistics
async fn reset_statistics(state: web::Data<AppState>) -> HttpResponse {
    state.filter.lock().reset_statistics();
    HttpResponse::Ok().json(json!({ "success": true }))
}

/// GET /api/export
///
/// The same sorted array `MessageFilter::export_to_path` writes, served as a
/// download.
async fn export_words(state: web::Data<AppState>) -> HttpResponse {
    let filter = state.filter.lock();
    let words: Vec<String> = filter.words().into_iter().map(str::to_owned).collect();
    HttpResponse::Ok()
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"word_list.json\"",
        ))
        .json(words)
}

#[derive(Debug, Serialize)]
struct ExampleCategory {
    category: &'static str,
    messages: &'static [&'static str],
}

/// GET /api/test_examples
///
/// Canned messages for the demo page. None of them depend on any particular
/// block-list being loaded.
async fn test_examples() -> HttpResponse {
    const EXAMPLES: &[ExampleCategory] = &[
        ExampleCategory {
            category: "Clean Messages",
            messages: &[
                "Hello world! How are you today?",
                "I love programming and coding!",
                "Let's have a great conversation",
            ],
        },
        ExampleCategory {
            category: "Basic Profanity",
            messages: &[
                "You are so damn stupid!",
                "This is a hell of a problem",
                "That's just crap, honestly",
            ],
        },
        ExampleCategory {
            category: "Leetspeak & Variations",
            messages: &[
                "D4mn th1s 1s b4d",
                "What the h3ll is this?",
                "5tup1d k1d5 th353 d4y5",
            ],
        },
        ExampleCategory {
            category: "Mixed Content",
            messages: &[
                "This is a damn good movie, honestly",
                "Some clean words and some stupid dirty ones",
            ],
        },
    ];

    HttpResponse::Ok().json(json!({
        "examples": EXAMPLES,
        "total_categories": EXAMPLES.len(),
    }))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    filter_ready: bool,
    word_count: usize,
    version: &'static str,
}

/// GET /health
async fn health(state: web::Data<AppState>) -> HttpResponse {
    let word_count = state.filter.lock().word_count();
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        filter_ready: word_count > 0,
        word_count,
        version: env!("CARGO_PKG_VERSION"),
    })
}
