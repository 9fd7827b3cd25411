use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{auth, categories, loans, reports, settings, transactions, user};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Every route of the API, bound to `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/auth/login", post(auth::login))
        .route(
            "/income",
            post(transactions::income_new).get(transactions::income_list),
        )
        .route(
            "/expense",
            post(transactions::expense_new).get(transactions::expense_list),
        )
        .route("/transactions", get(transactions::list))
        .route("/transactions/{id}", get(transactions::get))
        .route("/reports/dashboard", get(reports::dashboard))
        .route("/reports/daily", get(reports::daily))
        .route("/reports/monthly", get(reports::monthly))
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/categories/{id}",
            get(categories::get)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route("/loans", get(loans::list).post(loans::create))
        .route("/loans/{id}", get(loans::get))
        .route("/user/profile", get(user::profile))
        .route("/user/password", post(user::change_password))
        .route("/settings", put(settings::update))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}
