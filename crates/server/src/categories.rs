//! Category endpoints

use api_types::{
    MessageResponse,
    category::{CategoryListResponse, CategoryNew, CategoryQuery, CategoryUpdate, CategoryView},
};
use axum::{Json, extract::State, http::StatusCode};
use engine::{Category, CategoryCmd};

use crate::{
    ServerError,
    extract::{JsonBody, PathParam, QueryParams},
    server::ServerState,
};

fn category_view(category: Category) -> CategoryView {
    CategoryView {
        group_id: category.group_id(),
        id: category.id,
        name: category.name,
        color: category.color,
        created_at: category.created_at,
        updated_at: category.updated_at,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    QueryParams(query): QueryParams<CategoryQuery>,
) -> Result<Json<CategoryListResponse>, ServerError> {
    let service = state.engine.categories();
    let categories = match query.group_id {
        Some(group_id) => service.categories_by_group(group_id).await?,
        None => service.all_categories().await?,
    };

    Ok(Json(CategoryListResponse {
        categories: categories.into_iter().map(category_view).collect(),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<CategoryNew>,
) -> Result<(StatusCode, Json<CategoryView>), ServerError> {
    let (Some(name), Some(group_id)) = (payload.name, payload.group_id) else {
        return Err(ServerError::Generic(
            "Category name and group are required".to_string(),
        ));
    };

    let category = state
        .engine
        .categories()
        .create_category(
            group_id,
            CategoryCmd {
                name,
                color: payload.color,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(category_view(category))))
}

pub async fn get(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<CategoryView>, ServerError> {
    let category = state.engine.categories().category(id).await?;
    Ok(Json(category_view(category)))
}

pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<CategoryUpdate>,
) -> Result<Json<CategoryView>, ServerError> {
    let Some(name) = payload.name else {
        return Err(ServerError::Generic("Category name is required".to_string()));
    };

    let category = state
        .engine
        .categories()
        .update_category(
            id,
            CategoryCmd {
                name,
                color: payload.color,
            },
        )
        .await?;
    Ok(Json(category_view(category)))
}

pub async fn delete(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, ServerError> {
    state.engine.categories().delete_category(id).await?;
    Ok(Json(MessageResponse {
        message: "Category deleted successfully".to_string(),
    }))
}
