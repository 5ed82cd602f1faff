//! Product handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{IdPath, ValidatedBody};
use crate::api::AppState;
use crate::config::{MAX_FIELD_LENGTH, MSG_PRODUCT_ADDED};
use crate::domain::{NewProduct, Product};
use crate::errors::AppResult;
use crate::types::CreatedResponse;

/// Product creation request
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = MAX_FIELD_LENGTH, message = "Must be at most 255 characters")
    )]
    #[schema(example = "Desk lamp")]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[schema(example = 19.99)]
    pub price: f64,
    #[schema(example = "Adjustable LED lamp")]
    pub description: String,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    #[schema(example = "https://example.com/lamp.png")]
    pub image: String,
    /// Owner's email
    #[validate(
        email(message = "Invalid email format"),
        length(max = MAX_FIELD_LENGTH, message = "Must be at most 255 characters")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            name: req.name,
            price: req.price,
            description: req.description,
            image: req.image,
            email: req.email,
        }
    }
}

/// Optional owner filter for listings
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Only products owned by this email
    pub email: Option<String>,
}

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/add-product", post(add_product))
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

/// Add a product
#[utoipa::path(
    post,
    path = "/add-product",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product added", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Store unavailable")
    )
)]
pub async fn add_product(
    State(state): State<AppState>,
    ValidatedBody(payload): ValidatedBody<CreateProductRequest>,
) -> AppResult<Json<CreatedResponse>> {
    let product = state
        .product_service
        .create_product(NewProduct::from(payload))
        .await?;

    Ok(Json(CreatedResponse::new(MSG_PRODUCT_ADDED, product.id)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product record", body = Product),
        (status = 404, description = "No such product")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

/// List products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Products ordered by id", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.list_products(filter.email).await?;
    Ok(Json(products))
}
