//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, product_handler, user_handler};
use crate::domain::{Product, UserResponse};
use crate::types::{CreatedResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Catalog API",
        version = "0.1.0",
        description = "Student registration, login and product catalog over one relational store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::add_user,
        auth_handler::register,
        auth_handler::login,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        product_handler::add_product,
        product_handler::get_product,
        product_handler::list_products,
    ),
    components(
        schemas(
            UserResponse,
            Product,
            MessageResponse,
            CreatedResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            user_handler::UpdateUserRequest,
            product_handler::CreateProductRequest,
        )
    ),
    tags(
        (name = "Students", description = "Student registration, login and record management"),
        (name = "Products", description = "Product catalog")
    )
)]
pub struct ApiDoc;
