//! Category resource: DTOs, mapper, business rules and service.

pub mod dto;
pub mod mapper;
pub mod service;
pub mod validator;

pub use dto::{
    CategoryResponse, CategoryWithProductsResponse, CreateCategoryRequest, ProductSummary,
    UpdateCategoryRequest,
};
pub use mapper::CategoryMapper;
pub use service::CategoryService;
pub use validator::CategoryValidator;
