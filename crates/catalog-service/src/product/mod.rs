//! Product resource: DTOs, mapper, business rules and service.

pub mod dto;
pub mod mapper;
pub mod service;
pub mod validator;

pub use dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
pub use mapper::ProductMapper;
pub use service::ProductService;
pub use validator::ProductValidator;
