use poem_openapi::{Multipart, Object, types::multipart::Upload};

/// Multipart form for creating a product with its image files.
#[derive(Debug, Multipart)]
pub struct CreateProductForm {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Category identifier
    pub category_id: String,
    /// Image files
    pub images: Vec<Upload>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price as a decimal string
    pub price: String,
}
