pub mod db;
pub mod basket {
    pub mod entity;
    pub mod repository;
}
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod rating {
    pub mod repository;
}
pub mod review {
    pub mod entity;
    pub mod repository;
}
pub mod role {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod entity;
    pub mod repository;
}
