pub mod db;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod product_image {
    pub mod entity;
    pub mod repository;
}
