use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Catalog,
    MyProducts,
    Basket,
    Wishlist,
    Checkout,
    Feedback,
    Categories,
    Admin,
    Account,
}
