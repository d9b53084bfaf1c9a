pub mod application {
    pub mod basket {
        pub mod add_product;
        pub mod delete_product;
        pub mod get_total_price;
        pub mod get_user_basket;
        pub mod remove_one_quantity;
    }
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod checkout {
        pub mod process_payment;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod get_own;
        pub mod get_own_by_id;
        pub mod update;
    }
    pub mod rating {
        pub mod add_rating;
        pub mod get_product_rating;
        pub mod get_products_by_rating;
        pub mod get_top_rated;
    }
    pub mod review {
        pub mod add_review;
        pub mod get_product_reviews;
    }
    pub mod role {
        pub mod assign_to_user;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod verification {
        pub mod confirm_code;
        pub mod request_code;
    }
    pub mod wishlist {
        pub mod add_product;
        pub mod get_user_wishlist;
        pub mod remove_product;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod model;
        pub mod repository;
    }
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod delete_product;
            pub mod get_total_price;
            pub mod get_user_basket;
            pub mod remove_one_quantity;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod receipt;
        pub mod use_cases {
            pub mod process_payment;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod get_own;
            pub mod get_own_by_id;
            pub mod update;
        }
    }
    pub mod rating {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_rating;
            pub mod get_product_rating;
            pub mod get_products_by_rating;
            pub mod get_top_rated;
        }
    }
    pub mod review {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_review;
            pub mod get_product_reviews;
        }
    }
    pub mod role {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod assign_to_user;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod verification {
        pub mod code_store;
        pub mod errors;
        pub mod use_cases {
            pub mod confirm_code;
            pub mod request_code;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod get_user_wishlist;
            pub mod remove_product;
        }
    }
}
