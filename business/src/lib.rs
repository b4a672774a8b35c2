pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod remove_item;
        pub mod view;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_catalog;
        pub mod toggle_featured;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod add_item;
            pub mod remove_item;
            pub mod view;
        }
    }
    pub mod category {
        pub mod model;
        pub mod repository;
    }
    pub mod product {
        pub mod errors;
        pub mod form;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_catalog;
            pub mod toggle_featured;
            pub mod update;
        }
    }
}
