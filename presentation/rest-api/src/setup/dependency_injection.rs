use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::product_image::repository::ProductImageRepositoryPostgres;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::remove_item::RemoveFromCartUseCaseImpl;
use business::application::cart::view::ViewCartUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_catalog::GetCatalogUseCaseImpl;
use business::application::product::toggle_featured::ToggleFeaturedUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::product::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let image_repository = Arc::new(ProductImageRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool));

        // Catalog use cases
        let get_catalog_use_case = Arc::new(GetCatalogUseCaseImpl {
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            products: product_repository.clone(),
            images: image_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            products: product_repository.clone(),
            images: image_repository.clone(),
            categories: category_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            products: product_repository.clone(),
            images: image_repository,
            categories: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            products: product_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_featured_use_case = Arc::new(ToggleFeaturedUseCaseImpl {
            products: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let view_cart_use_case = Arc::new(ViewCartUseCaseImpl {
            products: product_repository,
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            logger: logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl { logger });

        let catalog_api = crate::api::product::routes::CatalogApi::new(
            get_catalog_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            toggle_featured_use_case,
            category_repository,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            view_cart_use_case,
            add_to_cart_use_case,
            remove_from_cart_use_case,
        );

        Ok(Self {
            health_api,
            catalog_api,
            cart_api,
        })
    }
}
