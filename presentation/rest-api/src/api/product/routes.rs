use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::category::repository::CategoryRepository;
use business::domain::product::errors::ProductError;
use business::domain::product::form::{FieldErrors, ProductFormData};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_catalog::GetCatalogUseCase;
use business::domain::product::use_cases::toggle_featured::{
    ToggleFeaturedParams, ToggleFeaturedUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::cart::routes::CART_SESSION_KEY;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CatalogResponse, DeleteProductView, EditProductView, ProductFormContext, ProductFormFields,
};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    toggle_featured_use_case: Arc<dyn ToggleFeaturedUseCase>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl CatalogApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        toggle_featured_use_case: Arc<dyn ToggleFeaturedUseCase>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            get_catalog_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            toggle_featured_use_case,
            category_repository,
        }
    }

    /// Builds a form context with the category choices loaded.
    async fn form_context(
        &self,
        values: ProductFormData,
        errors: FieldErrors,
    ) -> Result<ProductFormContext, Json<ErrorResponse>> {
        match self.category_repository.get_all().await {
            Ok(categories) => Ok(ProductFormContext::new(values, errors, categories)),
            Err(err) => {
                let (_status, json) = ProductError::Repository(err).into_error_response();
                Err(json)
            }
        }
    }

    /// Ensures the session carries a cart entry, so a visitor gets an empty
    /// cart on their first page view.
    fn ensure_cart(session: &Session) {
        if session.get::<Vec<Uuid>>(CART_SESSION_KEY).is_none() {
            session.set(CART_SESSION_KEY, Vec::<Uuid>::new());
        }
    }

    async fn listing(&self, session: &Session) -> ListProductsResponse {
        Self::ensure_cart(session);

        match self.get_catalog_use_case.execute().await {
            Ok(page) => ListProductsResponse::Ok(Json(CatalogResponse {
                products: page.products.into_iter().map(|p| p.into()).collect(),
                featured_products: page.featured.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }
}

/// Catalog management API
///
/// Endpoints for browsing the product listing and managing products through
/// the create, edit, delete, and feature-toggle flows.
#[OpenApi]
impl CatalogApi {
    /// Product listing page
    ///
    /// Returns every active product plus the featured subset. Also seeds the
    /// visitor's session with an empty cart when none exists yet.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn list_products(&self, session: &Session) -> ListProductsResponse {
        self.listing(session).await
    }

    /// Product listing page (POST)
    ///
    /// The listing accepts POST as well, behaving exactly like GET.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Catalog")]
    async fn list_products_post(&self, session: &Session) -> ListProductsResponse {
        self.listing(session).await
    }

    /// Blank product form
    ///
    /// Returns an empty form context for the create page, with the category
    /// choices and no errors.
    #[oai(path = "/products/create", method = "get", tag = "ApiTags::Catalog")]
    async fn create_product_form(&self) -> ProductFormResponse {
        match self
            .form_context(ProductFormData::empty(), FieldErrors::new())
            .await
        {
            Ok(context) => ProductFormResponse::Ok(Json(context)),
            Err(json) => ProductFormResponse::InternalError(json),
        }
    }

    /// Create a product
    ///
    /// On success redirects to the listing page. Validation failures return
    /// the form context again, carrying the submitted values and field errors.
    #[oai(path = "/products/create", method = "post", tag = "ApiTags::Catalog")]
    async fn create_product(&self, body: Json<ProductFormFields>) -> SubmitFormResponse {
        let form: ProductFormData = body.0.into();

        match self
            .create_use_case
            .execute(CreateProductParams { form: form.clone() })
            .await
        {
            Ok(_) => SubmitFormResponse::Redirect("/products".to_string()),
            Err(ProductError::ValidationFailed(errors)) => {
                match self.form_context(form, errors).await {
                    Ok(context) => SubmitFormResponse::Invalid(Json(context)),
                    Err(json) => SubmitFormResponse::InternalError(json),
                }
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SubmitFormResponse::NotFound(json),
                    _ => SubmitFormResponse::InternalError(json),
                }
            }
        }
    }

    /// Pre-filled edit form
    ///
    /// Returns the product, its images, and a form context populated with the
    /// stored values.
    #[oai(path = "/products/:id/edit", method = "get", tag = "ApiTags::Catalog")]
    async fn edit_product_form(&self, id: Path<String>) -> EditProductFormResponse {
        let Some(uuid) = parse_product_id(&id.0) else {
            return EditProductFormResponse::NotFound(not_found_body());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(detail) => {
                let form = ProductFormData::from_product(&detail.product, &detail.images);
                match self.form_context(form, FieldErrors::new()).await {
                    Ok(context) => EditProductFormResponse::Ok(Json(EditProductView {
                        product: detail.product.into(),
                        images: detail.images.into_iter().map(|i| i.into()).collect(),
                        form: context,
                    })),
                    Err(json) => EditProductFormResponse::InternalError(json),
                }
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => EditProductFormResponse::NotFound(json),
                    _ => EditProductFormResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Applies the submitted form to an existing product, reconciling its
    /// image set with the submitted slots. Redirects to the listing page on
    /// success; validation failures return the form context with errors.
    #[oai(
        path = "/products/:id/edit",
        method = "post",
        tag = "ApiTags::Catalog"
    )]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductFormFields>,
    ) -> SubmitFormResponse {
        let Some(uuid) = parse_product_id(&id.0) else {
            return SubmitFormResponse::NotFound(not_found_body());
        };

        let form: ProductFormData = body.0.into();

        match self
            .update_use_case
            .execute(UpdateProductParams {
                id: uuid,
                form: form.clone(),
            })
            .await
        {
            Ok(_) => SubmitFormResponse::Redirect("/products".to_string()),
            Err(ProductError::ValidationFailed(errors)) => {
                match self.form_context(form, errors).await {
                    Ok(context) => SubmitFormResponse::Invalid(Json(context)),
                    Err(json) => SubmitFormResponse::InternalError(json),
                }
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SubmitFormResponse::NotFound(json),
                    _ => SubmitFormResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete confirmation page
    ///
    /// Returns the product the confirmation page presents before a delete.
    #[oai(
        path = "/products/:id/delete",
        method = "get",
        tag = "ApiTags::Catalog"
    )]
    async fn delete_product_form(&self, id: Path<String>) -> DeleteProductFormResponse {
        let Some(uuid) = parse_product_id(&id.0) else {
            return DeleteProductFormResponse::NotFound(not_found_body());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(detail) => DeleteProductFormResponse::Ok(Json(DeleteProductView {
                product: detail.product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductFormResponse::NotFound(json),
                    _ => DeleteProductFormResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes the product and its images, then redirects to the
    /// listing page.
    #[oai(
        path = "/products/:id/delete",
        method = "post",
        tag = "ApiTags::Catalog"
    )]
    async fn delete_product(&self, id: Path<String>) -> RedirectResponse {
        let Some(uuid) = parse_product_id(&id.0) else {
            return RedirectResponse::NotFound(not_found_body());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => RedirectResponse::Redirect("/products".to_string()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RedirectResponse::NotFound(json),
                    _ => RedirectResponse::InternalError(json),
                }
            }
        }
    }

    /// Toggle the featured flag
    ///
    /// Flips whether the product appears in the promoted subset, then
    /// redirects to the listing page.
    #[oai(
        path = "/products/:id/toggle-featured",
        method = "post",
        tag = "ApiTags::Catalog"
    )]
    async fn toggle_featured(&self, id: Path<String>) -> RedirectResponse {
        let Some(uuid) = parse_product_id(&id.0) else {
            return RedirectResponse::NotFound(not_found_body());
        };

        match self
            .toggle_featured_use_case
            .execute(ToggleFeaturedParams { id: uuid })
            .await
        {
            Ok(_) => RedirectResponse::Redirect("/products".to_string()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RedirectResponse::NotFound(json),
                    _ => RedirectResponse::InternalError(json),
                }
            }
        }
    }
}

/// Ids that do not parse are treated the same as ids with no matching row.
pub(crate) fn parse_product_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

pub(crate) fn not_found_body() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("NotFound", "product.not_found"))
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductFormResponse {
    #[oai(status = 200)]
    Ok(Json<ProductFormContext>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitFormResponse {
    /// Successful submission, pointing back at the listing page
    #[oai(status = 302)]
    Redirect(#[oai(header = "Location")] String),
    /// Validation failed; the form context carries the errors to re-render
    #[oai(status = 200)]
    Invalid(Json<ProductFormContext>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EditProductFormResponse {
    #[oai(status = 200)]
    Ok(Json<EditProductView>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductFormResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteProductView>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RedirectResponse {
    #[oai(status = 302)]
    Redirect(#[oai(header = "Location")] String),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
