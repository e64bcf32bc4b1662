//! The view controller: one per process, owning the view cache, the API
//! client and the session store.
//!
//! Every operation awaits its network call before touching the cache, so a
//! mutation is always followed by its invalidation and then by the refetch
//! of the affected view.

use tracing::{info, warn};
use vitrine_api_types::{CartWithOrderLines, LoginRequest, ProductWithDiscount};

use crate::{
    api::{ApiClient, ApiError},
    application::{
        error::ControllerError,
        forms::{
            AssociationForm, BrandForm, BrandUpdateForm, DiscountForm, DiscountUpdateForm,
            OrderLineForm, OrderLineUpdateForm, ProductForm, ProductUpdateForm,
        },
        view::View,
    },
    cache::{Records, ResourceType, ViewCache},
    presentation::{ViewFormat, render_login_prompt, render_processor_panel, render_records},
    session::SessionStore,
};

#[derive(Debug)]
pub struct ViewController {
    api: ApiClient,
    cache: ViewCache,
    session: SessionStore,
    format: ViewFormat,
    current: View,
}

impl ViewController {
    pub fn new(api: ApiClient, cache: ViewCache, session: SessionStore, format: ViewFormat) -> Self {
        Self {
            api,
            cache,
            session,
            format,
            current: View::Login,
        }
    }

    pub fn current_view(&self) -> View {
        self.current
    }

    pub fn cache(&self) -> &ViewCache {
        &self.cache
    }

    pub fn format(&self) -> ViewFormat {
        self.format
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.token().is_some()
    }

    /// Install the stored session token and pick the initial view.
    pub async fn start(&mut self) -> Result<View, ControllerError> {
        let token = self.session.load().await?;
        self.api.set_token(token);
        self.current = if self.is_logged_in() {
            View::Products
        } else {
            View::Login
        };
        info!(view = %self.current, "session started");
        Ok(self.current)
    }

    /// Switch to `view` and render it. Resource views fall back to the
    /// login prompt while logged out.
    pub async fn navigate(&mut self, view: View) -> Result<String, ControllerError> {
        self.current = match view.resource() {
            Some(_) if !self.is_logged_in() => View::Login,
            _ => view,
        };
        self.render_current().await
    }

    async fn render_current(&mut self) -> Result<String, ControllerError> {
        match self.current {
            View::Login => Ok(render_login_prompt(self.format)?),
            View::Processor => Ok(render_processor_panel(self.format)?),
            view => match view.resource() {
                Some(resource) => self.show(resource).await,
                None => Ok(render_login_prompt(self.format)?),
            },
        }
    }

    /// Rendered list for `resource`, served from the cache when possible.
    pub async fn show(&mut self, resource: ResourceType) -> Result<String, ControllerError> {
        self.require_login()?;
        let api = &self.api;
        let format = self.format;
        self.cache
            .fetch_or_load(resource, || load_records(api, resource, format))
            .await
    }

    /// Fetch one record straight from the backend.
    pub async fn find(&self, resource: ResourceType, id: i32) -> Result<String, ControllerError> {
        self.require_login()?;
        let lookup = |err| ControllerError::lookup(resource, id, err);
        let records = match resource {
            ResourceType::Products => {
                let product = self.api.get_product(id).await.map_err(lookup)?;
                Records::Products(vec![ProductWithDiscount {
                    product,
                    discounts: Vec::new(),
                }])
            }
            ResourceType::Brands => {
                Records::Brands(vec![self.api.get_brand(id).await.map_err(lookup)?])
            }
            ResourceType::Carts => {
                let cart = self.api.get_cart(id).await.map_err(lookup)?;
                Records::Carts(vec![CartWithOrderLines {
                    cart,
                    order_lines: Vec::new(),
                }])
            }
            ResourceType::Discounts => {
                Records::Discounts(vec![self.api.get_discount(id).await.map_err(lookup)?])
            }
        };
        Ok(render_records(self.format, &records)?)
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<String, ControllerError> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = match self.api.login(&credentials).await {
            Ok(response) => response,
            Err(ApiError::Status { status, .. }) => {
                warn!(status, username, "login rejected");
                return Err(ControllerError::LoginFailed);
            }
            Err(err) => return Err(err.into()),
        };

        self.session.save(&response.token).await?;
        self.api.set_token(Some(response.token));
        self.cache.clear();
        info!(username, "logged in");
        self.navigate(View::Products).await
    }

    pub async fn logout(&mut self) -> Result<String, ControllerError> {
        self.session.clear().await?;
        self.api.set_token(None);
        self.cache.clear();
        self.current = View::Login;
        info!("logged out");
        Ok(render_login_prompt(self.format)?)
    }

    pub async fn create_product(&mut self, form: ProductForm) -> Result<String, ControllerError> {
        self.require_login()?;
        let product = form.into_request()?;
        self.api.create_product(&product).await?;
        self.after_mutation(ResourceType::Products).await
    }

    pub async fn update_product(&mut self, form: ProductUpdateForm) -> Result<String, ControllerError> {
        self.require_login()?;
        let id = form.id;
        let current = self
            .api
            .get_product(id)
            .await
            .map_err(|err| ControllerError::lookup(ResourceType::Products, id, err))?;
        let product = form.apply(current)?;
        self.api.update_product(&product).await?;
        self.after_mutation(ResourceType::Products).await
    }

    pub async fn delete_product(&mut self, id: i32) -> Result<String, ControllerError> {
        self.require_login()?;
        self.api.delete_product(id).await?;
        self.after_mutation(ResourceType::Products).await
    }

    pub async fn create_brand(&mut self, form: BrandForm) -> Result<String, ControllerError> {
        self.require_login()?;
        let brand = form.into_request()?;
        self.api.create_brand(&brand).await?;
        self.after_mutation(ResourceType::Brands).await
    }

    pub async fn update_brand(&mut self, form: BrandUpdateForm) -> Result<String, ControllerError> {
        self.require_login()?;
        let id = form.id;
        let current = self
            .api
            .get_brand(id)
            .await
            .map_err(|err| ControllerError::lookup(ResourceType::Brands, id, err))?;
        let brand = form.apply(current)?;
        self.api.update_brand(&brand).await?;
        self.after_mutation(ResourceType::Brands).await
    }

    pub async fn delete_brand(&mut self, id: i32) -> Result<String, ControllerError> {
        self.require_login()?;
        self.api.delete_brand(id).await?;
        self.after_mutation(ResourceType::Brands).await
    }

    pub async fn create_cart(&mut self) -> Result<String, ControllerError> {
        self.require_login()?;
        self.api.create_cart().await?;
        self.after_mutation(ResourceType::Carts).await
    }

    pub async fn delete_cart(&mut self, id: i32) -> Result<String, ControllerError> {
        self.require_login()?;
        self.api.delete_cart(id).await?;
        self.after_mutation(ResourceType::Carts).await
    }

    pub async fn add_order_line(&mut self, form: OrderLineForm) -> Result<String, ControllerError> {
        self.require_login()?;
        let line = form.into_request()?;
        self.api.add_order_line(&line).await?;
        self.after_mutation(ResourceType::Carts).await
    }

    pub async fn update_order_line(
        &mut self,
        form: OrderLineUpdateForm,
    ) -> Result<String, ControllerError> {
        self.require_login()?;
        let line = form.into_request()?;
        self.api.update_order_line(&line).await?;
        self.after_mutation(ResourceType::Carts).await
    }

    pub async fn remove_order_line(&mut self, id: i32) -> Result<String, ControllerError> {
        self.require_login()?;
        self.api.remove_order_line(id).await?;
        self.after_mutation(ResourceType::Carts).await
    }

    pub async fn create_discount(&mut self, form: DiscountForm) -> Result<String, ControllerError> {
        self.require_login()?;
        let discount = form.into_request()?;
        self.api.create_discount(&discount).await?;
        self.after_mutation(ResourceType::Discounts).await
    }

    pub async fn update_discount(
        &mut self,
        form: DiscountUpdateForm,
    ) -> Result<String, ControllerError> {
        self.require_login()?;
        let id = form.id;
        let current = self
            .api
            .get_discount(id)
            .await
            .map_err(|err| ControllerError::lookup(ResourceType::Discounts, id, err))?;
        let discount = form.apply(current)?;
        self.api.update_discount(&discount).await?;
        self.after_mutation(ResourceType::Discounts).await
    }

    pub async fn delete_discount(&mut self, id: i32) -> Result<String, ControllerError> {
        self.require_login()?;
        self.api.delete_discount(id).await?;
        self.after_mutation(ResourceType::Discounts).await
    }

    pub async fn associate_discount(
        &mut self,
        form: AssociationForm,
    ) -> Result<String, ControllerError> {
        self.require_login()?;
        self.api.associate_discount(&form.into_request()).await?;
        self.after_mutation(ResourceType::Discounts).await
    }

    pub async fn pause_processor(&self) -> Result<String, ControllerError> {
        self.api.pause_processor().await?;
        info!("processor paused");
        Ok("Processor paused.".to_string())
    }

    pub async fn start_processor(&self) -> Result<String, ControllerError> {
        self.api.start_processor().await?;
        info!("processor started");
        Ok("Processor started.".to_string())
    }

    async fn after_mutation(&mut self, mutated: ResourceType) -> Result<String, ControllerError> {
        info!(resource = %mutated, "mutation applied");
        self.cache.invalidate_for(mutated);
        self.current = View::from(mutated);
        self.show(mutated).await
    }

    fn require_login(&self) -> Result<(), ControllerError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(ControllerError::NotLoggedIn)
        }
    }
}

async fn load_records(
    api: &ApiClient,
    resource: ResourceType,
    format: ViewFormat,
) -> Result<(Records, String), ControllerError> {
    let records = match resource {
        ResourceType::Products => Records::Products(api.list_products().await?),
        ResourceType::Brands => Records::Brands(api.list_brands().await?),
        ResourceType::Carts => Records::Carts(api.list_carts().await?),
        ResourceType::Discounts => Records::Discounts(api.list_discounts().await?),
    };
    let rendered = render_records(format, &records)?;
    Ok((records, rendered))
}
