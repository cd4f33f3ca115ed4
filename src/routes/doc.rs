use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, PublicUser, RegisterRequest},
        designers::UpdateDesignerRequest,
        designs::{CreateDesignRequest, UpdateDesignRequest},
        listings::{CreateListingRequest, UpdateListingRequest},
        messages::SendMessageRequest,
        orders::{CreateOrderRequest, UpdateOrderStatusRequest},
        producers::{ProducerSearchRequest, UpdateProducerRequest},
    },
    models::{Design, DesignerProfile, Message, Order, ProducerProfile, ProductListing},
    response::ApiMessage,
    routes::{auth, designers, designs, health, listings, messages, orders, producers},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        producers::list_producers,
        producers::featured_producers,
        producers::get_producer,
        producers::search_producers,
        producers::update_producer,
        designers::list_designers,
        designers::get_designer,
        designers::update_designer,
        designs::create_design,
        designs::list_designs,
        designs::get_design,
        designs::update_design,
        designs::delete_design,
        designs::design_listings,
        listings::create_listing,
        listings::get_listing,
        listings::update_listing,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::update_order_status,
        messages::send_message,
        messages::list_messages,
        messages::mark_message_read,
    ),
    components(
        schemas(
            ApiMessage,
            health::HealthData,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            PublicUser,
            ProducerProfile,
            ProducerSearchRequest,
            UpdateProducerRequest,
            DesignerProfile,
            UpdateDesignerRequest,
            Design,
            CreateDesignRequest,
            UpdateDesignRequest,
            ProductListing,
            CreateListingRequest,
            UpdateListingRequest,
            Order,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            Message,
            SendMessageRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration and login"),
        (name = "Producers", description = "Producer directory and search"),
        (name = "Designers", description = "Designer profiles"),
        (name = "Designs", description = "Design catalog"),
        (name = "Listings", description = "Purchasable product listings"),
        (name = "Orders", description = "Order lifecycle"),
        (name = "Messages", description = "User-to-user messaging"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
