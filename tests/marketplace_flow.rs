use axum_marketplace_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        auth::{LoginRequest, RegisterRequest},
        designs::{CreateDesignRequest, DesignQuery, UpdateDesignRequest},
        listings::CreateListingRequest,
        messages::SendMessageRequest,
        orders::{CreateOrderRequest, OrderQuery, UpdateOrderStatusRequest},
        producers::{ProducerSearchRequest, UpdateProducerRequest},
    },
    entity::{designers, producers},
    error::AppError,
    services::{
        auth_service, design_service, listing_service, message_service, order_service,
        producer_service,
    },
    state::AppState,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Statement};
use uuid::Uuid;

// Integration flow: register both account types -> login -> producer search ->
// design -> listing -> order -> messaging. Covers the observable contract of
// each endpoint group against a real database.
#[tokio::test]
async fn marketplace_end_to_end_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(());
            }
        };

    let state = setup_state(&database_url).await?;

    // Register a designer and two producers.
    auth_service::register_user(&state.pool, register_payload("dana@example.com", "designer", None))
        .await?;
    auth_service::register_user(
        &state.pool,
        register_payload("paul@example.com", "producer", Some("Sharp Press Co")),
    )
    .await?;
    auth_service::register_user(
        &state.pool,
        register_payload("quinn@example.com", "producer", Some("Quinn Printworks")),
    )
    .await?;

    // Registering the same email twice is rejected.
    let err = auth_service::register_user(
        &state.pool,
        register_payload("dana@example.com", "designer", None),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    // A producer-typed user gets exactly one producer row and no designer row.
    let paul_id = user_id_by_email(&state, "paul@example.com").await?;
    let producer_rows = producers::Entity::find()
        .filter(producers::Column::UserId.eq(paul_id))
        .count(&state.orm)
        .await?;
    let designer_rows = designers::Entity::find()
        .filter(designers::Column::UserId.eq(paul_id))
        .count(&state.orm)
        .await?;
    assert_eq!(producer_rows, 1);
    assert_eq!(designer_rows, 0);

    // Login round trip preserves the stored user type.
    let login = auth_service::login_user(
        &state.pool,
        LoginRequest {
            email: "paul@example.com".into(),
            password: "secret123".into(),
        },
    )
    .await?;
    assert!(login.success);
    assert_eq!(login.user.user_type, "producer");

    // A wrong password and an unknown email both come back unauthorized.
    let err = auth_service::login_user(
        &state.pool,
        LoginRequest {
            email: "paul@example.com".into(),
            password: "wrong".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
    let err = auth_service::login_user(
        &state.pool,
        LoginRequest {
            email: "nobody@example.com".into(),
            password: "secret123".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));

    // Producer directory.
    let all = producer_service::list_producers(&state).await?;
    assert_eq!(all.len(), 2);
    let sharp = all
        .iter()
        .find(|p| p.business_name == "Sharp Press Co")
        .expect("registered producer listed");
    assert_eq!(sharp.email.as_deref(), Some("paul@example.com"));

    let err = producer_service::get_producer(&state, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // Give one producer a capability document; leave the other without one.
    producer_service::update_producer(
        &state,
        sharp.id,
        UpdateProducerRequest {
            business_name: None,
            description: Some("Full-service print shop".into()),
            capabilities: Some(serde_json::json!({
                "capabilities": ["screen-printing", "dtg"]
            })),
        },
    )
    .await?;

    // Search with no filters returns the same set as the plain listing.
    let unfiltered = producer_service::search_producers(
        &state,
        ProducerSearchRequest {
            query: None,
            capabilities: Some(vec![]),
            location: None,
        },
    )
    .await?;
    assert_eq!(unfiltered.len(), all.len());

    // Substring search is case-insensitive over business name and description.
    let hits = producer_service::search_producers(
        &state,
        ProducerSearchRequest {
            query: Some("sharp".into()),
            capabilities: None,
            location: None,
        },
    )
    .await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, sharp.id);

    // The capability filter drops documented non-matches but keeps producers
    // without a capability document.
    let hits = producer_service::search_producers(
        &state,
        ProducerSearchRequest {
            query: None,
            capabilities: Some(vec!["embroidery".into()]),
            location: None,
        },
    )
    .await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].business_name, "Quinn Printworks");

    // Designs.
    let dana_user = user_id_by_email(&state, "dana@example.com").await?;
    let dana = designers::Entity::find()
        .filter(designers::Column::UserId.eq(dana_user))
        .one(&state.orm)
        .await?
        .expect("designer profile created at registration");

    let err = design_service::create_design(
        &state,
        CreateDesignRequest {
            designer_id: Uuid::new_v4(),
            title: "Orphan".into(),
            description: None,
            specifications: None,
            licensing_terms: None,
            file_path: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let design = design_service::create_design(
        &state,
        CreateDesignRequest {
            designer_id: dana.id,
            title: "City Skyline Poster".into(),
            description: Some("Two-color skyline print".into()),
            specifications: None,
            licensing_terms: None,
            file_path: None,
        },
    )
    .await?;
    assert_eq!(design.status, "draft");

    let err = design_service::update_design(
        &state,
        design.id,
        design_status_update("published"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let design = design_service::update_design(&state, design.id, design_status_update("active"))
        .await?;
    assert_eq!(design.status, "active");

    let active = design_service::list_designs(
        &state,
        DesignQuery {
            designer_id: Some(dana.id),
            status: Some("active".into()),
        },
    )
    .await?;
    assert_eq!(active.len(), 1);

    // Listings; the SKU is unique.
    let listing = listing_service::create_listing(
        &state,
        listing_payload(design.id, "POSTER-SKY-001"),
    )
    .await?;
    let err = listing_service::create_listing(
        &state,
        listing_payload(design.id, "POSTER-SKY-001"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let for_design = listing_service::list_for_design(&state, design.id).await?;
    assert_eq!(for_design.len(), 1);

    // Orders: created pending, status transitions validated.
    let order = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: dana_user,
            producer_id: sharp.id,
            product_listing_id: listing.id,
            total_amount: 2500,
            shipping_details: None,
            payment_details: None,
        },
    )
    .await?;
    assert_eq!(order.status, "pending");

    let err = order_service::update_order_status(
        &state,
        order.id,
        UpdateOrderStatusRequest {
            status: "paid".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let order = order_service::update_order_status(
        &state,
        order.id,
        UpdateOrderStatusRequest {
            status: "in_production".into(),
        },
    )
    .await?;
    assert_eq!(order.status, "in_production");

    let producer_orders = order_service::list_orders(
        &state,
        OrderQuery {
            customer_id: None,
            producer_id: Some(sharp.id),
            status: None,
        },
    )
    .await?;
    assert_eq!(producer_orders.len(), 1);

    // Messaging around the order.
    let message = message_service::send_message(
        &state,
        SendMessageRequest {
            sender_id: dana_user,
            receiver_id: paul_id,
            order_id: Some(order.id),
            content: "When can production start?".into(),
        },
    )
    .await?;
    assert!(!message.is_read);

    let inbox = message_service::list_for_user(&state, paul_id).await?;
    assert_eq!(inbox.len(), 1);

    let read = message_service::mark_read(&state, message.id).await?;
    assert!(read.is_read);

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE messages, orders, product_listings, designs, designers, producers, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { pool, orm })
}

fn register_payload(
    email: &str,
    user_type: &str,
    business_name: Option<&str>,
) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: "secret123".to_string(),
        full_name: "Test Account".to_string(),
        phone: None,
        user_type: user_type.to_string(),
        business_name: business_name.map(str::to_string),
    }
}

fn design_status_update(status: &str) -> UpdateDesignRequest {
    UpdateDesignRequest {
        title: None,
        description: None,
        specifications: None,
        licensing_terms: None,
        file_path: None,
        status: Some(status.to_string()),
    }
}

fn listing_payload(design_id: Uuid, sku: &str) -> CreateListingRequest {
    CreateListingRequest {
        design_id,
        sku: sku.to_string(),
        base_price: 2500,
        available_sizes: Some(serde_json::json!(["18x24", "24x36"])),
        available_colors: None,
        printing_requirements: None,
    }
}

async fn user_id_by_email(state: &AppState, email: &str) -> anyhow::Result<Uuid> {
    let row: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(&state.pool)
        .await?;
    Ok(row.0)
}
