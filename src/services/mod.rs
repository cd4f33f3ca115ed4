pub mod auth_service;
pub mod design_service;
pub mod designer_service;
pub mod listing_service;
pub mod message_service;
pub mod order_service;
pub mod producer_service;
