//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP and socket handlers, DTO conversion, event publication
//! - **Service Layer** (`service/`) - Business rules, the transfer engine and the notification sink
//! - **Data Layer** (`data/`) - SeaORM repositories and the ledger store
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the auth guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, socket hub, transfer engine)
//! - **Startup** (`startup`) - Initialization of database, sessions and clients
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** converts the DTO into a param and calls the service
//! 3. **Service** validates and orchestrates repository calls
//! 4. **Data** queries the database and converts entities into domain models
//! 5. **Controller** converts the result into a DTO, publishes its event and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
