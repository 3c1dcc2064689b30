//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber: structured `tracing` events,
//! filtered by `RUST_LOG`, printed in the compact format without module targets.
//!
//! ## What Gets Traced
//!
//! - **HTTP requests**: one span per handler with the raw path identifier. Client
//!   faults are logged at `warn`, server faults at `error`.
//! - **Product actor**: startup, each Create/Get/Update/Delete/List request, and
//!   the final store size on shutdown.
//! - **Order storage**: saves, lookups and rejected or corrupt rows.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Request outcomes and actor lifecycle
//! RUST_LOG=info cargo run
//!
//! # Full payloads and list parameters
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP layer at debug
//! RUST_LOG=info,storefront::handler=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a create followed by a missing lookup reads:
//!
//! ```text
//! INFO create_product: Created product_id="product_1" size=1
//! INFO create_product: Product created product_id=product_1
//! WARN get_product{raw_id="7"}: Request rejected status=404 error=Product not found
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // spans already name the operation
        .compact()
        .init();
}
