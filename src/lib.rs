//! # Theater Billing
//!
//! Computes billing statements for theatrical performances: a charge and
//! volume credits per performance, priced by the play's genre, plus invoice
//! totals. The result is rendered as plain text, HTML, CSV or JSON.
//!
//! ## Design Principles
//!
//! - **Integer money**: Charges are cents (`u64`); dollars only appear at display time
//! - **Closed genre set**: Unknown genres fail at policy resolution, never fall through
//! - **Strict invariants**: Statement totals are the sums of the enriched performances
//! - **Detached output**: Statement data owns its values; inputs are only borrowed
//!
//! ## Example
//!
//! ```
//! use theater_billing::{create_statement_data, Invoice, Performance, Play, PlayCatalog};
//!
//! let catalog: PlayCatalog = [("hamlet", Play::new("Hamlet", "tragedy"))]
//!     .into_iter()
//!     .collect();
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//!
//! let data = create_statement_data(&invoice, &catalog).unwrap();
//! assert_eq!(data.total_amount(), 65_000);
//! assert_eq!(data.total_volume_credits(), 25);
//! ```

pub mod error;
pub mod invoice;
pub mod money;
pub mod play;
pub mod pricing;
pub mod render;
pub mod source;
pub mod statement;

pub use error::{BillingError, Result};
pub use invoice::{Invoice, Performance};
pub use money::Usd;
pub use play::{Play, PlayCatalog};
pub use pricing::{PerformanceCalculator, PricingPolicy};
pub use render::{html_statement, statement, OutputFormat};
pub use source::{DataSource, JsonFileSource};
pub use statement::{
    create_statement_data, EnrichedPerformance, StatementData, StatementDataBuilder,
};
