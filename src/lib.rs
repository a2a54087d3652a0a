//! Compare routing-table captures taken before and after a network change.
//!
//! [`routes::parser`] turns `show ip route vrf all` style text into per-VRF
//! route records and [`routes::diff`] classifies every route as added,
//! removed or unchanged.

pub mod config;
pub mod error;
pub mod report;
pub mod routes;

pub use routes::diff::{DiffResult, diff};
pub use routes::parser::{ParseOptions, Parser, parse};
pub use routes::{DEFAULT_VRF, ParseResult, ParseWarning, RouteRecord};
