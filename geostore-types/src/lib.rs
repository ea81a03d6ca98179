//! # geostore-types
//!
//! Plain gazetteer records shared by every layer of the geostore engine.
//!
//! - **Locations**: [`location::Location`] and [`location::CountryCode`]
//! - **Lookup tables**: [`feature::FeatureCode`], [`feature::Country`], [`feature::Timezone`]
//! - **Hierarchy**: [`hierarchy::HierarchyEdge`]
//! - **Boundaries**: [`boundary::Envelope`], [`boundary::BoundaryHeader`]
//! - **Networks**: [`ip::IpRange`]
//! - **Queries**: [`query::Page`], [`query::Nearby`], [`query::WithinMatch`]
//!
//! Coordinates use the `geo` convention throughout: `x` is longitude, `y` is
//! latitude.
//!
//! ## Examples
//!
//! ```rust
//! use geostore_types::location::{CountryCode, Location};
//!
//! let oslo = Location::new(3143244, "Oslo", 59.91273, 10.74609)
//!     .with_country(CountryCode::new("NO").unwrap())
//!     .with_population(580_000);
//! assert_eq!(oslo.point().x(), 10.74609);
//! ```

pub mod boundary;
pub mod feature;
pub mod hierarchy;
pub mod ip;
pub mod location;
pub mod query;
