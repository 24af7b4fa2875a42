//! Shared types and pure logic of the UMKM admin dashboard.
//!
//! Everything here is independent of the browser: domain records, form drafts and
//! their validation, the dashboard revenue aggregation, the toast and confirmation
//! state machines, and the data-access seam backed by compiled-in mock data.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
