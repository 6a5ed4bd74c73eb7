//! Flutter-facing bindings for ListKeeper core.

pub mod api;
