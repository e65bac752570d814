//! The gateway's route table.
//!
//! # Responsibilities
//! - Enumerate the five public routes
//! - Map each route to the fixed message substituted for upstream errors
//!
//! # Design Decisions
//! - A closed enum rather than config: the public surface is static
//! - Error translation is an explicit table so the "generic message
//!   replaces upstream detail" contract is visible and testable

/// One of the five public gateway routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayRoute {
    /// `GET /api/item/{id}`
    FetchItem,
    /// `POST /api/item`
    SaveItem,
    /// `PUT /api/item/{id}`
    UpdateItem,
    /// `DELETE /api/item/{id}`
    DeleteItem,
    /// `GET /api/items`
    ListItems,
}

impl GatewayRoute {
    /// The fixed message returned to clients when the backend call fails.
    ///
    /// Upstream error bodies are never relayed; this string replaces them.
    pub fn error_message(self) -> &'static str {
        match self {
            GatewayRoute::FetchItem => "Error fetching item",
            GatewayRoute::SaveItem => "Error saving item",
            GatewayRoute::UpdateItem => "Error updating item",
            GatewayRoute::DeleteItem => "Error deleting item",
            GatewayRoute::ListItems => "Error fetching items",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_a_distinct_message() {
        let routes = [
            GatewayRoute::FetchItem,
            GatewayRoute::SaveItem,
            GatewayRoute::UpdateItem,
            GatewayRoute::DeleteItem,
            GatewayRoute::ListItems,
        ];

        let mut messages: Vec<&str> = routes.iter().map(|r| r.error_message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), routes.len());
    }

    #[test]
    fn test_fetch_item_message_is_stable() {
        // Clients pattern-match on this exact string.
        assert_eq!(GatewayRoute::FetchItem.error_message(), "Error fetching item");
    }
}
