use std::collections::HashSet;

use regex::Regex;

use crate::entities::{client_id, order_id, transaction_id, EventRef};

/// One-time migration of the legacy `relatedId` field into a tagged
/// [`EventRef`], performed at ingestion so domain logic never touches the
/// stringly-typed shape again.
///
/// Legacy rows sometimes carry no usable `relatedId` at all and instead bury
/// an order reference in free text ("оплата заказа ORD-17"); those are
/// recovered by looking for the token after a fixed marker word and checking
/// it against the known record ids.
pub(crate) struct LegacyRefResolver {
    order_ids: HashSet<String>,
    obligation_ids: HashSet<String>,
    client_ids: HashSet<String>,
    order_marker: Regex,
}

impl LegacyRefResolver {
    pub(crate) fn new(
        order_ids: HashSet<String>,
        obligation_ids: HashSet<String>,
        client_ids: HashSet<String>,
    ) -> Self {
        Self {
            order_ids,
            obligation_ids,
            client_ids,
            // "заказа" before "заказ" so the longer marker wins.
            order_marker: Regex::new(r"(?i)(?:заказа|заказ|order)[\s:#№]*([\w\-]+)")
                .expect("hardcoded regex should be valid"),
        }
    }

    pub(crate) fn resolve(&self, related_id: Option<&str>, description: &str) -> EventRef {
        if let Some(id) = related_id.map(str::trim).filter(|id| !id.is_empty()) {
            if self.order_ids.contains(id) {
                return EventRef::Order(order_id(id));
            }
            if self.obligation_ids.contains(id) {
                return EventRef::Obligation(transaction_id(id));
            }
            if self.client_ids.contains(id) {
                return EventRef::Client(client_id(id));
            }
        }
        if let Some(caps) = self.order_marker.captures(description) {
            let token = &caps[1];
            if self.order_ids.contains(token) {
                return EventRef::Order(order_id(token));
            }
            if self.obligation_ids.contains(token) {
                return EventRef::Obligation(transaction_id(token));
            }
        }
        EventRef::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LegacyRefResolver {
        LegacyRefResolver::new(
            ["ORD-17".to_string()].into_iter().collect(),
            ["TX-OB-3".to_string()].into_iter().collect(),
            ["c1".to_string()].into_iter().collect(),
        )
    }

    #[test]
    fn related_id_resolves_orders_before_clients() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("ORD-17"), ""),
            EventRef::Order(order_id("ORD-17"))
        );
        assert_eq!(r.resolve(Some("c1"), ""), EventRef::Client(client_id("c1")));
        assert_eq!(
            r.resolve(Some("TX-OB-3"), ""),
            EventRef::Obligation(transaction_id("TX-OB-3"))
        );
    }

    #[test]
    fn description_marker_recovers_order_reference() {
        let r = resolver();
        assert_eq!(
            r.resolve(None, "оплата заказа ORD-17 наличными"),
            EventRef::Order(order_id("ORD-17"))
        );
        assert_eq!(
            r.resolve(Some("stale-id"), "payment for order ORD-17"),
            EventRef::Order(order_id("ORD-17"))
        );
        assert_eq!(r.resolve(None, "оплата заказа ORD-99"), EventRef::None);
    }
}
