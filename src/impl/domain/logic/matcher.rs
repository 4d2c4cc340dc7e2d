use std::collections::HashSet;

use crate::entities::{Client, EventRef, Order, OrderId, Transaction};

fn normalized(name: &str) -> String {
    name.trim().to_lowercase()
}

fn order_belongs_to(client: &Client, order: &Order) -> bool {
    if let Some(client_id) = &order.client_id {
        return *client_id == client.id;
    }
    let customer = normalized(&order.customer_name);
    if customer.is_empty() {
        return false;
    }
    customer == normalized(&client.name)
        || client
            .company_name
            .as_deref()
            .is_some_and(|company| customer == normalized(company))
}

/// Decides whether records belong to a given client: by id first, exact
/// (case-insensitive, trimmed) name as fallback. No fuzzy or partial
/// matching; a non-match is a normal empty-result path, never an error.
///
/// The debt-order-id set is computed up front because transaction matching
/// is two-hop: a repayment referencing one of the client's debt orders
/// belongs to the client even without a direct client reference.
pub(crate) struct ClientMatcher<'a> {
    client: &'a Client,
    debt_order_ids: HashSet<&'a OrderId>,
}

impl<'a> ClientMatcher<'a> {
    pub(crate) fn new(client: &'a Client, orders: &'a [Order]) -> Self {
        let debt_order_ids = orders
            .iter()
            .filter(|o| o.is_debt_order() && order_belongs_to(client, o))
            .map(|o| &o.id)
            .collect();
        Self {
            client,
            debt_order_ids,
        }
    }

    pub(crate) fn matches_order(&self, order: &Order) -> bool {
        order_belongs_to(self.client, order)
    }

    /// Direct client reference, or two-hop through the debt-order-id set.
    pub(crate) fn matches_transaction(&self, tx: &Transaction) -> bool {
        match &tx.reference {
            EventRef::Client(id) => *id == self.client.id,
            EventRef::Order(id) => self.debt_order_ids.contains(id),
            EventRef::Obligation(_) | EventRef::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use iso_currency::Currency;

    use crate::entities::{
        client_id, order_id, transaction_id, ClientId, PaymentMethod, PaymentStatus,
        TransactionKind,
    };

    fn client(id: &str, name: &str, company: Option<&str>) -> Client {
        Client {
            id: ClientId(id.to_string()),
            name: name.to_string(),
            company_name: company.map(|c| c.to_string()),
            cached_total_debt: 0.0,
            total_purchases: 0.0,
        }
    }

    fn debt_order(id: &str, customer: &str, client: Option<&str>) -> Order {
        Order {
            id: order_id(id),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            customer_name: customer.to_string(),
            client_id: client.map(client_id),
            total_usd: 100.0,
            total_uzs: 0.0,
            paid_usd: 0.0,
            payment_method: PaymentMethod::Debt,
            payment_status: PaymentStatus::Unpaid,
            payment_currency: Currency::USD,
            exchange_rate: None,
            items: vec![],
        }
    }

    #[test]
    fn order_matches_by_id_before_name() {
        let c = client("c1", "Alisher", None);
        let matcher = ClientMatcher::new(&c, &[]);
        assert!(matcher.matches_order(&debt_order("o1", "somebody else", Some("c1"))));
        // An explicit id pointing elsewhere wins over a matching name.
        assert!(!matcher.matches_order(&debt_order("o2", "Alisher", Some("c2"))));
    }

    #[test]
    fn order_matches_by_trimmed_case_insensitive_name_or_company() {
        let c = client("c1", "Alisher", Some("Metall Savdo LLC"));
        let matcher = ClientMatcher::new(&c, &[]);
        assert!(matcher.matches_order(&debt_order("o1", "  ALISHER ", None)));
        assert!(matcher.matches_order(&debt_order("o2", "metall savdo llc", None)));
        assert!(!matcher.matches_order(&debt_order("o3", "Alish", None)));
    }

    #[test]
    fn transaction_matches_two_hop_through_debt_orders() {
        let c = client("c1", "Alisher", None);
        let orders = vec![debt_order("o1", "", Some("c1"))];
        let matcher = ClientMatcher::new(&c, &orders);
        let mut tx = Transaction {
            id: transaction_id("t1"),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            kind: TransactionKind::ClientPayment,
            amount: 50.0,
            currency: Currency::USD,
            method: PaymentMethod::Cash,
            reference: EventRef::Order(order_id("o1")),
            exchange_rate: None,
            description: String::new(),
        };
        assert!(matcher.matches_transaction(&tx));
        tx.reference = EventRef::Order(order_id("o9"));
        assert!(!matcher.matches_transaction(&tx));
    }
}
