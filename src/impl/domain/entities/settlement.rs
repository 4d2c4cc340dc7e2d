use iso_currency::Currency;

use super::order::PaymentMethod;

/// One of the four cash-tracking accounts into which every money movement is
/// classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementAccount {
    CashUsd,
    CashUzs,
    BankUzs,
    CardUzs,
}

impl SettlementAccount {
    pub fn currency(&self) -> Currency {
        match self {
            SettlementAccount::CashUsd => Currency::USD,
            SettlementAccount::CashUzs
            | SettlementAccount::BankUzs
            | SettlementAccount::CardUzs => Currency::UZS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettlementAccount::CashUsd => "Cash (USD)",
            SettlementAccount::CashUzs => "Cash (UZS)",
            SettlementAccount::BankUzs => "Bank (UZS)",
            SettlementAccount::CardUzs => "Card (UZS)",
        }
    }

    pub const ALL: [SettlementAccount; 4] = [
        SettlementAccount::CashUsd,
        SettlementAccount::CashUzs,
        SettlementAccount::BankUzs,
        SettlementAccount::CardUzs,
    ];
}

/// Settlement rail table. Card and bank rails always settle in UZS no matter
/// what currency the record claims; cash (and credit sales) follow the stated
/// currency. Declared as a table so the rule is visible and testable instead
/// of being scattered across classification branches.
pub fn rail_settlement_currency(method: PaymentMethod) -> Option<Currency> {
    match method {
        PaymentMethod::Bank | PaymentMethod::Card => Some(Currency::UZS),
        PaymentMethod::Cash | PaymentMethod::Debt => None,
    }
}

/// Classify a money movement into its settlement account.
pub fn settlement_account(method: PaymentMethod, stated_currency: Currency) -> SettlementAccount {
    let currency = rail_settlement_currency(method).unwrap_or(stated_currency);
    match method {
        PaymentMethod::Bank => SettlementAccount::BankUzs,
        PaymentMethod::Card => SettlementAccount::CardUzs,
        _ if currency == Currency::UZS => SettlementAccount::CashUzs,
        _ => SettlementAccount::CashUsd,
    }
}

/// Income/outflow totals of a single settlement account, denominated in that
/// account's own currency.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketTotals {
    pub income: f64,
    pub outflow: f64,
}

impl BucketTotals {
    pub fn balance(&self) -> f64 {
        self.income - self.outflow
    }
}

/// Four-bucket cash report. No cross-bucket netting.
#[derive(Debug, Clone, Default)]
pub struct BalanceReport {
    pub cash_usd: BucketTotals,
    pub cash_uzs: BucketTotals,
    pub bank_uzs: BucketTotals,
    pub card_uzs: BucketTotals,
    /// Human-readable flags raised by the unit-mismatch heuristics. The
    /// figures above are corrected, not rejected; these notes say where.
    pub notes: Vec<String>,
}

impl BalanceReport {
    pub fn bucket(&self, account: SettlementAccount) -> &BucketTotals {
        match account {
            SettlementAccount::CashUsd => &self.cash_usd,
            SettlementAccount::CashUzs => &self.cash_uzs,
            SettlementAccount::BankUzs => &self.bank_uzs,
            SettlementAccount::CardUzs => &self.card_uzs,
        }
    }

    pub(crate) fn bucket_mut(&mut self, account: SettlementAccount) -> &mut BucketTotals {
        match account {
            SettlementAccount::CashUsd => &mut self.cash_usd,
            SettlementAccount::CashUzs => &mut self.cash_uzs,
            SettlementAccount::BankUzs => &mut self.bank_uzs,
            SettlementAccount::CardUzs => &mut self.card_uzs,
        }
    }
}
