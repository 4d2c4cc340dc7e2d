use std::collections::HashMap;

use fractic_server_error::ServerError;

use crate::{
    entities::{BalanceReport, SettlementAccount},
    presentation::utils::format_amount,
};

const TEMPLATE: &str = "\
CASH POSITION
=============

Cash (USD)      {{CashUsdBalance}}
Cash (UZS)      {{CashUzsBalance}}
Bank (UZS)      {{BankUzsBalance}}
Card (UZS)      {{CardUzsBalance}}

Inflows
  Cash (USD)    {{CashUsdIncome}}
  Cash (UZS)    {{CashUzsIncome}}
  Bank (UZS)    {{BankUzsIncome}}
  Card (UZS)    {{CardUzsIncome}}

Outflows
  Cash (USD)    {{CashUsdOutflow}}
  Cash (UZS)    {{CashUzsOutflow}}
  Bank (UZS)    {{BankUzsOutflow}}
  Card (UZS)    {{CardUzsOutflow}}
";

/// Management-style cash position statement over a computed balance report.
/// Unlike the printer's raw table this is a fixed-layout document meant to be
/// pasted into the weekly summary.
pub struct CashPositionStatementGenerator {
    report: BalanceReport,
}

impl CashPositionStatementGenerator {
    pub fn new(report: BalanceReport) -> Self {
        Self { report }
    }

    pub fn generate(self) -> Result<String, ServerError> {
        let mut placeholders = HashMap::new();
        for (account, prefix) in [
            (SettlementAccount::CashUsd, "CashUsd"),
            (SettlementAccount::CashUzs, "CashUzs"),
            (SettlementAccount::BankUzs, "BankUzs"),
            (SettlementAccount::CardUzs, "CardUzs"),
        ] {
            let totals = self.report.bucket(account);
            let currency = account.currency();
            placeholders.insert(
                format!("{}Balance", prefix),
                format_amount(totals.balance(), currency),
            );
            placeholders.insert(
                format!("{}Income", prefix),
                format_amount(totals.income, currency),
            );
            placeholders.insert(
                format!("{}Outflow", prefix),
                format_amount(totals.outflow, currency),
            );
        }
        super::utils::fill_template(TEMPLATE, &placeholders)
    }
}
