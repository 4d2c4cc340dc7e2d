use iso_currency::Currency;

use crate::entities::{
    BalanceReport, ClientStatement, LedgerEntryKind, OpenDebtKind, PaymentSource,
    SettlementAccount,
};

use super::utils::format_amount;

pub(crate) struct StatementPrinter;

impl StatementPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_statement(&self, statement: &ClientStatement) -> String {
        let mut out = String::new();

        out.push_str(
            "; --- Client -------------------------------------------------------------------\n\n",
        );
        match &statement.client.company_name {
            Some(company) => out.push_str(&format!(
                "{} ({})\n",
                statement.client.name, company
            )),
            None => out.push_str(&format!("{}\n", statement.client.name)),
        }
        out.push_str(&format!(
            "outstanding debt {:>20}\n",
            format_amount(statement.total_debt_usd, Currency::USD)
        ));
        out.push_str("\n\n");

        out.push_str(
            "; --- Open debts (oldest first) --------------------------------------------------\n\n",
        );
        self.print_open_debts(&mut out, statement);
        out.push_str("\n\n");

        out.push_str(
            "; --- Debt ledger (most recent first) --------------------------------------------\n\n",
        );
        self.print_history(&mut out, statement);

        out
    }

    fn print_open_debts(&self, out: &mut String, statement: &ClientStatement) {
        for debt in &statement.open_debts {
            let tag = match debt.kind {
                OpenDebtKind::Order => "order",
                OpenDebtKind::Obligation => "obligation",
                OpenDebtKind::GeneralDebt => "general debt",
            };
            out.push_str(&format!(
                "{} ({}) {}\n    total {:>18}  paid {:>18}  remaining {:>18}\n",
                debt.date,
                tag,
                debt.id,
                format_amount(debt.total_usd, Currency::USD),
                format_amount(debt.paid_usd, Currency::USD),
                format_amount(debt.debt_remaining_usd, Currency::USD),
            ));
            for payment in &debt.payments {
                match &payment.source {
                    PaymentSource::Direct(tx_id) => out.push_str(&format!(
                        "    payment {:47} {:>20}\n",
                        tx_id,
                        format_amount(payment.amount_usd, Currency::USD),
                    )),
                    PaymentSource::Pool => out.push_str(&format!(
                        "    payment {:47} {:>20}\n",
                        "(allocated from pool)",
                        format_amount(payment.amount_usd, Currency::USD),
                    )),
                }
            }
            out.push('\n');
        }
    }

    fn print_history(&self, out: &mut String, statement: &ClientStatement) {
        for entry in &statement.history {
            let tag = match entry.kind {
                LedgerEntryKind::Order => "debt",
                LedgerEntryKind::Repayment => "repayment",
            };
            out.push_str(&format!(
                "{} [{:9}] ({}) {:>18} | balance {:>18}\n",
                entry.date,
                tag,
                entry.record_id,
                format_amount(entry.debt_change_usd, Currency::USD),
                format_amount(entry.balance_usd, Currency::USD),
            ));
            if !entry.description.trim().is_empty() {
                for line in textwrap::wrap(entry.description.trim(), 74) {
                    out.push_str(&format!("    ; {}\n", line));
                }
            }
        }
    }

    pub(crate) fn print_balance_report(&self, report: &BalanceReport) -> String {
        let mut out = String::new();

        out.push_str(
            "; --- Account balances -----------------------------------------------------------\n\n",
        );
        for account in SettlementAccount::ALL {
            let totals = report.bucket(account);
            let currency = account.currency();
            out.push_str(&format!(
                "{:10}  income {:>20}  outflow {:>20}  balance {:>20}\n",
                account.label(),
                format_amount(totals.income, currency),
                format_amount(totals.outflow, currency),
                format_amount(totals.balance(), currency),
            ));
        }

        if !report.notes.is_empty() {
            out.push_str(
                "\n; --- Data-quality notes ---------------------------------------------------------\n\n",
            );
            for note in &report.notes {
                for line in textwrap::wrap(note, 74) {
                    out.push_str(&format!("; {}\n", line));
                }
            }
        }

        out
    }
}
