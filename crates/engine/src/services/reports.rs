use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, ResultEngine, Transaction, TransactionKind};

use super::TransactionService;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    /// `total_income - total_expense`, negative on a loss.
    pub net_profit_loss: MoneyCents,
}

/// Totals of a single calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    pub net: MoneyCents,
}

/// Totals of a calendar month, keyed as `YYYY-MM`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    pub net: MoneyCents,
}

#[derive(Clone, Copy, Debug, Default)]
struct Bucket {
    income: MoneyCents,
    expense: MoneyCents,
}

fn overflow() -> EngineError {
    EngineError::InvalidData("report total out of range".to_string())
}

fn net(income: MoneyCents, expense: MoneyCents) -> ResultEngine<MoneyCents> {
    income.checked_sub(expense).ok_or_else(overflow)
}

impl Bucket {
    fn add(&mut self, tx: &Transaction) -> ResultEngine<()> {
        let side = match tx.kind() {
            TransactionKind::Income => &mut self.income,
            TransactionKind::Expense => &mut self.expense,
        };
        *side = side.checked_add(tx.amount()).ok_or_else(overflow)?;
        Ok(())
    }

    fn net(self) -> ResultEngine<MoneyCents> {
        net(self.income, self.expense)
    }
}

/// Groups transactions by `key`. Buckets come out in ascending key order.
fn group_by<K: Ord>(
    txs: &[Transaction],
    key: impl Fn(&Transaction) -> K,
) -> ResultEngine<BTreeMap<K, Bucket>> {
    let mut buckets: BTreeMap<K, Bucket> = BTreeMap::new();
    for tx in txs {
        buckets.entry(key(tx)).or_default().add(tx)?;
    }
    Ok(buckets)
}

/// Aggregates the full transaction set into summaries.
///
/// Every call re-reads everything; there is no cached or incremental state.
#[derive(Clone)]
pub struct ReportService {
    transactions: TransactionService,
}

impl ReportService {
    pub fn new(transactions: TransactionService) -> Self {
        Self { transactions }
    }

    pub async fn total_income(&self) -> ResultEngine<MoneyCents> {
        self.transactions.total(TransactionKind::Income).await
    }

    pub async fn total_expense(&self) -> ResultEngine<MoneyCents> {
        self.transactions.total(TransactionKind::Expense).await
    }

    pub async fn net_profit_loss(&self) -> ResultEngine<MoneyCents> {
        Ok(self.dashboard_summary().await?.net_profit_loss)
    }

    pub async fn dashboard_summary(&self) -> ResultEngine<DashboardSummary> {
        let (total_income, total_expense) =
            tokio::try_join!(self.total_income(), self.total_expense())?;

        Ok(DashboardSummary {
            total_income,
            total_expense,
            net_profit_loss: net(total_income, total_expense)?,
        })
    }

    pub async fn daily_summary(&self) -> ResultEngine<Vec<DailySummary>> {
        let all = self.transactions.all().await?;

        group_by(&all, Transaction::date)?
            .into_iter()
            .map(|(date, bucket)| {
                Ok(DailySummary {
                    date,
                    total_income: bucket.income,
                    total_expense: bucket.expense,
                    net: bucket.net()?,
                })
            })
            .collect()
    }

    pub async fn monthly_summary(&self) -> ResultEngine<Vec<MonthlySummary>> {
        let all = self.transactions.all().await?;

        group_by(&all, |tx| (tx.date().year(), tx.date().month()))?
            .into_iter()
            .map(|((year, month), bucket)| {
                Ok(MonthlySummary {
                    month: format!("{year:04}-{month:02}"),
                    total_income: bucket.income,
                    total_expense: bucket.expense,
                    net: bucket.net()?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExpenseTransaction, IncomeTransaction};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn income(cents: i64, date: NaiveDate) -> Transaction {
        Transaction::Income(IncomeTransaction {
            id: format!("in-{cents}"),
            amount: MoneyCents::new(cents),
            date,
            category: "Salary".to_string(),
            description: "Pay".to_string(),
            income_type: None,
        })
    }

    fn expense(cents: i64, date: NaiveDate) -> Transaction {
        Transaction::Expense(ExpenseTransaction {
            id: format!("ex-{cents}"),
            amount: MoneyCents::new(cents),
            date,
            category: "Food".to_string(),
            description: "Lunch".to_string(),
            payment_method: None,
        })
    }

    #[test]
    fn group_by_day_keeps_missing_side_at_zero() {
        let txs = vec![
            income(100_000, day(2026, 2, 1)),
            expense(20_000, day(2026, 2, 1)),
            income(50_000, day(2026, 2, 2)),
        ];

        let buckets = group_by(&txs, Transaction::date).unwrap();
        assert_eq!(buckets.len(), 2);

        let first = buckets[&day(2026, 2, 1)];
        assert_eq!(first.income, MoneyCents::new(100_000));
        assert_eq!(first.net(), Ok(MoneyCents::new(80_000)));

        let second = buckets[&day(2026, 2, 2)];
        assert_eq!(second.expense, MoneyCents::ZERO);
    }

    #[test]
    fn net_can_be_negative() {
        let txs = vec![income(50_000, day(2026, 2, 1)), expense(120_000, day(2026, 2, 2))];
        let buckets = group_by(&txs, |_| ()).unwrap();
        assert_eq!(buckets[&()].net(), Ok(MoneyCents::new(-70_000)));
    }

    #[test]
    fn totals_beyond_i64_are_an_error() {
        let big = i64::MAX / 2 + 1;
        let txs = vec![income(big, day(2026, 2, 1)), income(big, day(2026, 2, 1))];
        assert_eq!(
            group_by(&txs, Transaction::date).unwrap_err(),
            EngineError::InvalidData("report total out of range".to_string())
        );

        let bucket = Bucket {
            income: MoneyCents::new(-2),
            expense: MoneyCents::new(i64::MAX),
        };
        assert!(bucket.net().is_err());
    }
}
