//! CSV Export functionality
//!
//! Writes expenses and income with one column per entity field, using the
//! backend's field names as headers.

use std::io::Write;

use crate::error::PfmResult;
use crate::models::{Expense, Income, Money};

/// Render an amount the way the backend stores it: `1000`, `249.5`
fn plain_amount(amount: Money) -> String {
    if amount.fraction() == 0 {
        amount.whole().to_string()
    } else {
        amount.as_f64().to_string()
    }
}

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> PfmResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record([
        "_id",
        "title",
        "description",
        "amount",
        "category",
        "date",
        "isRecurring",
        "frequency",
    ])?;

    for expense in expenses {
        csv.write_record([
            expense.id.as_str().to_string(),
            expense.title.clone(),
            expense.description.clone(),
            plain_amount(expense.amount),
            expense.category.clone(),
            expense.date.map(|d| d.to_string()).unwrap_or_default(),
            expense.is_recurring.to_string(),
            expense.frequency.clone().unwrap_or_default(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export income entries to CSV
pub fn export_income_csv<W: Write>(income: &[Income], writer: W) -> PfmResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["_id", "source", "amount"])?;

    for entry in income {
        csv.write_record([
            entry.id.as_str(),
            entry.source.as_str(),
            plain_amount(entry.amount).as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, IncomeId};
    use chrono::NaiveDate;

    #[test]
    fn test_expense_csv_quotes_and_fields() {
        let expenses = vec![Expense {
            id: ExpenseId::from("e1"),
            title: "Dinner, friends".into(),
            description: "said \"thanks\"".into(),
            amount: Money::from_minor(124950),
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 9),
            is_recurring: false,
            frequency: None,
        }];

        let mut out = Vec::new();
        export_expenses_csv(&expenses, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("_id,title,description,amount,category,date,isRecurring,frequency")
        );
        assert_eq!(
            lines.next(),
            Some("e1,\"Dinner, friends\",\"said \"\"thanks\"\"\",1249.5,Food,2025-03-09,false,")
        );
    }

    #[test]
    fn test_income_csv() {
        let income = vec![Income {
            id: IncomeId::from("i1"),
            source: "Salary".into(),
            amount: Money::from_whole(50000),
        }];

        let mut out = Vec::new();
        export_income_csv(&income, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "_id,source,amount\ni1,Salary,50000\n");
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut out = Vec::new();
        export_income_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "_id,source,amount\n");
    }
}
