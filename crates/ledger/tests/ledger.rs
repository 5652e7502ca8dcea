use chrono::{Duration, TimeZone, Utc};

use ledger::{Category, Draft, Ledger, LedgerError, MoneyCents, NO_DESCRIPTION};

fn draft(amount: &str, category: Option<Category>, description: &str) -> Draft {
    Draft {
        amount: amount.to_string(),
        category,
        description: description.to_string(),
    }
}

#[test]
fn submit_records_exact_values_and_total() {
    let mut ledger = Ledger::new();
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 30, 0).unwrap();
    let mut d = draft("12.50", Some(Category::FoodAndDining), "Lunch");

    let expense = ledger.submit_at(&mut d, now).unwrap().clone();

    assert_eq!(ledger.len(), 1);
    assert_eq!(expense.amount(), MoneyCents::new(1250));
    assert_eq!(expense.category(), Category::FoodAndDining);
    assert_eq!(expense.description(), "Lunch");
    assert_eq!(expense.date(), now);
    assert_eq!(ledger.total().to_string(), "12.50");
}

#[test]
fn extra_decimals_round_to_the_cent() {
    let mut ledger = Ledger::new();
    let mut d = draft("12.345", Some(Category::Shopping), "");

    let expense = ledger.submit(&mut d).unwrap();

    assert_eq!(expense.amount(), MoneyCents::new(1235));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total().to_string(), "12.35");
}

#[test]
fn empty_amount_creates_nothing() {
    let mut ledger = Ledger::new();
    let mut d = draft("", Some(Category::Shopping), "");

    assert_eq!(ledger.submit(&mut d), Err(LedgerError::MissingAmount));
    assert_eq!(ledger.len(), 0);
}

#[test]
fn empty_description_uses_placeholder() {
    let mut ledger = Ledger::new();
    let mut d = draft("5", Some(Category::Shopping), "");

    let expense = ledger.submit(&mut d).unwrap();

    assert_eq!(expense.description(), "");
    assert_eq!(expense.description_or_placeholder(), NO_DESCRIPTION);
    assert_eq!(NO_DESCRIPTION, "No description");
}

#[test]
fn newest_entry_comes_first_and_total_adds_up() {
    let mut ledger = Ledger::new();
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();

    let mut first = draft("10.00", Some(Category::Transportation), "bus");
    ledger.submit_at(&mut first, start).unwrap();
    let mut second = draft("20.00", Some(Category::Entertainment), "cinema");
    ledger.submit_at(&mut second, start + Duration::minutes(5)).unwrap();

    assert_eq!(ledger.total().to_string(), "30.00");
    let amounts: Vec<_> = ledger.iter().map(|e| e.amount().cents()).collect();
    assert_eq!(amounts, [2000, 1000]);
    assert_eq!(ledger.latest().map(|e| e.description()), Some("cinema"));
}

#[test]
fn empty_ledger_totals_zero() {
    let ledger = Ledger::new();
    assert!(ledger.is_empty());
    assert_eq!(ledger.total().to_string(), "0.00");
    assert!(ledger.latest().is_none());
}

#[test]
fn rejection_is_idempotent() {
    let mut ledger = Ledger::new();
    let mut ok = draft("3", Some(Category::Others), "");
    ledger.submit(&mut ok).unwrap();

    let mut no_amount = draft("", Some(Category::Others), "kept");
    let mut no_category = draft("7.25", None, "also kept");
    for _ in 0..5 {
        assert!(ledger.submit(&mut no_amount).is_err());
        assert!(ledger.submit(&mut no_category).is_err());
    }

    assert_eq!(ledger.len(), 1);
    assert_eq!(no_amount, draft("", Some(Category::Others), "kept"));
    assert_eq!(no_category, draft("7.25", None, "also kept"));
}

#[test]
fn success_resets_every_draft_field() {
    let mut ledger = Ledger::new();
    let mut d = draft("99.99", Some(Category::BillsAndUtilities), "power");

    ledger.submit(&mut d).unwrap();

    assert!(d.is_empty());
    assert_eq!(d, Draft::default());
}

#[test]
fn length_counts_only_complete_submissions() {
    let mut ledger = Ledger::new();
    let attempts = [
        ("1", Some(Category::Shopping)),
        ("", Some(Category::Shopping)),
        ("2", None),
        ("3.5", Some(Category::Others)),
        ("", None),
        ("4,75", Some(Category::FoodAndDining)),
    ];

    let mut accepted = 0;
    for (amount, category) in attempts {
        let mut d = draft(amount, category, "");
        if ledger.submit(&mut d).is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 3);
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.total(), MoneyCents::new(100 + 350 + 475));
    assert_eq!(
        ledger.get(0).map(|e| e.category()),
        Some(Category::FoodAndDining)
    );
}
