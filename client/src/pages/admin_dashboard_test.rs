use super::*;
use crate::state::session::Role;

fn user(id: i64, name: &str) -> UserAccount {
    UserAccount { id, name: name.to_owned(), email: format!("{name}@example.com"), role: Role::Buyer, ..UserAccount::default() }
}

fn payment(id: i64, amount: f64) -> Transaction {
    Transaction {
        id,
        buyer: None,
        seller: None,
        property: None,
        amount,
        transaction_id: format!("TXN-{id}"),
        payment_date: None,
    }
}

#[test]
fn blank_reason_is_none() {
    assert_eq!(normalize_reason("   "), None);
    assert_eq!(normalize_reason(" Blurry photos "), Some("Blurry photos".to_owned()));
}

#[test]
fn find_user_uses_loaded_list() {
    let users = vec![user(1, "asha"), user(2, "ravi")];
    assert_eq!(find_user(&users, 2).map(|u| u.name), Some("ravi".to_owned()));
    assert_eq!(find_user(&users, 9), None);
}

#[test]
fn total_collected_sums_amounts() {
    assert_eq!(total_collected(&[payment(1, 50_000.0), payment(2, 25_000.5)]), 75_000.5);
    assert_eq!(total_collected(&[]), 0.0);
}
