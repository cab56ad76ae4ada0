//! Ledger engine for shared group expenses.
//!
//! The core is two pure functions:
//!
//! - [`compute_balances`] turns members, expenses and settlements into one
//!   rounded balance per member;
//! - [`suggest_settlements`] turns those balances into a short list of
//!   transfers that settle everybody up.
//!
//! Both share the rounding and tolerance rules in [`policy`]. [`Engine`] is
//! an in-memory store of groups that feeds the ledger consistent snapshots.
//!
//! ```rust
//! use engine::{Member, Settlement, compute_balances, suggest_settlements};
//! use uuid::Uuid;
//!
//! let group_id = Uuid::new_v4();
//! let alice = Member::new("Alice".to_string(), group_id);
//! let bob = Member::new("Bob".to_string(), group_id);
//! let loan = Settlement::new(group_id, alice.id, bob.id, 20.0).unwrap();
//!
//! let balances = compute_balances(&[alice.clone(), bob.clone()], &[], &[loan]).unwrap();
//! let plan = suggest_settlements(&balances);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].from_id, bob.id);
//! assert_eq!(plan[0].amount.to_string(), "20.00");
//! ```

pub use error::EngineError;
pub use expenses::{Expense, ExpenseCmd, ExpenseShare, Split, SplitType};
pub use groups::{Group, MemberBalance, Transfer};
pub use ledger::{Balance, compute_balances};
pub use members::Member;
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder, GroupSummary, WithMembers};
pub use settlements::Settlement;
pub use simplify::{SuggestedSettlement, suggest_settlements};

mod error;
mod expenses;
mod groups;
mod ledger;
mod members;
mod money;
mod ops;
pub mod policy;
mod settlements;
mod simplify;

type ResultEngine<T> = Result<T, EngineError>;
