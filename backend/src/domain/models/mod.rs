pub mod payable;
pub mod transaction;

pub use payable::{NewPayable, Payable, PayableStatus, PAYMENT_SUFFIX};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
