pub mod category_mapper;
pub mod payable_mapper;
pub mod transaction_mapper;

pub use category_mapper::CategoryPlanMapper;
pub use payable_mapper::PayableMapper;
pub use transaction_mapper::TransactionMapper;
