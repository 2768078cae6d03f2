use crate::domain::models::Transaction as DomainTransaction;
use shared::Transaction as SharedTransaction;

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id,
            date: domain.date,
            kind: domain.kind,
            category: domain.category,
            amount: domain.amount,
            description: domain.description,
        }
    }
}
