use crate::domain::models::Payable as DomainPayable;
use shared::Payable as SharedPayable;

pub struct PayableMapper;

impl PayableMapper {
    pub fn to_dto(domain: DomainPayable) -> SharedPayable {
        SharedPayable {
            id: domain.id,
            due_date: domain.due_date,
            category: domain.category,
            amount: domain.amount,
            description: domain.description,
            status: domain.status,
        }
    }
}
