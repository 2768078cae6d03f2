use crate::domain::categories::CategoryPlan as DomainCategoryPlan;
use shared::CategoryPlan as SharedCategoryPlan;

pub struct CategoryPlanMapper;

impl CategoryPlanMapper {
    pub fn to_dto(domain: &DomainCategoryPlan) -> SharedCategoryPlan {
        SharedCategoryPlan {
            entrada: domain.income.clone(),
            saida: domain.expense.clone(),
        }
    }
}
