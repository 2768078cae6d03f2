//! The chart of accounts ("Plano de Contas") offered in the entry forms.
//! Loaded once per process and never mutated.

use once_cell::sync::Lazy;

use crate::domain::models::TransactionKind;

const INCOME_CATEGORIES: &[&str] = &[
    "1. Receitas",
    "1.1 Fretes / Transportes",
    "1.2 Redespacho",
    "1.3 Armazenagem",
    "1.4 Venda de Ativos",
];

const EXPENSE_CATEGORIES: &[&str] = &[
    "2. Custos Variáveis (Veículo)",
    "2.1 Combustível",
    "2.2 Manutenção Preventiva",
    "2.3 Manutenção Corretiva",
    "2.4 Pneus",
    "2.5 Pedágio / Estacionamento",
    "2.6 Sinistro / Franquia ",
    "2.7 Diárias / Alimentação Motorista",
    "2.8 Custo com Agregados / Terceiros",
    "3. Custos Fixos (Operacional)",
    "3.1 Folha de Pagamento",
    "3.2 Encargos sobre a Folha de Pagamento",
    "3.3 Seguros",
    "3.4 Monitoramento / Rastreamento",
    "3.5 Documentação Frota",
    "3.6 Aluguel de Frota",
    "4. Despesas Administrativas",
    "4.1 Energia Elétrica",
    "4.2 Água e Esgoto",
    "4.3 Internet",
    "4.4 Telefonia Fixa / Móvel",
    "4.5 Softwares e Sistemas",
    "4.6 Contabilidade",
    "4.7 Tarifas Bancárias",
    "4.8 Pro-Labore",
    "4.9 Encargos sobre o Pro-Labore",
    "4.10 Material de Escritorio",
    "4.11 Material de Limpeza",
    "4.12 Brindes / Patricionios",
    "4.13 Outras Despesas Administrativas",
    "4.14 Salários Administrativos",
    "5. Impostos",
    "5.1 Simples Nacional",
    "6. Investimentos",
    "6.1 Pgto. Emprestimos / Financiamentos",
    "6.2 Reserva de Emergência",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPlan {
    pub income: Vec<String>,
    pub expense: Vec<String>,
}

impl CategoryPlan {
    pub fn for_kind(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    pub fn contains(&self, kind: TransactionKind, category: &str) -> bool {
        self.for_kind(kind).iter().any(|c| c == category)
    }

    pub fn contains_any(&self, category: &str) -> bool {
        self.income.iter().chain(self.expense.iter()).any(|c| c == category)
    }
}

static CATEGORY_PLAN: Lazy<CategoryPlan> = Lazy::new(|| CategoryPlan {
    income: INCOME_CATEGORIES.iter().map(|c| c.to_string()).collect(),
    expense: EXPENSE_CATEGORIES.iter().map(|c| c.to_string()).collect(),
});

pub fn category_plan() -> &'static CategoryPlan {
    &CATEGORY_PLAN
}
