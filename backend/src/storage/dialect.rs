//! SQL differences between the two supported backends, and the schema DDL
//! built from them.

pub const TRANSACTIONS_TABLE: &str = "transacoes";
pub const PAYABLES_TABLE: &str = "contas_a_pagar";

/// Column list of `transacoes`, in storage order
pub const TRANSACTION_COLUMNS: &str = "id, data, tipo, categoria, valor, descricao";
/// Column list of `contas_a_pagar`, in storage order
pub const PAYABLE_COLUMNS: &str = "id, data_vencimento, categoria, valor, descricao, status";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Postgres,
}

impl Dialect {
    /// Bind parameter marker for the 1-based parameter `index`
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Dialect::Sqlite => "?".to_string(),
            Dialect::Postgres => format!("${}", index),
        }
    }

    /// Auto-increment primary key column type
    pub fn id_column(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
            // BIGSERIAL so ids decode as i64 on both backends
            Dialect::Postgres => "BIGSERIAL PRIMARY KEY",
        }
    }

    /// Amount column type; must decode as f64
    pub fn amount_column(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "REAL",
            Dialect::Postgres => "DOUBLE PRECISION",
        }
    }

    /// `transacoes` columns as selected. Postgres tables created as
    /// `SERIAL`/`REAL` are widened so rows always decode as i64/f64.
    pub fn transaction_select_columns(&self) -> &'static str {
        match self {
            Dialect::Sqlite => TRANSACTION_COLUMNS,
            Dialect::Postgres => {
                "id::BIGINT AS id, data, tipo, categoria, valor::DOUBLE PRECISION AS valor, descricao"
            }
        }
    }

    /// `contas_a_pagar` columns as selected, widened like the transaction columns
    pub fn payable_select_columns(&self) -> &'static str {
        match self {
            Dialect::Sqlite => PAYABLE_COLUMNS,
            Dialect::Postgres => {
                "id::BIGINT AS id, data_vencimento, categoria, valor::DOUBLE PRECISION AS valor, descricao, status"
            }
        }
    }

    /// Suffix that makes an INSERT hand back the new id, if the backend needs one
    pub fn returning_id(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "",
            Dialect::Postgres => " RETURNING id::BIGINT",
        }
    }

    pub fn create_table_statements(&self) -> [String; 2] {
        [
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS {} (
                    id {},
                    data VARCHAR(20),
                    tipo VARCHAR(20),
                    categoria VARCHAR(100),
                    valor {},
                    descricao TEXT
                );
                "#,
                TRANSACTIONS_TABLE,
                self.id_column(),
                self.amount_column()
            ),
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS {} (
                    id {},
                    data_vencimento VARCHAR(20),
                    categoria VARCHAR(100),
                    valor {},
                    descricao TEXT,
                    status VARCHAR(20)
                );
                "#,
                PAYABLES_TABLE,
                self.id_column(),
                self.amount_column()
            ),
        ]
    }

    pub fn drop_table_statements(&self) -> [String; 2] {
        [
            format!("DROP TABLE IF EXISTS {}", TRANSACTIONS_TABLE),
            format!("DROP TABLE IF EXISTS {}", PAYABLES_TABLE),
        ]
    }
}
