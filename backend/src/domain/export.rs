//! Spreadsheet export of report rows.
//!
//! Rows are laid out in storage column order under a fixed header and the
//! whole workbook is rendered into memory before being handed back.

use chrono::NaiveDateTime;
use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::domain::models::{Payable, Transaction};
use crate::errors::LedgerResult;

pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const TRANSACTION_HEADER: [&str; 6] = ["ID", "Data", "Tipo", "Categoria", "Valor", "Descrição"];
pub const PAYABLE_HEADER: [&str; 6] = ["ID", "Vencimento", "Categoria", "Valor", "Descrição", "Status"];

const TRANSACTION_SHEET: &str = "Relatório";
const PAYABLE_SHEET: &str = "Relatório Contas a Pagar";
pub const TRANSACTION_FILE_PREFIX: &str = "relatorio";
pub const PAYABLE_FILE_PREFIX: &str = "relatorio_contas";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Integer(i64),
    Number(f64),
    Text(String),
    Empty,
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map(Cell::Text).unwrap_or(Cell::Empty)
    }
}

/// One worksheet worth of data: a header row followed by raw rows
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadsheetTable {
    pub sheet_name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl SpreadsheetTable {
    pub fn new(sheet_name: &str, header: &[&str]) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_transactions(rows: &[Transaction]) -> Self {
        let mut table = Self::new(TRANSACTION_SHEET, &TRANSACTION_HEADER);
        table.rows = rows
            .iter()
            .map(|t| {
                vec![
                    Cell::Integer(t.id),
                    Cell::Text(t.date.clone()),
                    Cell::Text(t.kind.clone()),
                    Cell::Text(t.category.clone()),
                    Cell::Number(t.amount),
                    Cell::from(t.description.clone()),
                ]
            })
            .collect();
        table
    }

    pub fn from_payables(rows: &[Payable]) -> Self {
        let mut table = Self::new(PAYABLE_SHEET, &PAYABLE_HEADER);
        table.rows = rows
            .iter()
            .map(|p| {
                vec![
                    Cell::Integer(p.id),
                    Cell::Text(p.due_date.clone()),
                    Cell::Text(p.category.clone()),
                    Cell::Number(p.amount),
                    Cell::from(p.description.clone()),
                    Cell::Text(p.status.clone()),
                ]
            })
            .collect();
        table
    }
}

/// A rendered workbook ready to be sent as a download
#[derive(Debug, Clone)]
pub struct SpreadsheetFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Rows written, header included
    pub row_count: usize,
}

impl SpreadsheetFile {
    pub fn mime_type(&self) -> &'static str {
        XLSX_MIME_TYPE
    }
}

pub fn export_file_name(prefix: &str, now: NaiveDateTime) -> String {
    format!("{}_{}.xlsx", prefix, now.format("%Y%m%d_%H%M%S"))
}

pub fn to_spreadsheet(table: &SpreadsheetTable, file_prefix: &str, now: NaiveDateTime) -> LedgerResult<SpreadsheetFile> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(table.sheet_name.as_str())?;

    for (col, label) in table.header.iter().enumerate() {
        sheet.write_string(0, col as u16, label.as_str())?;
    }

    for (r, cells) in table.rows.iter().enumerate() {
        let row = (r + 1) as u32;
        for (c, cell) in cells.iter().enumerate() {
            let col = c as u16;
            match cell {
                Cell::Integer(v) => {
                    sheet.write_number(row, col, *v as f64)?;
                }
                Cell::Number(v) => {
                    sheet.write_number(row, col, *v)?;
                }
                Cell::Text(s) => {
                    sheet.write_string(row, col, s.as_str())?;
                }
                Cell::Empty => {}
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    let file = SpreadsheetFile {
        file_name: export_file_name(file_prefix, now),
        bytes,
        row_count: table.rows.len() + 1,
    };
    info!("Rendered {} ({} rows, {} bytes)", file.file_name, file.row_count, file.bytes.len());
    Ok(file)
}
