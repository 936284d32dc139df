use crate::LifeResult;
use calamine::{Data, Range};
use spreadsheet_ods::{Sheet, Value};

/// Header names and numeric columns read from one worksheet.
///
/// Blank cells become `NaN`; reading stops at the first row where every cell is blank.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetColumns {
    pub headers: Vec<String>,
    pub columns: Vec<Vec<f64>>,
}

impl SheetColumns {
    pub fn is_empty(&self) -> bool {
        self.columns.first().is_none_or(|c| c.is_empty())
    }
}

// ========= ODS Using spreadsheet_ods =========

pub fn read_ods_sheet(sheet: &Sheet) -> LifeResult<SheetColumns> {
    let mut headers = Vec::new();
    let mut col = 0;
    loop {
        let header = match sheet.value(0, col) {
            Value::Text(s) if !s.trim().is_empty() => s.trim().to_lowercase(),
            Value::Empty => break,
            Value::Number(f) => f.to_string(),
            _ => String::new(),
        };
        headers.push(header);
        col += 1;
    }

    let ncols = headers.len();
    let columns = collect_rows(ncols, |row, col| {
        let cell = sheet.value(row as u32, col as u32);
        ods_cell_to_f64(cell, row + 1, &headers[col])
    })?;

    Ok(SheetColumns { headers, columns })
}

fn ods_cell_to_f64(cell: &Value, row_num: usize, col_name: &str) -> LifeResult<f64> {
    match cell {
        Value::Number(f) => Ok(*f),
        Value::Empty => Ok(f64::NAN),
        Value::Text(s) if s.trim().is_empty() => Ok(f64::NAN),
        Value::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            format!("Cannot parse {col_name} '{s}' at row {row_num} as number").into()
        }),
        other => Err(format!("Invalid {col_name} cell type {other:?} at row {row_num}").into()),
    }
}

// ========= XLSX - Using Calamine =========

pub fn read_excel_range(range: &Range<Data>) -> LifeResult<SheetColumns> {
    if range.get((0, 0)).is_none() {
        return Err("Header row is empty".into());
    }

    let mut headers = Vec::new();
    let mut col = 0;
    loop {
        match range.get((0, col)) {
            Some(Data::String(s)) if !s.trim().is_empty() => headers.push(s.trim().to_lowercase()),
            Some(Data::Empty) | None => break,
            Some(other) => headers.push(other.to_string()),
        }
        col += 1;
    }

    let ncols = headers.len();
    let columns = collect_rows(ncols, |row, col| {
        excel_cell_to_f64(range.get((row, col)), row + 1, &headers[col])
    })?;

    Ok(SheetColumns { headers, columns })
}

fn excel_cell_to_f64(cell: Option<&Data>, row_num: usize, col_name: &str) -> LifeResult<f64> {
    match cell {
        Some(Data::Float(f)) => Ok(*f),
        Some(Data::Int(v)) => Ok(*v as f64),
        Some(Data::Empty) | None => Ok(f64::NAN),
        Some(Data::String(s)) if s.trim().is_empty() => Ok(f64::NAN),
        Some(Data::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            format!("Cannot parse {col_name} '{s}' at row {row_num} as number").into()
        }),
        Some(other) => {
            Err(format!("Invalid {col_name} cell type {other:?} at row {row_num}").into())
        }
    }
}

// ========= Shared =========

/// Walk data rows (starting below the header) into column vectors.
///
/// A malformed cell is an error rather than a silent `NaN`: a bad bound in a base table
/// would otherwise turn into an open-top bracket.
fn collect_rows<F>(ncols: usize, mut cell: F) -> LifeResult<Vec<Vec<f64>>>
where
    F: FnMut(usize, usize) -> LifeResult<f64>,
{
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); ncols];
    let mut row = 1;

    loop {
        let row_vals = (0..ncols)
            .map(|col| cell(row, col))
            .collect::<LifeResult<Vec<f64>>>()?;

        if row_vals.iter().all(|v| v.is_nan()) {
            break;
        }

        for (column, val) in columns.iter_mut().zip(row_vals) {
            column.push(val);
        }
        row += 1;
    }

    Ok(columns)
}
