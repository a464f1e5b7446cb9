use rust_xlsxwriter::Workbook;

use super::{ImportError, EMAIL_COLUMN, SDT_COLUMN, XACMINH_COLUMN};

/// Example rows shipped with both templates. They must stay importable: a
/// round-tripped template has to validate cleanly.
const EXAMPLE_ROWS: [[&str; 3]; 3] = [
    ["nguyenvana@gmail.com", "0912345678", "no"],
    ["tranthib@gmail.com", "0987654321", "yes"],
    ["levanc@gmail.com", "", "no"],
];

/// The downloadable CSV template with the contract header and three example
/// rows. None of the cells need quoting, so plain line assembly is enough.
pub fn csv_template() -> String {
    let mut out = format!("{},{},{}\n", EMAIL_COLUMN, SDT_COLUMN, XACMINH_COLUMN);
    for row in EXAMPLE_ROWS {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// The downloadable XLSX template, same logical content as the CSV one.
pub fn xlsx_template() -> Result<Vec<u8>, ImportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("CuTri")?;

    for (col, header) in [EMAIL_COLUMN, SDT_COLUMN, XACMINH_COLUMN]
        .into_iter()
        .enumerate()
    {
        worksheet.write_string(0, col as u16, header)?;
    }
    for (row, cells) in EXAMPLE_ROWS.into_iter().enumerate() {
        for (col, cell) in cells.into_iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
