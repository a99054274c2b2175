//! カタログ読み込みモジュール
//!
//! スプレッドシート（xlsx/xls/ods）の先頭行をヘッダーとして読み、
//! 列名を付け替えてからカテゴリ別にグループ化する。
//! 値の検証はしない。

use crate::config::SiteConfig;
use crate::error::{Result, WineSiteError};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use wine_site_common::{CellValue, Catalogue, ColumnMapping, WineEntry};

/// 設定に従ってカタログを読み込む
pub fn load_catalogue(config: &SiteConfig) -> Result<Catalogue> {
    let entries = read_entries(&config.spreadsheet, config.sheet.as_deref(), &config.columns)?;
    let catalogue = Catalogue::group_by(entries, config.category_column())?;
    tracing::info!(
        "カタログ読み込み完了: {}件 / {}カテゴリ",
        catalogue.len(),
        catalogue.category_count()
    );
    Ok(catalogue)
}

/// スプレッドシートの全行を読み込む
pub fn read_entries(
    path: &Path,
    sheet: Option<&str>,
    mapping: &ColumnMapping,
) -> Result<Vec<WineEntry>> {
    let range = read_range(path, sheet)?;
    entries_from_range(&range, mapping)
        .ok_or_else(|| WineSiteError::EmptySheet(path.display().to_string()))
}

fn read_range(path: &Path, sheet: Option<&str>) -> Result<Range<Data>> {
    if !path.exists() {
        return Err(WineSiteError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    tracing::debug!("シート一覧: {:?}", workbook.sheet_names());

    match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(WineSiteError::SheetNotFound(name.to_string()));
            }
            Ok(workbook.worksheet_range(name)?)
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| WineSiteError::SheetNotFound(path.display().to_string()))?
            .map_err(WineSiteError::from),
    }
}

/// セル範囲からレコードを組み立てる（ヘッダー行がなければ None）
pub fn entries_from_range(range: &Range<Data>, mapping: &ColumnMapping) -> Option<Vec<WineEntry>> {
    let mut rows = range.rows();
    let header_row = rows.next()?;

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| header_name(i, cell))
        .collect();
    let headers = mapping.apply_unique(&headers);
    tracing::debug!("ヘッダー: {:?}", headers);

    let entries = rows
        .map(|row| WineEntry::from_row(&headers, row.iter().map(cell_value)))
        .collect();
    Some(entries)
}

/// 日付セルの文字列表現
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 空のヘッダーには位置から名前を付ける
fn header_name(index: usize, cell: &Data) -> String {
    match cell_value(cell) {
        CellValue::Empty => format!("Unnamed: {}", index),
        value => value.to_string(),
    }
}

/// calamine のセル値を変換（空セルは空文字列）
pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from(s.as_str()),
        Data::Int(n) => CellValue::Int(*n),
        Data::Float(f) => CellValue::from_number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if !dt.is_duration() => match dt.as_datetime() {
            Some(datetime) => CellValue::Text(datetime.format(DATETIME_FORMAT).to_string()),
            None => CellValue::from(cell.to_string()),
        },
        // DateTimeIso / DurationIso / エラー値は文字列のまま
        other => CellValue::from(other.to_string()),
    }
}
