//! デモ用スプレッドシート生成
//!
//! ロシア語ヘッダーのカタログを書き出す。実データがなくても
//! `wine-site sample && wine-site` で一通り試せるようにするためのもの。

use crate::error::Result;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use wine_site_common::columns::RUSSIAN_HEADERS;

/// (名前, 品種, 価格, カテゴリ, 画像, 特売)
pub const SAMPLE_WINES: &[(&str, &str, f64, &str, &str, &str)] = &[
    ("Изабелла", "Изабелла", 350.0, "Белые вина", "images/izabelle.png", ""),
    ("Гранатовый браслет", "Мускат розовый", 350.0, "Напитки", "images/granat.png", ""),
    ("Шардоне", "Шардоне", 350.0, "Белые вина", "images/shardone.png", ""),
    ("Белая леди", "Дамский пальчик", 399.0, "Белые вина", "images/belaya_ledi.png", "Выгодное предложение"),
    ("Ркацители", "Ркацители", 499.0, "Белые вина", "images/rkaciteli.png", ""),
    ("Черный лекарь", "Качич", 399.0, "Красные вина", "images/chernyi_lekar.png", ""),
    ("Хванчкара", "Александраули", 550.0, "Красные вина", "images/hvanchkara.png", ""),
    ("Киндзмараули", "Саперави", 550.0, "Красные вина", "images/kindzmarauli.png", ""),
    ("Коктейль Семь Я", "", 200.0, "Напитки", "images/koktejl.png", "Выгодное предложение"),
    ("Кокур", "Кокур", 450.0, "Белые вина", "images/kokur.png", ""),
    ("Ркацители & Мускат", "Ркацители", 430.0, "Белые вина", "images/rkaciteli_muskat.png", ""),
];

/// サンプルを書き出す（ヘッダーは RUSSIAN_HEADERS の順）
pub fn write_sample(path: &Path) -> Result<usize> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, (header, _)) in RUSSIAN_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, (name, grape, cost, category, image, offer)) in SAMPLE_WINES.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, *name)?;
        // 空文字列は書かない（空セルとして残す）
        if !grape.is_empty() {
            worksheet.write_string(row, 1, *grape)?;
        }
        worksheet.write_number(row, 2, *cost)?;
        worksheet.write_string(row, 3, *category)?;
        worksheet.write_string(row, 4, *image)?;
        if !offer.is_empty() {
            worksheet.write_string(row, 5, *offer)?;
        }
    }

    workbook.save(path)?;
    tracing::debug!("サンプル出力: {} ({}件)", path.display(), SAMPLE_WINES.len());
    Ok(SAMPLE_WINES.len())
}
