#![allow(dead_code)]

use oxide_markup::{Builder, DataSource, FormData, MarkupError};
use serde_json::json;

/// A data source with one value of every kind the controls use.
pub fn fixture() -> FormData {
    FormData::from_json(json!({
        "a_button": "Push Me",
        "a_checkbox1": { "2": "saab", "4": "audi" },
        "a_checkbox2": ["saab", "mercedes"],
        "a_checkbox3": "volvo,mercedes",
        "a_color": "#00FF00",
        "a_date1": "2017-06-01",
        "a_date2": "2017-07-02",
        "an_email": "mike@czarmail.com",
        "a_hidden": "hidden_data",
        "a_month": "2017-06",
        "a_number": "3",
        "a_password": "fricken-password",
        "a_radio": "saab",
        "a_range": 2,
        "a_search": "search for this",
        "a_select": "audi",
        "a_tel": "951-929-2015",
        "a_text": "This is just scat.",
        "a_textarea1": "Text for area 1.",
        "a_textarea2": "More text for area 2.\nThis text has multiple lines.",
        "a_textarea4": "Line 1",
        "a_time": "23:24",
        "a_url": "https://www.czarmail.com",
        "a_week": "2018-W03",
        "an_empty": "",
        "errors": {},
    }))
    .unwrap_or_else(|e| panic!("Invalid fixture: {e}"))
}

/// Runs `calls` against a fresh builder and returns the compact output.
pub fn compact<F>(source: Option<&dyn DataSource>, calls: F) -> String
where
    F: FnOnce(&mut Builder<'_>) -> oxide_markup::Result<()>,
{
    let mut b = Builder::with_user(source, ());
    calls(&mut b).unwrap_or_else(|e| panic!("Failed to build: {e}"));
    b.compact()
}

/// Runs `calls` against a fresh builder and returns the error it raises.
pub fn build_err<F>(source: Option<&dyn DataSource>, calls: F) -> MarkupError
where
    F: FnOnce(&mut Builder<'_>) -> oxide_markup::Result<()>,
{
    let mut b = Builder::with_user(source, ());
    calls(&mut b).expect_err("Expected the calls to fail")
}
