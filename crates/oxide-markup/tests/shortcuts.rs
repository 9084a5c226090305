//! Tests for the form-control shortcuts.

mod common;
use common::*;

use oxide_markup::{attrs, Attributes, Choices, MarkupError};

const VEHICLES: Choices<'static> = &[
    ("volvo", "Volvo"),
    ("saab", "Saab"),
    ("mercedes", "Mercedes"),
    ("audi", "Audi"),
];

#[test]
fn plain_checkbox() {
    assert_eq!(
        compact(None, |b| b.checkbox("vehicle", &Attributes::new(), VEHICLES)),
        concat!(
            r#"<input name="vehicle[1]" type="checkbox" value="volvo">Volvo</input>"#,
            r#"<input name="vehicle[2]" type="checkbox" value="saab">Saab</input>"#,
            r#"<input name="vehicle[3]" type="checkbox" value="mercedes">Mercedes</input>"#,
            r#"<input name="vehicle[4]" type="checkbox" value="audi">Audi</input>"#,
        )
    );
}

#[test]
fn checkbox_checked_from_mapping() {
    let data = fixture();
    assert_eq!(
        compact(Some(&data), |b| b.checkbox(
            "a_checkbox1",
            &attrs! { "class" => "check_class" },
            VEHICLES
        )),
        concat!(
            r#"<input class="check_class" name="a_checkbox1[1]" type="checkbox" value="volvo">Volvo</input>"#,
            r#"<input class="check_class" name="a_checkbox1[2]" type="checkbox" value="saab" checked="true">Saab</input>"#,
            r#"<input class="check_class" name="a_checkbox1[3]" type="checkbox" value="mercedes">Mercedes</input>"#,
            r#"<input class="check_class" name="a_checkbox1[4]" type="checkbox" value="audi" checked="true">Audi</input>"#,
        )
    );
}

#[test]
fn checkbox_checked_from_list_and_string() {
    let data = fixture();
    for field in ["a_checkbox2", "a_checkbox3"] {
        let html = compact(Some(&data), |b| b.checkbox(field, &attrs! {}, VEHICLES));
        let checked = if field == "a_checkbox2" {
            ["saab", "mercedes"]
        } else {
            ["volvo", "mercedes"]
        };
        assert_eq!(html.matches(r#"checked="true""#).count(), 2);
        for value in checked {
            assert!(html.contains(&format!(r#"value="{value}" checked="true""#)));
        }
    }
}

#[test]
fn plain_radio() {
    assert_eq!(
        compact(None, |b| b.radio("vehicle", &attrs! {}, VEHICLES)),
        concat!(
            r#"<input name="vehicle" type="radio" value="volvo">Volvo</input>"#,
            r#"<input name="vehicle" type="radio" value="saab">Saab</input>"#,
            r#"<input name="vehicle" type="radio" value="mercedes">Mercedes</input>"#,
            r#"<input name="vehicle" type="radio" value="audi">Audi</input>"#,
        )
    );
}

#[test]
fn radio_checked_from_data() {
    let data = fixture();
    let html = compact(Some(&data), |b| {
        b.radio("a_radio", &attrs! { "class" => "radio_class" }, VEHICLES)
    });
    assert!(html.contains(
        r#"<input class="radio_class" name="a_radio" type="radio" value="saab" checked="true">Saab</input>"#
    ));
    assert_eq!(html.matches("checked").count(), 1);
}

#[test]
fn plain_select() {
    assert_eq!(
        compact(None, |b| b.select("vehicle", &attrs! {}, VEHICLES)),
        concat!(
            r#"<select name="vehicle">"#,
            r#"<option value="volvo">Volvo</option>"#,
            r#"<option value="saab">Saab</option>"#,
            r#"<option value="mercedes">Mercedes</option>"#,
            r#"<option value="audi">Audi</option>"#,
            "</select>",
        )
    );
}

#[test]
fn select_marks_bound_option() {
    let data = fixture();
    let html = compact(Some(&data), |b| b.select("a_select", &attrs! {}, VEHICLES));
    assert!(html.contains(r#"<option value="audi" selected="true">Audi</option>"#));
    assert_eq!(html.matches("selected").count(), 1);
}

#[test]
fn submit_with_options() {
    assert_eq!(
        compact(None, |b| b.submit("Go!", &attrs! { "name" => "a_submit" })),
        r#"<input type="submit" value="Go!" name="a_submit" />"#
    );
}

#[test]
fn plain_link() {
    assert_eq!(
        compact(None, |b| b.link(
            "Registration",
            &attrs! { "href" => "registration" },
            &[]
        )),
        r#"<a href="registration">Registration</a>"#
    );
}

#[test]
fn link_with_query() {
    assert_eq!(
        compact(None, |b| b.link(
            "Next",
            &attrs! { "href" => "/items" },
            &[("page", "2")]
        )),
        r#"<a href="/items?page=2">Next</a>"#
    );
}

#[test]
fn link_without_href_fails() {
    let err = build_err(None, |b| b.link("Nowhere", &attrs! { "class" => "x" }, &[]));
    assert!(matches!(err, MarkupError::Shape { .. }));
}
