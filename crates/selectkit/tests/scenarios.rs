//! End-to-end behavior of the select widget through its signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use serde_json::{Value, json};

use selectkit::prelude::*;
use selectkit::{OptionView, Select};

fn setup() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn two_options() -> Vec<OptionRecord> {
    vec![
        OptionRecord::value_text("Value1", "Text1"),
        OptionRecord::value_text("Value2", "Text2"),
    ]
}

/// Records every `input` payload as JSON.
fn inputs(select: &Select) -> Arc<Mutex<Vec<Value>>> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    select.input.connect(move |value| {
        received_clone.lock().push(value.to_json());
    });
    received
}

fn counter(signal: &Signal<()>) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    signal.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn defaults_render_closed_and_empty() {
    setup();
    let select = Select::new(two_options());
    let view = select.view();

    assert_eq!(view.icon.token(), "chevron-down");
    assert_eq!(view.label, "");
    assert!(view.content_hidden);
    assert!(!view.borderless);
    assert_eq!(view.size, Size::Big);
}

#[test]
fn size_and_borderless_are_presentation_only() {
    setup();
    let select = Select::new(two_options())
        .with_size(Size::Small)
        .with_borderless(true)
        .with_placeholder("placeholder");
    let view = select.view();

    assert_eq!(view.size.as_str(), "small");
    assert!(view.borderless);
    assert_eq!(view.label, "placeholder");

    let inputs = inputs(&select);
    select.click_option(0);
    assert_eq!(*inputs.lock(), vec![json!("Value1")]);
}

#[test]
fn clicking_trigger_opens_content() {
    setup();
    let select = Select::new(two_options()).with_placeholder("placeholder");

    select.click_trigger();
    let view = select.view();
    assert_eq!(view.icon.token(), "chevron-up");
    assert!(!view.content_hidden);
}

#[test]
fn closing_open_select_emits_blur_once() {
    setup();
    let select = Select::new(two_options());
    let blurs = counter(&select.blurred);

    select.click_trigger(); // open select
    select.click_trigger(); // close select

    assert!(!select.is_open());
    assert_eq!(blurs.load(Ordering::SeqCst), 1);
}

#[test]
fn checkbox_mode_renders_a_checkbox_per_option() {
    setup();
    let select = Select::new(two_options()).with_checkbox(true);
    let view = select.view();

    assert!(view.show_checkboxes);
    assert_eq!(view.options.iter().filter(|o| o.checkbox.is_some()).count(), 2);
    assert_eq!(view.options[1].text, "Text2");
}

#[test]
fn search_mode_renders_search_input() {
    setup();
    let view = Select::new(two_options()).with_search(true).view();
    assert!(view.show_search);
}

#[test]
fn disabled_option_is_marked_and_inert() {
    setup();
    let select = Select::new(vec![
        OptionRecord::value_text("Value1", "Text1"),
        OptionRecord::value_text("Value2", "Text2").with_disabled(true),
        OptionRecord::value_text("Value3", "Text3"),
    ])
    .with_checkbox(true);
    let inputs = inputs(&select);

    let view = select.view();
    let row: &OptionView = &view.options[1];
    assert!(row.row_disabled);
    assert!(row.label_disabled);
    assert!(row.checkbox.is_some_and(|c| c.disabled));

    select.click_option(1);
    assert!(inputs.lock().is_empty());
}

#[test]
fn custom_keys_drive_text_and_value() {
    setup();
    let options = vec![
        OptionRecord::from([("id", "id1"), ("name", "name1")]),
        OptionRecord::from([("id", "id2"), ("name", "name2")]),
        OptionRecord::from([("id", "id3"), ("name", "name3")]),
    ];
    let select = Select::new(options).with_keys("id", "name");
    let inputs = inputs(&select);

    assert_eq!(select.view().options[0].text, "name1");
    select.click_option(2);
    assert_eq!(*inputs.lock(), vec![json!("id3")]);
}

#[test]
fn multi_select_scenario_with_disabled_option() {
    setup();
    let select = Arc::new(
        Select::new(vec![
            OptionRecord::value_text("V1", "T1"),
            OptionRecord::value_text("V2", "T2").with_disabled(true),
        ])
        .with_checkbox(true)
        .with_value(SelectValue::Multiple(vec![])),
    );
    select.bind_model();
    let inputs = inputs(&select);

    select.click_option(0);
    assert_eq!(select.value().to_json(), json!(["V1"]));

    select.click_option(1);
    assert_eq!(select.value().to_json(), json!(["V1"]));

    select.click_option(0);
    assert_eq!(select.value().to_json(), json!([]));

    assert_eq!(*inputs.lock(), vec![json!(["V1"]), json!([])]);
}

#[test]
fn reducer_output_is_stored_in_click_order() {
    setup();
    let reduce = |option: &OptionRecord| json!({ "asd": format!("{}reduced", option.text("value")) });
    let select = Arc::new(
        Select::new(two_options())
            .with_checkbox(true)
            .with_value(SelectValue::Multiple(vec![]))
            .with_reducer(reduce),
    );
    select.bind_model();

    let options = two_options();
    select.click_option(0);
    assert!(select.value().contains(&reduce(&options[0])));

    select.click_option(1);
    assert_eq!(
        select.value(),
        SelectValue::multiple([reduce(&options[0]), reduce(&options[1])])
    );

    let view = select.view();
    assert!(view.value_text.contains("Text1"));
    assert!(view.value_text.contains("Text2"));
}

#[test]
fn clear_in_single_mode_emits_null_and_clear() {
    setup();
    let select = Select::new(two_options())
        .with_value("Value1")
        .with_clear_button(true);
    let inputs = inputs(&select);
    let clears = counter(&select.cleared);

    assert!(select.view().show_clear_button);
    select.click_clear();

    assert_eq!(*inputs.lock(), vec![Value::Null]);
    assert_eq!(clears.load(Ordering::SeqCst), 1);
}

#[test]
fn clear_in_multi_mode_emits_empty_list_and_clear() {
    setup();
    let select = Select::new(two_options())
        .with_value(SelectValue::multiple(["Value1"]))
        .with_checkbox(true)
        .with_clear_button(true);
    let inputs = inputs(&select);
    let clears = counter(&select.cleared);

    select.click_clear();

    assert_eq!(*inputs.lock(), vec![json!([])]);
    assert_eq!(clears.load(Ordering::SeqCst), 1);
}

#[test]
fn disabled_select_has_no_clear_button() {
    setup();
    let select = Select::new(two_options())
        .with_value(SelectValue::multiple(["Value1"]))
        .with_checkbox(true)
        .with_clear_button(true)
        .with_disabled(true);
    let inputs = inputs(&select);
    let clears = counter(&select.cleared);

    assert!(!select.view().show_clear_button);
    select.click_clear();

    assert!(inputs.lock().is_empty());
    assert_eq!(clears.load(Ordering::SeqCst), 0);
}

#[test]
fn props_json_builds_equivalent_select() {
    setup();
    let props = SelectProps::from_json(
        r#"{
            "options": [
                {"value": "Value1", "text": "Text1"},
                {"value": "Value2", "text": "Text2"}
            ],
            "value": ["Value1"],
            "isCheckbox": true,
            "showClearButton": true,
            "disable": true
        }"#,
    )
    .unwrap();
    let select = Select::from_props(props);
    let view = select.view();

    assert!(view.show_checkboxes);
    assert!(view.disabled);
    assert!(!view.show_clear_button);
    assert_eq!(view.label, "Text1");
}

#[test]
fn debug_tree_lists_rows() {
    setup();
    let select = Select::new(two_options()).with_value("Value2");
    let output = select
        .view()
        .format_tree(selectkit_core::TreeFormatOptions::default());

    assert!(output.starts_with("Text2 icon=chevron-down open=false"));
    assert!(output.contains("Text1 value=\"Value1\" selected=false"));
    assert!(output.contains("Text2 value=\"Value2\" selected=true"));
}

#[test]
fn keyless_option_click_proposes_null() {
    setup();
    let select = Arc::new(
        Select::new(vec![
            OptionRecord::from([("id", "id1"), ("text", "T1")]),
            OptionRecord::value_text("Value2", "Text2"),
        ])
        .with_placeholder("placeholder")
        .with_value("Value2"),
    );
    select.bind_model();
    let inputs = inputs(&select);

    select.click_option(0);

    assert_eq!(*inputs.lock(), vec![Value::Null]);
    assert_eq!(select.value(), SelectValue::Empty);
    let view = select.view();
    assert!(!view.has_value);
    assert_eq!(view.label, "placeholder");
}

#[test]
fn empty_string_option_never_shows_selected() {
    setup();
    let select = Arc::new(
        Select::new(vec![
            OptionRecord::value_text("", "None"),
            OptionRecord::value_text("Value1", "Text1"),
        ])
        .with_placeholder("placeholder"),
    );
    select.bind_model();

    select.click_option(0);
    let view = select.view();
    assert_eq!(view.label, "placeholder");
    assert!(view.option_by_text("None").is_some_and(|o| !o.selected));

    let reparsed: SelectValue = serde_json::from_value(select.value().to_json()).unwrap();
    assert_eq!(reparsed, select.value());
}

#[test]
fn multi_click_on_keyless_option_emits_nothing() {
    setup();
    let select = Select::new(vec![OptionRecord::from([("name", "n1")])])
        .with_checkbox(true)
        .with_value(SelectValue::Multiple(vec![]));
    let inputs = inputs(&select);

    select.click_option(0);
    assert!(inputs.lock().is_empty());
}

#[test]
fn unbind_model_stops_committing() {
    setup();
    let select = Arc::new(Select::new(two_options()));
    let id = select.bind_model();

    select.click_option(0);
    assert_eq!(select.value(), SelectValue::from("Value1"));

    assert!(select.unbind_model(id));
    assert!(!select.unbind_model(id));

    select.click_option(1);
    assert_eq!(select.value(), SelectValue::from("Value1"));
}
