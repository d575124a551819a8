use std::{string::String, vec::Vec};

use crate::{
    Decoder, DecoderOptions, ParseError, PermissiveTokenizer, Shape, TokenizeError,
};

fn pull_all_function(text: &str) -> Vec<(String, String)> {
    let mut message = Decoder::new().parse(text).unwrap();
    let (mut topic, mut value) = ([0u8; 96], [0u8; 256]);
    let mut pairs = Vec::new();
    while let Some(pair) = message.pull_function(&mut topic, &mut value).unwrap() {
        pairs.push((pair.topic.into(), pair.value.into()));
    }
    pairs
}

fn pull_all_node(text: &str) -> Vec<(String, String)> {
    let mut message = Decoder::new().parse(text).unwrap();
    let (mut topic, mut value) = ([0u8; 96], [0u8; 256]);
    let mut pairs = Vec::new();
    while let Some(pair) = message.pull_node(&mut topic, &mut value).unwrap() {
        pairs.push((pair.topic.into(), pair.value.into()));
    }
    pairs
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(t, v)| ((*t).into(), (*v).into()))
        .collect()
}

#[test]
fn function_message_flattens_in_order() {
    let text = r#"{"f": {"water_meter/1": {"litres": 123, "direction": 1, "tamper": 0}}}"#;
    assert_eq!(
        pull_all_function(text),
        owned(&[
            ("water_meter/1/litres", "123"),
            ("water_meter/1/direction", "1"),
            ("water_meter/1/tamper", "0"),
        ])
    );
}

#[test]
fn node_message_uses_bare_keys() {
    let text = r#"{"n": {"battv": 3123, "uptime": 12345}}"#;
    assert_eq!(
        pull_all_node(text),
        owned(&[("battv", "3123"), ("uptime", "12345")])
    );
}

#[test]
fn exhaustion_is_idempotent() {
    let mut message = Decoder::new().parse(r#"{"n": {"a": 1}}"#).unwrap();
    let (mut topic, mut value) = ([0u8; 32], [0u8; 32]);
    assert!(message.pull_node(&mut topic, &mut value).unwrap().is_some());
    for _ in 0..3 {
        assert!(message.pull_node(&mut topic, &mut value).unwrap().is_none());
    }
}

#[test]
fn produced_count_equals_dictionary_child_count() {
    let text = r#"{"n": {"a": 1, "b": 2, "c": 3, "d": 4, "e": 5}}"#;
    let message = Decoder::new().parse(text).unwrap();
    assert_eq!(message.shape(), Shape::Node { root: 2 });
    assert_eq!(pull_all_node(text).len(), 5);
}

#[test]
fn unrecognized_shape_exhausts_both_cursors() {
    let mut message = Decoder::new().parse(r#"{"s": {"state": on}}"#).unwrap();
    assert_eq!(message.shape(), Shape::Unrecognized);
    let (mut topic, mut value) = ([0u8; 32], [0u8; 32]);
    assert!(message.pull_function(&mut topic, &mut value).unwrap().is_none());
    assert!(message.pull_node(&mut topic, &mut value).unwrap().is_none());
}

#[test]
fn wrong_shape_pull_is_exhausted_not_an_error() {
    let mut message = Decoder::new()
        .parse(r#"{"f": {"m/1": {"a": 1}}}"#)
        .unwrap();
    let (mut topic, mut value) = ([0u8; 32], [0u8; 32]);
    assert!(message.pull_node(&mut topic, &mut value).unwrap().is_none());
    assert!(message.pull_function(&mut topic, &mut value).unwrap().is_some());
}

#[test]
fn nested_values_flatten_as_canonical_text() {
    let text = r#"{"f": {"hvac/2": {"cfg": {"mode": eco, "setpoints": [20, 22]}, "on": true}}}"#;
    assert_eq!(
        pull_all_function(text),
        owned(&[
            ("hvac/2/cfg", "{\"mode\": \"eco\",\"setpoints\": [20,22]}"),
            ("hvac/2/on", "true"),
        ])
    );
}

#[test]
fn omitted_attribute_value_yields_null() {
    let text = r#"{"n": {"a": 1, "b"}}"#;
    assert_eq!(pull_all_node(text), owned(&[("a", "1"), ("b", "null")]));
}

#[test]
fn bare_word_values_come_back_quoted() {
    let text = r#"{"n": {"state": on, "count": -7}}"#;
    assert_eq!(
        pull_all_node(text),
        owned(&[("state", "\"on\""), ("count", "-7")])
    );
}

#[test]
fn tokenizer_seam_accepts_an_explicit_implementation() {
    let decoder: Decoder<PermissiveTokenizer, 32> =
        Decoder::with_tokenizer(PermissiveTokenizer, DecoderOptions::default());
    let mut message = decoder.parse(r#"{"n": {"a": 1}}"#).unwrap();
    let (mut topic, mut value) = ([0u8; 32], [0u8; 32]);
    let pair = message.pull_node(&mut topic, &mut value).unwrap().unwrap();
    assert_eq!((pair.topic, pair.value), ("a", "1"));
}

#[test]
fn custom_topic_separator() {
    let decoder = Decoder::new().with_options(DecoderOptions {
        topic_separator: '.',
    });
    let mut message = decoder.parse(r#"{"f": {"meter": {"a": 1}}}"#).unwrap();
    let (mut topic, mut value) = ([0u8; 32], [0u8; 32]);
    let pair = message.pull_function(&mut topic, &mut value).unwrap().unwrap();
    assert_eq!(pair.topic, "meter.a");
}

#[test]
fn fresh_buffers_between_pulls_are_fine() {
    let text = r#"{"f": {"m/1": {"a": 1, "b": 2}}}"#;
    let mut message = Decoder::new().parse(text).unwrap();
    let mut pairs = Vec::new();
    for _ in 0..2 {
        let (mut topic, mut value) = ([0u8; 32], [0u8; 32]);
        let pair = message.pull_function(&mut topic, &mut value).unwrap().unwrap();
        pairs.push((String::from(pair.topic), String::from(pair.value)));
    }
    assert_eq!(pairs, owned(&[("m/1/a", "1"), ("m/1/b", "2")]));
}

#[test]
fn empty_attribute_dictionary_is_immediately_exhausted() {
    let mut message = Decoder::new().parse(r#"{"n": {}}"#).unwrap();
    let (mut topic, mut value) = ([0u8; 32], [0u8; 32]);
    assert!(message.pull_node(&mut topic, &mut value).unwrap().is_none());
}

#[test]
fn blank_input_is_empty_not_overflow() {
    assert_eq!(Decoder::new().parse("").unwrap_err(), ParseError::Empty);
    assert_eq!(Decoder::new().parse("  \n ").unwrap_err(), ParseError::Empty);
}

#[test]
fn oversized_message_reports_token_overflow() {
    let decoder = Decoder::<PermissiveTokenizer, 4>::default();
    assert_eq!(
        decoder.parse(r#"{"n": {"a": 1, "b": 2}}"#).unwrap_err(),
        ParseError::Tokenize(TokenizeError::TokenOverflow)
    );
}

#[test]
fn token_count_reports_populated_records() {
    let message = Decoder::new().parse(r#"{"n": {"a": 1}}"#).unwrap();
    assert_eq!(message.token_count(), 5);
}
