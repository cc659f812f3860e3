//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use pseudo_vertical::config::WritingConfig;
use pseudo_vertical::model::{AppModel, ObjectKind, Scene, TextObject};

/// Full-width padding as a string, for building expected output
pub const PAD: &str = "\u{3000}";

/// Texts used for property checks (no trailing padding inside lines)
pub const SAMPLES: &[&str] = &[
    "",
    "X",
    "AB\nC",
    "C\nAB",
    "a\n\nb",
    "\nabc",
    "one\ntwo\nthree\nfour",
    "縦書き\nテスト",
    "吾輩は猫である。\n名前はまだ無い。\nどこで生れたかとんと見当がつかぬ。",
    "mixed 漢字 and ascii\n  indented\n",
    "a\u{3000}b\nc",
];

/// Create a model with one `Font` object per body, all selected
pub fn test_model(bodies: &[&str]) -> AppModel {
    let mut scene = Scene::new();
    for (i, body) in bodies.iter().enumerate() {
        scene.add_object(TextObject::font(format!("Text.{:03}", i), *body));
    }
    scene.select_all();
    AppModel::new(scene, WritingConfig::default())
}

/// Add a non-text object and select it
pub fn add_mesh(model: &mut AppModel, name: &str) -> usize {
    let index = model
        .scene
        .add_object(TextObject::other(name, ObjectKind::Mesh));
    model.scene.select(index);
    index
}

/// Column count and per-column length of a vertical text
pub fn column_shape(vertical: &str) -> (usize, Vec<usize>) {
    let body = vertical
        .strip_suffix('\n')
        .expect("vertical text ends with marker");
    if body.is_empty() {
        return (0, Vec::new());
    }
    let lens: Vec<usize> = body.split('\n').map(|c| c.chars().count()).collect();
    (lens.len(), lens)
}
