//! Field-level validation over raw JSON payloads.
//!
//! Handlers pass the request body in as a JSON object so that per-field type
//! errors are reported as 422 field violations alongside any rule violations,
//! instead of failing the whole body at the deserialization step. All failing
//! fields are collected; validation never stops at the first violation.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

const MISSING: &str = "Missing data for required field.";
const EMPTY: &str = "Must not be empty.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_NUMBER: &str = "Not a valid number.";
const NOT_AN_INTEGER: &str = "Not a valid integer.";
const NOT_A_BOOLEAN: &str = "Not a valid boolean.";

pub const INVALID_PRICE: &str = "Price must be a positive number.";
pub const INVALID_RATING: &str = "Rating must be between 1 and 5.";

/// Violations keyed by field name, each with one or more messages.
/// Serializes as the bare map, which is also the 422 response body.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

/// A fully validated cake create payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCake {
    pub name: String,
    pub flavor: String,
    pub price: f64,
    pub available: bool,
}

/// A validated partial update; `None` means the field was not supplied
/// and must keep its stored value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CakePatch {
    pub name: Option<String>,
    pub flavor: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBakery {
    pub name: String,
    pub location: String,
    pub rating: i32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BakeryPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rating: Option<i32>,
}

pub fn new_cake(body: &Map<String, Value>) -> Result<NewCake, FieldErrors> {
    let mut errors = FieldErrors::default();
    let patch = cake_fields(body, &mut errors);
    require(body, &["name", "flavor", "price"], &mut errors);
    match (patch.name, patch.flavor, patch.price) {
        (Some(name), Some(flavor), Some(price)) if errors.is_empty() => Ok(NewCake {
            name,
            flavor,
            price,
            available: patch.available.unwrap_or(true),
        }),
        _ => Err(errors),
    }
}

pub fn cake_patch(body: &Map<String, Value>) -> Result<CakePatch, FieldErrors> {
    let mut errors = FieldErrors::default();
    let patch = cake_fields(body, &mut errors);
    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

pub fn new_bakery(body: &Map<String, Value>) -> Result<NewBakery, FieldErrors> {
    let mut errors = FieldErrors::default();
    let patch = bakery_fields(body, &mut errors);
    require(body, &["name", "location", "rating"], &mut errors);
    match (patch.name, patch.location, patch.rating) {
        (Some(name), Some(location), Some(rating)) if errors.is_empty() => {
            Ok(NewBakery { name, location, rating })
        }
        _ => Err(errors),
    }
}

pub fn bakery_patch(body: &Map<String, Value>) -> Result<BakeryPatch, FieldErrors> {
    let mut errors = FieldErrors::default();
    let patch = bakery_fields(body, &mut errors);
    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

fn cake_fields(body: &Map<String, Value>, errors: &mut FieldErrors) -> CakePatch {
    let name = take_string(body, "name", errors);
    let flavor = take_string(body, "flavor", errors);
    let price = take_number(body, "price", errors);
    let available = take_bool(body, "available", errors);

    if let Some(price) = price {
        if price < 0.0 {
            errors.push("price", INVALID_PRICE);
        }
    }

    CakePatch { name, flavor, price, available }
}

fn bakery_fields(body: &Map<String, Value>, errors: &mut FieldErrors) -> BakeryPatch {
    let name = take_string(body, "name", errors);
    let location = take_string(body, "location", errors);
    let rating = take_integer(body, "rating", errors);

    if let Some(rating) = rating {
        if !(1..=5).contains(&rating) {
            errors.push("rating", INVALID_RATING);
        }
    }

    BakeryPatch { name, location, rating }
}

/// Absent and `null` both count as missing.
fn require(body: &Map<String, Value>, fields: &[&str], errors: &mut FieldErrors) {
    for field in fields {
        if matches!(body.get(*field), None | Some(Value::Null)) {
            errors.push(field, MISSING);
        }
    }
}

fn take_string(body: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            if s.trim().is_empty() {
                errors.push(field, EMPTY);
                None
            } else {
                Some(s.clone())
            }
        }
        Some(_) => {
            errors.push(field, NOT_A_STRING);
            None
        }
    }
}

fn take_number(body: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<f64> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => Some(v),
            None => {
                errors.push(field, NOT_A_NUMBER);
                None
            }
        },
        Some(_) => {
            errors.push(field, NOT_A_NUMBER);
            None
        }
    }
}

fn take_integer(body: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<i32> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => match n.as_i64().and_then(|v| i32::try_from(v).ok()) {
            Some(v) => Some(v),
            None => {
                errors.push(field, NOT_AN_INTEGER);
                None
            }
        },
        Some(_) => {
            errors.push(field, NOT_AN_INTEGER);
            None
        }
    }
}

fn take_bool(body: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<bool> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            errors.push(field, NOT_A_BOOLEAN);
            None
        }
    }
}
