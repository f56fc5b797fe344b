//! Types for requests from the frontend to the backend.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Login<'a> {
    pub email: Cow<'a, str>,
    pub password: Cow<'a, str>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrandForm<'a> {
    pub brand_name: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Cow<'a, str>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryForm<'a> {
    pub category_name: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Cow<'a, str>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelForm<'a> {
    pub brand_id: Cow<'a, str>,
    pub model_name: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_number: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Cow<'a, str>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductForm<'a> {
    pub brand_id: Cow<'a, str>,
    pub model_id: Cow<'a, str>,
    pub category_id: Cow<'a, str>,
    pub product_name: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image: Option<Cow<'a, str>>,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Cow<'a, str>>,
}
