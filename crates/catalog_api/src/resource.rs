//! Endpoint layout of the catalog resources.
//!
//! Every resource lives under `/api/<scope>` and exposes
//! `get<Plural>`, `create<Singular>`, `update<Singular>/<id>` and
//! `delete<Singular>/<id>`.

use crate::{request, response};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

pub trait Resource {
    const SCOPE: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    type Record: DeserializeOwned + Debug + Clone + 'static;
    type Form<'a>: Serialize;

    fn list_path() -> String {
        format!("/api/{}/get{}", Self::SCOPE, Self::PLURAL)
    }

    fn create_path() -> String {
        format!("/api/{}/create{}", Self::SCOPE, Self::SINGULAR)
    }

    fn update_path(id: &str) -> String {
        format!("/api/{}/update{}/{id}", Self::SCOPE, Self::SINGULAR)
    }

    fn delete_path(id: &str) -> String {
        format!("/api/{}/delete{}/{id}", Self::SCOPE, Self::SINGULAR)
    }
}

pub enum Brands {}

impl Resource for Brands {
    const SCOPE: &'static str = "brand";
    const SINGULAR: &'static str = "Brand";
    const PLURAL: &'static str = "Brands";

    type Record = response::Brand;
    type Form<'a> = request::BrandForm<'a>;
}

pub enum Categories {}

impl Resource for Categories {
    const SCOPE: &'static str = "category";
    const SINGULAR: &'static str = "Category";
    const PLURAL: &'static str = "Categories";

    type Record = response::Category;
    type Form<'a> = request::CategoryForm<'a>;
}

pub enum Models {}

impl Resource for Models {
    const SCOPE: &'static str = "model";
    const SINGULAR: &'static str = "Model";
    const PLURAL: &'static str = "Models";

    type Record = response::Model;
    type Form<'a> = request::ModelForm<'a>;
}

pub enum Products {}

impl Resource for Products {
    const SCOPE: &'static str = "product";
    const SINGULAR: &'static str = "Product";
    const PLURAL: &'static str = "Products";

    type Record = response::Product;
    type Form<'a> = request::ProductForm<'a>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn category_paths() {
        assert_eq!(Categories::list_path(), "/api/category/getCategories");
        assert_eq!(Categories::create_path(), "/api/category/createCategory");
        assert_eq!(
            Categories::update_path("65f0"),
            "/api/category/updateCategory/65f0"
        );
        assert_eq!(
            Categories::delete_path("65f0"),
            "/api/category/deleteCategory/65f0"
        );
    }

    #[test]
    fn product_paths() {
        assert_eq!(Products::list_path(), "/api/product/getProducts");
        assert_eq!(Products::delete_path("p1"), "/api/product/deleteProduct/p1");
    }
}
