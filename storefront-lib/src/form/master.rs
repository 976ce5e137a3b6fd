//! Forms for colors, sizes, categories and collections.

use super::Form;
use super::parse;
use super::slugify;
use crate::error::ValidationErrors;
use crate::model::Category;
use crate::model::CategoryPayload;
use crate::model::Collection;
use crate::model::CollectionPayload;
use crate::model::Color;
use crate::model::ColorPayload;
use crate::model::Size;
use crate::model::SizePayload;

// =============================================================================
// Size
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeForm {
    pub code: String,
    pub label: String,
    pub sort_order: String,
}

impl From<&Size> for SizeForm {
    fn from(size: &Size) -> Self {
        Self {
            code: size.code.clone(),
            label: size.label.clone(),
            sort_order: size.sort_order.map(|o| o.to_string()).unwrap_or_default(),
        }
    }
}

impl Form for SizeForm {
    type Payload = SizePayload;

    fn validate(&self) -> Result<SizePayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.code.trim().is_empty() {
            errors.add("code", "Size code is required.");
        }
        if self.label.trim().is_empty() {
            errors.add("label", "Size label is required.");
        }
        let sort_order = match parse::integer(&self.sort_order).map(|o| o.map(i32::try_from)) {
            Ok(None) => None,
            Ok(Some(Ok(order))) => Some(order),
            Ok(Some(Err(_))) | Err(()) => {
                errors.add("sortOrder", "Sort order must be a whole number.");
                None
            }
        };

        errors.into_result(|| SizePayload {
            code: self.code.trim().to_string(),
            label: self.label.trim().to_string(),
            sort_order,
        })
    }
}

// =============================================================================
// Color
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorForm {
    pub name: String,
    pub code: String,
    pub hex_code: String,
}

impl From<&Color> for ColorForm {
    fn from(color: &Color) -> Self {
        Self {
            name: color.name.clone(),
            code: color.code.clone(),
            hex_code: color.hex_code.clone(),
        }
    }
}

/// `#RGB` or `#RRGGBB`.
pub fn is_hex_color(raw: &str) -> bool {
    raw.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

impl Form for ColorForm {
    type Payload = ColorPayload;

    fn validate(&self) -> Result<ColorPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Color name is required.");
        }
        if self.code.trim().is_empty() {
            errors.add("code", "Color code is required.");
        }
        let hex_code = self.hex_code.trim();
        if hex_code.is_empty() {
            errors.add("hexCode", "Hex code is required.");
        } else if !is_hex_color(hex_code) {
            errors.add("hexCode", "Hex code must look like #RGB or #RRGGBB.");
        }

        errors.into_result(|| ColorPayload {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            hex_code: hex_code.to_string(),
        })
    }
}

// =============================================================================
// Category
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    /// Left blank to derive it from the name.
    pub slug: String,
}

impl From<&Category> for CategoryForm {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

impl Form for CategoryForm {
    type Payload = CategoryPayload;

    fn validate(&self) -> Result<CategoryPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Category name is required.");
        }
        let slug = resolve_slug(&self.name, &self.slug, &mut errors);

        errors.into_result(|| CategoryPayload {
            name: self.name.trim().to_string(),
            slug,
        })
    }
}

// =============================================================================
// Collection
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionForm {
    pub name: String,
    /// Left blank to derive it from the name.
    pub slug: String,
    pub show_on_home: bool,
    pub home_order: String,
}

impl From<&Collection> for CollectionForm {
    fn from(collection: &Collection) -> Self {
        Self {
            name: collection.name.clone(),
            slug: collection.slug.clone(),
            show_on_home: collection.show_on_home,
            home_order: collection
                .home_order
                .map(|o| o.to_string())
                .unwrap_or_default(),
        }
    }
}

impl Form for CollectionForm {
    type Payload = CollectionPayload;

    fn validate(&self) -> Result<CollectionPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Collection name is required.");
        }
        let slug = resolve_slug(&self.name, &self.slug, &mut errors);
        let home_order = match parse::integer(&self.home_order) {
            Ok(None) => None,
            Ok(Some(order)) => match u32::try_from(order) {
                Ok(order) => Some(order),
                Err(_) => {
                    errors.add("homeOrder", "Home order must be zero or more.");
                    None
                }
            },
            Err(()) => {
                errors.add("homeOrder", "Home order must be a whole number.");
                None
            }
        };

        errors.into_result(|| CollectionPayload {
            name: self.name.trim().to_string(),
            slug,
            show_on_home: self.show_on_home,
            home_order,
        })
    }
}

/// The typed slug, or one derived from the name when left blank.
fn resolve_slug(name: &str, slug: &str, errors: &mut ValidationErrors) -> String {
    let slug = match parse::non_blank(slug) {
        Some(typed) => slugify(typed),
        None => slugify(name),
    };
    if slug.is_empty() && !name.trim().is_empty() {
        errors.add("slug", "Slug must contain letters or numbers.");
    }
    slug
}
