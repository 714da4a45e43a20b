//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates binding attributes from the struct and
//! its fields during macro expansion.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Field, LitStr};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Variable name or path segment. `None` leaves the field unannotated.
    pub name: Option<String>,

    /// Literal used when the variable is unset or empty.
    pub default: Option<String>,

    /// Separator for sequence fields.
    pub sep: Option<String>,

    /// Leave the field untouched.
    pub skip: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes with other paths are ignored so other derives can use them.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&field.attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    return set_once(&meta, &mut attrs.name);
                }

                if meta.path.is_ident("default") {
                    return set_once(&meta, &mut attrs.default);
                }

                if meta.path.is_ident("sep") {
                    return set_once(&meta, &mut attrs.sep);
                }

                if meta.path.is_ident("skip") {
                    if attrs.skip {
                        return Err(meta.error("duplicate env attribute `skip`"));
                    }
                    attrs.skip = true;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `name`, `default`, `sep` or `skip`"))
            })?;
        }

        Ok(attrs)
    }
}

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    /// Root path prefix for top-level binds.
    pub prefix: Option<String>,
}

impl ContainerAttrs {
    /// Extract and parse struct-level `#[env(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut container = Self::default();

        for attr in env_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    return set_once(&meta, &mut container.prefix);
                }

                Err(meta.error("unsupported struct-level env attribute, expected `prefix`"))
            })?;
        }

        Ok(container)
    }
}

fn env_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("env"))
}

/// Parse `key = "literal"` into `slot`, rejecting a second occurrence.
fn set_once(meta: &ParseNestedMeta<'_>, slot: &mut Option<String>) -> syn::Result<()> {
    let value: LitStr = meta.value()?.parse()?;
    if slot.is_some() {
        let key = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(meta.error(format!("duplicate env attribute `{key}`")));
    }
    *slot = Some(value.value());
    Ok(())
}
