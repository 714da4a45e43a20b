//! Per-field binding used by derive-generated code

use std::borrow::Cow;

use crate::convert::Scalar;
use crate::error::BindError;
use crate::source::EnvSource;
use crate::EnvBind;

/// Separator used for sequence fields without an explicit `sep`.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Annotations attached to one field by `#[env(...)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    /// Variable name or path segment. Empty means the field is unannotated.
    pub name: &'a str,
    /// Literal substituted when the looked-up value is empty.
    pub default: Option<&'a str>,
    /// Sequence separator. `Some("")` forces an empty sequence.
    pub sep: Option<&'a str>,
}

impl<'a> FieldSpec<'a> {
    /// Spec for a field annotated with `name` only.
    pub const fn named(name: &'a str) -> Self {
        Self {
            name,
            default: None,
            sep: None,
        }
    }

    /// Whether the field carries a name.
    pub fn is_annotated(&self) -> bool {
        !self.name.is_empty()
    }

    /// Dotted lookup key for this field below `prefix`.
    pub fn key<'p>(&self, prefix: &'p str) -> Cow<'p, str> {
        join_key(prefix, self.name)
    }

    /// Resolve the text for this field.
    ///
    /// Returns `None` for unannotated fields. An empty environment value falls
    /// back to the default literal; an empty default is the same as no value.
    pub fn resolve(&self, prefix: &str, env: &dyn EnvSource) -> Option<String> {
        if !self.is_annotated() {
            return None;
        }

        let key = self.key(prefix);
        match env.var(&key).filter(|value| !value.is_empty()) {
            Some(value) => {
                tracing::debug!(key = %key, source = "env", "resolved field");
                Some(value)
            }
            None => match self.default.filter(|value| !value.is_empty()) {
                Some(default) => {
                    tracing::debug!(key = %key, source = "default", "resolved field");
                    Some(default.to_owned())
                }
                None => {
                    tracing::debug!(key = %key, source = "unset", "resolved field");
                    Some(String::new())
                }
            },
        }
    }
}

/// Join a prefix and a name with `.`; an empty prefix adds nothing.
pub fn join_key<'p>(prefix: &'p str, name: &str) -> Cow<'p, str> {
    if prefix.is_empty() {
        Cow::Owned(name.to_owned())
    } else if name.is_empty() {
        Cow::Borrowed(prefix)
    } else {
        Cow::Owned(format!("{prefix}.{name}"))
    }
}

/// A field type the binder knows how to populate in place.
///
/// Implemented for scalar leaves, `Vec` of scalars, `Option` of any
/// `EnvField`, and every struct deriving `EnvBind`.
pub trait EnvField {
    /// Bind this field as described by `spec`, below `prefix`.
    fn bind_field(
        &mut self,
        spec: &FieldSpec<'_>,
        prefix: &str,
        env: &dyn EnvSource,
    ) -> Result<(), BindError>;
}

fn bind_scalar<T: Scalar>(
    slot: &mut T,
    spec: &FieldSpec<'_>,
    prefix: &str,
    env: &dyn EnvSource,
) {
    let Some(raw) = spec.resolve(prefix, env) else {
        return;
    };

    match T::from_value(&raw) {
        Some(value) => *slot = value,
        None => {
            let ty = std::any::type_name::<T>();
            tracing::debug!(key = %spec.key(prefix), ty, "value did not convert, keeping field");
        }
    }
}

macro_rules! impl_scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvField for $ty {
                fn bind_field(
                    &mut self,
                    spec: &FieldSpec<'_>,
                    prefix: &str,
                    env: &dyn EnvSource,
                ) -> Result<(), BindError> {
                    bind_scalar(self, spec, prefix, env);
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_field!(
    bool, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Split `raw` into converted elements, dropping those that fail.
pub fn split_sequence<T: Scalar>(raw: &str, sep: Option<&str>) -> Vec<T> {
    let sep = sep.unwrap_or(DEFAULT_SEPARATOR);
    if sep.is_empty() || raw.is_empty() {
        return Vec::new();
    }

    raw.split(sep)
        .filter_map(|segment| {
            let element = T::from_segment(segment);
            if element.is_none() {
                tracing::trace!(segment, "dropping sequence element");
            }
            element
        })
        .collect()
}

impl<T: Scalar> EnvField for Vec<T> {
    fn bind_field(
        &mut self,
        spec: &FieldSpec<'_>,
        prefix: &str,
        env: &dyn EnvSource,
    ) -> Result<(), BindError> {
        if let Some(raw) = spec.resolve(prefix, env) {
            *self = split_sequence(&raw, spec.sep);
        }
        Ok(())
    }
}

impl<T: EnvField + Default> EnvField for Option<T> {
    fn bind_field(
        &mut self,
        spec: &FieldSpec<'_>,
        prefix: &str,
        env: &dyn EnvSource,
    ) -> Result<(), BindError> {
        self.get_or_insert_with(T::default)
            .bind_field(spec, prefix, env)
    }
}

/// Field slot handed to generated code.
///
/// Generated code calls `(&mut Slot(&mut field)).bind_slot(..)` with both
/// [`BindSupported`] and [`BindFallback`] in scope. Method resolution picks
/// `BindSupported` when the field type implements [`EnvField`] and falls back
/// to the no-op otherwise, so unsupported field types are left untouched.
pub struct Slot<'a, T>(pub &'a mut T);

#[doc(hidden)]
pub trait BindSupported {
    fn bind_slot(
        &mut self,
        spec: &FieldSpec<'_>,
        prefix: &str,
        env: &dyn EnvSource,
    ) -> Result<(), BindError>;
}

impl<T: EnvField> BindSupported for Slot<'_, T> {
    fn bind_slot(
        &mut self,
        spec: &FieldSpec<'_>,
        prefix: &str,
        env: &dyn EnvSource,
    ) -> Result<(), BindError> {
        self.0.bind_field(spec, prefix, env)
    }
}

#[doc(hidden)]
pub trait BindFallback {
    fn bind_slot(
        &mut self,
        spec: &FieldSpec<'_>,
        prefix: &str,
        env: &dyn EnvSource,
    ) -> Result<(), BindError>;
}

impl<T> BindFallback for &mut Slot<'_, T> {
    fn bind_slot(
        &mut self,
        spec: &FieldSpec<'_>,
        _prefix: &str,
        _env: &dyn EnvSource,
    ) -> Result<(), BindError> {
        let ty = std::any::type_name::<T>();
        tracing::trace!(name = spec.name, ty, "leaving unsupported field untouched");
        Ok(())
    }
}

/// Bind a nested record field.
///
/// An unannotated record splices its children in at `prefix`; an annotated
/// one adds its name as a path segment.
pub fn bind_record<T: EnvBind + ?Sized>(
    record: &mut T,
    spec: &FieldSpec<'_>,
    prefix: &str,
    env: &dyn EnvSource,
) -> Result<(), BindError> {
    let prefix = spec.key(prefix);
    tracing::trace!(prefix = %prefix, "binding nested record");
    record.bind_prefixed(&prefix, env)
}
