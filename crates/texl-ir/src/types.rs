//! Tensor types: an element dtype token plus a static shape.

use std::fmt;

/// The type of a tensor-valued quantity.
///
/// `dtype` is an open string token; checking it against the registered
/// dtype set is the type environment's concern, not this struct's. An
/// empty `shape` denotes a scalar. Two tensor types are equal iff both
/// dtype and shape are equal.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TensorType {
    /// Element kind token, e.g. `"f32"`.
    pub dtype: String,
    /// Ordered dimension sizes; empty for scalars.
    pub shape: Vec<u64>,
}

impl TensorType {
    /// Creates a tensor type with the given dtype and shape.
    pub fn new(dtype: impl Into<String>, shape: impl Into<Vec<u64>>) -> Self {
        Self {
            dtype: dtype.into(),
            shape: shape.into(),
        }
    }

    /// Creates a scalar type (empty shape).
    pub fn scalar(dtype: impl Into<String>) -> Self {
        Self {
            dtype: dtype.into(),
            shape: Vec::new(),
        }
    }

    /// Returns `true` if this type has no dimensions.
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }
}

impl fmt::Display for TensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self.shape.iter().map(|d| d.to_string()).collect();
        write!(f, "tensor<{}[{}]>", self.dtype, dims.join(", "))
    }
}
