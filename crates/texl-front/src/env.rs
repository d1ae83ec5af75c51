//! Type environment: declared symbol types, the dtype registry, and
//! binary-operation compatibility rules.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use texl_ir::{Module, TensorType, ValueId};

use crate::TypeError;

/// Dtypes registered by [`TypeEnv::new`].
pub const DEFAULT_DTYPES: &[&str] = &["i32", "i64", "f32", "f64"];

/// Per-compilation-unit state for static validation.
///
/// Owns the registered dtype set (fixed at construction), the symbol table
/// (last declaration for a name wins), and the lazy map from symbol name
/// to materialized [`ValueId`]. One environment serves one lowering
/// session; construct independent environments for independent
/// compilations.
#[derive(Clone, Debug)]
pub struct TypeEnv {
    known_dtypes: BTreeSet<String>,
    symbols: IndexMap<String, TensorType>,
    materialized: HashMap<String, ValueId>,
}

impl Default for TypeEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeEnv {
    /// Creates an environment with the default dtype registry.
    pub fn new() -> Self {
        Self::with_dtypes(DEFAULT_DTYPES.iter().copied())
    }

    /// Creates an environment with a caller-supplied dtype registry.
    ///
    /// The registry is immutable afterwards.
    pub fn with_dtypes<I, S>(dtypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_dtypes: dtypes.into_iter().map(Into::into).collect(),
            symbols: IndexMap::new(),
            materialized: HashMap::new(),
        }
    }

    /// Fails with [`TypeError::UnknownDtype`] unless `dtype` is registered.
    pub fn ensure_known_dtype(&self, dtype: &str) -> Result<(), TypeError> {
        if self.known_dtypes.contains(dtype) {
            Ok(())
        } else {
            Err(TypeError::UnknownDtype(dtype.to_string()))
        }
    }

    /// Binds `name` to `tensor_type`, overwriting any prior binding.
    pub fn add_symbol(
        &mut self,
        name: impl Into<String>,
        tensor_type: TensorType,
    ) -> Result<(), TypeError> {
        self.ensure_known_dtype(&tensor_type.dtype)?;
        self.symbols.insert(name.into(), tensor_type);
        Ok(())
    }

    /// Returns the type bound to `name`.
    pub fn resolve_symbol(&self, name: &str) -> Result<&TensorType, TypeError> {
        self.symbols
            .get(name)
            .ok_or_else(|| TypeError::UndeclaredSymbol(name.to_string()))
    }

    /// Emits the `Input` instruction for `name` on its first reference and
    /// returns the cached id on every subsequent one.
    ///
    /// Dedup is keyed by name, so a symbol referenced anywhere in the tree
    /// is materialized exactly once per session.
    pub(crate) fn materialize_symbol(
        &mut self,
        module: &mut Module,
        name: &str,
        tensor_type: &TensorType,
    ) -> ValueId {
        if let Some(&id) = self.materialized.get(name) {
            return id;
        }
        let id = module.declare_input(name, tensor_type.clone());
        log::debug!("materialized input '{name}' as %{}", id.0);
        self.materialized.insert(name.to_string(), id);
        id
    }

    /// Computes the result type of a binary operation.
    ///
    /// Dtypes are compared before shapes; equal shapes pass through; a
    /// scalar operand broadcasts over the other side's shape (symmetric);
    /// two unequal non-scalar shapes are rejected.
    pub fn validate_binop(
        &self,
        op: &str,
        lhs: &TensorType,
        rhs: &TensorType,
    ) -> Result<TensorType, TypeError> {
        if lhs.dtype != rhs.dtype {
            return Err(TypeError::DtypeMismatch {
                op: op.to_string(),
                lhs: lhs.dtype.clone(),
                rhs: rhs.dtype.clone(),
            });
        }

        if lhs.shape == rhs.shape {
            return Ok(lhs.clone());
        }

        if lhs.is_scalar() {
            return Ok(rhs.clone());
        }
        if rhs.is_scalar() {
            return Ok(lhs.clone());
        }

        Err(TypeError::ShapeMismatch {
            op: op.to_string(),
            lhs: lhs.shape.clone(),
            rhs: rhs.shape.clone(),
        })
    }

    /// Re-validates every bound symbol's dtype against the registry, in
    /// binding order. A final consistency sweep, independent of any
    /// expression.
    pub fn validate_program(&self) -> Result<(), TypeError> {
        for tensor_type in self.symbols.values() {
            self.ensure_known_dtype(&tensor_type.dtype)?;
        }
        Ok(())
    }
}
