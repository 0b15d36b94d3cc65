//! Type-level queries: standard-library classification and
//! assigned-type inference.

use crate::state::CheckerState;
use tracing::trace;
use tsq_ast::{enclosing_source_file, NodeIndex};
use tsq_binder::internal_names;
use tsq_solver::TypeId;

impl CheckerState<'_> {
    /// Whether `type_id` originates from the default/standard library
    /// rather than user code.
    ///
    /// With `expected_name` the defining symbol must carry exactly that
    /// name; without it, only the frontend's anonymous-type marker is
    /// rejected. A symbol with no value declaration is assumed to be a
    /// library construct. This distinguishes a user-authored type that
    /// shares a well-known name (a local `Promise`) from the library's
    /// own, so transformers do not mis-special-case it.
    pub fn is_standard_library_type(
        &self,
        type_id: TypeId,
        expected_name: Option<&str>,
    ) -> bool {
        let Some(symbol_id) = self.types.type_symbol(type_id) else {
            return false;
        };
        let Some(symbol) = self.binder.symbol(symbol_id) else {
            return false;
        };

        let name_matches = match expected_name {
            Some(name) => symbol.name == name,
            None => symbol.name != internal_names::ANONYMOUS_TYPE,
        };
        if !name_matches {
            trace!(name = %symbol.name, ?expected_name, "symbol name rejected");
            return false;
        }

        // Assume a lib construct when no value declaration exists.
        let declaration = symbol.value_declaration;
        if declaration.is_none() {
            return true;
        }

        let Some(file) = enclosing_source_file(self.arena, declaration) else {
            return false;
        };
        self.is_source_file_default_library(file)
    }

    /// Effective type assigned to `expr`: the contextual type when the
    /// frontend reports one, otherwise the expression's own computed type
    /// (which itself bottoms out at the `any` sentinel). Total.
    pub fn infer_assigned_type(&self, expr: NodeIndex) -> TypeId {
        self.get_contextual_type(expr)
            .unwrap_or_else(|| self.get_type_at_location(expr))
    }
}
