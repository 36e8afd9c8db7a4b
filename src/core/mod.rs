/// Reconciliation core: pure set logic, no I/O.
/// The HTTP layer and the report renderer both consume `Reconciliation`.

pub mod parser;
pub mod recon;
pub mod validator;

pub use parser::{parse, parse_revoke_list, serialize, Delimiter};
pub use recon::{reconcile, ReconcileError, Reconciliation};
