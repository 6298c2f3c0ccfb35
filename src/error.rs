/// The diagnostic type shared by every stage.
///
/// Defines `Diagnostic`, the tagged `{kind, offset, side}` value each stage
/// returns on its first violation, together with `DiagnosticKind` and `Side`.
pub mod diagnostic;
/// Packing diagnostics into a single transportable value.
///
/// Converts diagnostics to and from `ErrorCode`, a bit-packed `u32`, and maps
/// offsets back to the tokens they were raised for.
pub mod codec;
/// User-facing rendering of diagnostics.
///
/// `Report` combines a diagnostic with the source text of the token it points
/// at and the limits in force, producing messages such as
/// `4: operator "*" missing left-hand expression`.
pub mod report;

pub use codec::{CodecError, ErrorCode, resolve_token};
pub use diagnostic::{Diagnostic, DiagnosticKind, Side};
pub use report::Report;
