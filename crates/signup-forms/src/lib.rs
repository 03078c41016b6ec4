// signup-forms - registration form state with a declarative validation schema
// Typed field paths, stable array entries and a re-entrancy safe submit gate

pub mod config;
pub mod error;
pub mod field_array;
pub mod path;
pub mod record;
pub mod registration;
pub mod render;
pub mod schema;
pub mod state;
pub mod validation;

// Re-export core types
pub use config::{FormConfig, RevalidateScope, SubmitConfig, ValidationConfig, ValidationMode};
pub use error::FormError;
pub use field_array::{EntryId, FieldArray};
pub use path::{ArrayPath, FieldKey, FieldKind, FieldPath};
pub use record::{Address, FieldValue, Hobby, Record};
pub use registration::{RegisteredAddress, RegisteredHobby, Registration};
pub use state::{Binding, FormState, PendingSubmission, SubmitOutcome, SubmitState};
pub use validation::{Validate, ValidationErrors};

// Re-export the validated field types used by `Registration`
pub use signup_types::{Age, EmailAddress, FirstName, Gender, Password, RequiredText};

// Re-export Maud for callers composing the rendered form
pub use maud::{Markup, PreEscaped, DOCTYPE};
