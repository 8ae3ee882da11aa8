/* src/client/rust/src/lib.rs */

pub mod address;
pub mod form;
pub mod resolver;
pub mod source;
pub mod transport;


pub use address::with_locale;
pub use form::{
  ContactForm, FailureReason, FormStatus, NETWORK_ERROR, SUCCESS_NOTICE, SubmissionOutcome,
  SubmitBlocked,
};
pub use resolver::{LoadOutcome, PendingLoad, Resolver, ResolverState};
pub use source::{FetchError, HttpTableSource, TableSource};
pub use transport::{ContactTransport, HttpContactTransport, TransportError, TransportResponse};

/// Re-export the shared core types
pub use noosi_server;
