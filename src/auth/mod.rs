//! Authentication flow for the landing and portfolio pages: field validation,
//! error normalization, the session slot, the request seam, view switching,
//! and the submission lifecycle that ties them together. It keeps flow logic
//! out of any concrete UI. Form state holds plaintext passwords, so nothing in
//! this module logs request bodies or credentials.

pub mod backend_error;
pub mod gateway;
pub mod guard;
pub mod session;
pub mod storage;
pub mod submission;
pub mod types;
pub mod ui;
pub mod validation;
pub mod view;

pub use gateway::{GatewayResponse, RequestGateway};
pub use guard::{enter_portfolio, logout};
pub use session::SessionStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use submission::{Collaborators, FormSubmissionController, SubmitOutcome};
pub use ui::{Delay, Navigator, Renderer, TokioDelay};
pub use view::{ViewState, ViewStateController};
