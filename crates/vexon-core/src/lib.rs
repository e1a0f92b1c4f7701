//! # vexon-core
//!
//! Domain types shared by every Vexon frontend: the response envelope, the
//! persisted session, the dashboard route guard and a few checkout helpers.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   envelope    ┌──────────────┐   REST   ┌──────────────┐
//! │  web / cli   │◀──────────────│  ApiClient   │─────────▶│  Vexon API   │
//! └──────┬───────┘               └──────┬───────┘          └──────────────┘
//!        │ guard()                      │ save / delete
//!        ▼                              ▼
//! ┌─────────────────────────────────────────────┐
//! │            SessionStore ({user, token})     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Nothing here talks to the network; see `vexon-client` for the operations.

pub mod chat;
pub mod checkout;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod model;
pub mod password;
pub mod session;

pub use chat::{ChatMessage, Role, Transcript};
pub use checkout::format_card_number;
pub use envelope::{ApiResponse, Status};
pub use error::{CoreError, Result};
pub use guard::{guard, Access, LoginRedirect};
pub use model::{
    BillingAddress, CardDetails, ChatReply, ContactForm, Generation, Plan, Session, SignupForm,
    User,
};
pub use password::digest_password;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, DEFAULT_SESSION_KEY};
