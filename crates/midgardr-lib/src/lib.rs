pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::Config;

pub mod probe;
pub use probe::LocalState;

pub mod remote;
pub use remote::RemoteVersions;

pub mod project_state;
pub use project_state::ProjectState;

pub mod action;
pub use action::{Action, MenuItem, UiCommand};

pub mod resolver;
pub use resolver::resolve;

pub mod dispatch;
pub use dispatch::{Dispatcher, Outcome};
