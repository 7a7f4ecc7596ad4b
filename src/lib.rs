pub mod bindings;
pub mod config;
pub mod decoder;
pub mod error;
pub mod instance;
pub mod key;
pub mod notify;
pub mod recognizer;

pub use crate::bindings::{Binding, BindingTable, Callback, CallbackError, CaseSensitivity};
pub use crate::config::Config;
pub use crate::decoder::{Signal, decode};
pub use crate::error::{Error, Result};
pub use crate::instance::InstanceSlot;
pub use crate::key::{KeyPress, Modifiers, codes};
pub use crate::notify::{Notification, NotificationSink};
pub use crate::recognizer::{
    Evaluation, Mode, Recognizer, RecognizerBuilder, RecognizerSnapshot, Step, create,
};
