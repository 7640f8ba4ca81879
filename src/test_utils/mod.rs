#![allow(missing_docs)]

pub(crate) mod controller;
pub(crate) mod http;

pub(crate) use controller::get_recording_state;
pub(crate) use http::{assert_dispatches, get_recording_server};
