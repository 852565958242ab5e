pub mod api;
pub mod banner;
pub mod codec;
pub mod commands;
pub mod config;
pub mod consts;
pub mod form;
pub mod logging;
pub mod model;
pub mod roster;
pub mod spinner;
pub mod validation;
