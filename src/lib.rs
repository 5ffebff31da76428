//! Application core for a minimal wearable watchface: current time, optional
//! date and battery readouts, and weather delivered over the companion
//! message channel.
//!
//! Everything here is host-agnostic. The device runtime delivers
//! [`event::Event`]s into the owned application state ([`app::App`]), which
//! formats into bounded per-region text buffers and draws onto any
//! `embedded-graphics` target. `src/main.rs` carries a simulated host loop
//! for running the face off-device.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod app;
pub mod battery;
pub mod clock;
pub mod display;
pub mod event;
pub mod msg;
pub mod ui;
pub mod weather;
