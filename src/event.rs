//! Events delivered by the host runtime.
//!
//! One variant per registered callback. Handlers run synchronously on the
//! host's single cooperative thread and must return promptly; nothing here
//! blocks or suspends.

use crate::battery::BatteryState;
use crate::clock::ClockSample;
use crate::msg::{ChannelError, Dict};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Window pushed onto the stack; carries the startup samples.
    WindowLoad {
        clock: ClockSample,
        battery: BatteryState,
    },
    /// Window popped; every display resource is released.
    WindowUnload,
    /// Per-minute timer tick.
    MinuteTick(ClockSample),
    /// Battery change pushed by the power service.
    BatteryChanged(BatteryState),
    /// Inbound dictionary from the companion.
    InboxReceived(Dict),
    /// The bus dropped an inbound message before delivery.
    InboxDropped(ChannelError),
    /// A previous outbound send was delivered.
    OutboxSent,
    /// A previous outbound send failed.
    OutboxFailed(ChannelError),
}
