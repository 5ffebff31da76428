//! Application state and event dispatch.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::battery::BatteryState;
use crate::clock::ClockSample;
use crate::event::Event;
use crate::msg::{Dict, MessagePort};
use crate::ui::{ClassicFace, FaceConfig};
use crate::weather::{self, WeatherReport};

/// The whole watchface application: the face, the companion port, and the
/// table binding each host event kind to its handler.
///
/// Handlers never block and no failure is fatal; channel trouble is logged
/// and the next scheduled tick tries again.
pub struct App<P: MessagePort> {
    config: FaceConfig,
    face: Option<ClassicFace>,
    port: P,
}

impl<P: MessagePort> App<P> {
    /// Application state before the window loads.
    pub fn new(port: P, config: FaceConfig) -> Self {
        Self {
            config,
            face: None,
            port,
        }
    }

    /// Route one host event to its handler.
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::WindowLoad { clock, battery } => self.on_load(clock, battery),
            Event::WindowUnload => self.face = None,
            Event::MinuteTick(clock) => self.on_tick(clock),
            Event::BatteryChanged(state) => self.on_battery(state),
            Event::InboxReceived(dict) => self.on_inbox(&dict),
            Event::InboxDropped(reason) => error!("Inbox message dropped: {}", reason),
            Event::OutboxSent => info!("Outbox send succeeded"),
            Event::OutboxFailed(reason) => error!("Outbox send failed: {}", reason),
        }
    }

    fn on_load(&mut self, clock: ClockSample, battery: BatteryState) {
        let mut face = ClassicFace::new(self.config);
        face.update_time(&clock);
        face.update_battery(battery);
        self.face = Some(face);
    }

    fn on_tick(&mut self, clock: ClockSample) {
        if let Some(face) = &mut self.face {
            face.update_time(&clock);
        }
        if weather::due_for_request(clock.minute) {
            self.request_weather();
        }
    }

    fn on_battery(&mut self, state: BatteryState) {
        if let Some(face) = &mut self.face {
            face.update_battery(state);
        }
    }

    fn on_inbox(&mut self, dict: &Dict) {
        // A payload missing either field leaves the last report on screen.
        let Some(report) = WeatherReport::from_dict(dict) else {
            return;
        };
        if let Some(face) = &mut self.face {
            face.update_weather(&report);
        }
    }

    fn request_weather(&mut self) {
        // The single-entry request always fits the outbox budget.
        let Ok(dict) = weather::request_dict() else {
            return;
        };
        if let Err(reason) = self.port.send(&dict) {
            error!("Outbox send failed: {}", reason);
        }
    }

    /// Face contents, present between load and unload.
    pub fn face(&self) -> Option<&ClassicFace> {
        self.face.as_ref()
    }

    /// The companion port, for hosts that own the bus end.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Render the loaded face; a no-op before load or after unload.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(face) = &self.face {
            face.draw(target)?;
        }
        Ok(())
    }
}
